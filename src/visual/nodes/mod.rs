use bevy::prelude::*;

use crate::{
    game::session::PuzzleSession,
    graph::VertexId,
    settings::BoardSettings,
    visual::{interactions::HoverState, setup::SceneMetrics},
};

/// Outline rings sit just in front of the discs
const OUTLINE_DEPTH: f32 = 0.01;

/// Hover ring radius relative to the vertex radius
const HOVER_RING_SCALE: f32 = 1.35;

#[derive(Component)]
pub struct GraphNode {
    pub vertex: VertexId,
}

/// How a vertex is filled, derived from the path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexStyle {
    Idle,
    Start,
    Visited,
}

pub fn vertex_style(session: &PuzzleSession, vertex: VertexId) -> VertexStyle {
    if session.is_start(vertex) {
        VertexStyle::Start
    } else if session.is_visited(vertex) {
        VertexStyle::Visited
    } else {
        VertexStyle::Idle
    }
}

pub fn style_color(style: VertexStyle, settings: &BoardSettings) -> Color {
    match style {
        VertexStyle::Idle => settings.idle_color,
        VertexStyle::Start => settings.start_color,
        VertexStyle::Visited => settings.visited_color,
    }
}

/// System: Recolor discs after a move and re-place them after a resize
pub fn update_node_visuals(
    session: Res<PuzzleSession>,
    settings: Res<BoardSettings>,
    metrics: Res<SceneMetrics>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut nodes: Query<(&GraphNode, &MeshMaterial3d<StandardMaterial>, &mut Transform)>,
) {
    if !session.is_changed() && !metrics.is_changed() {
        return;
    }

    let radius = metrics.world_length(settings.vertex_radius);

    for (node, material, mut transform) in &mut nodes {
        if let Some(position) = session.graph().position(node.vertex) {
            transform.translation = metrics.to_world(position);
            transform.scale = Vec3::splat(radius);
        }

        if let Some(material) = materials.get_mut(&material.0) {
            material.base_color = style_color(vertex_style(&session, node.vertex), &settings);
        }
    }
}

/// System: Outline every vertex and ring the hovered one, green when
/// selecting it would be accepted and red otherwise
pub fn draw_vertex_outlines(
    mut gizmos: Gizmos,
    session: Res<PuzzleSession>,
    settings: Res<BoardSettings>,
    metrics: Res<SceneMetrics>,
    hover_state: Res<HoverState>,
) {
    let radius = metrics.world_length(settings.vertex_radius);
    let lift = Vec3::Z * OUTLINE_DEPTH;

    for &position in session.graph().positions() {
        let center = metrics.to_world(position) + lift;
        gizmos.circle(Isometry3d::from_translation(center), radius, settings.outline_color);
    }

    let Some(hovered) = hover_state.hovered_node else {
        return;
    };
    let Some(position) = session.graph().position(hovered) else {
        return;
    };

    let color = match session.check_move(hovered) {
        Ok(None) => settings.legal_color,
        _ => settings.illegal_color,
    };
    gizmos.circle(
        Isometry3d::from_translation(metrics.to_world(position) + lift),
        radius * HOVER_RING_SCALE,
        color,
    );
}
