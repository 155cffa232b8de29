use bevy::prelude::*;

use crate::{
    game::session::PuzzleSession,
    graph::Edge,
    settings::BoardSettings,
    visual::setup::SceneMetrics,
};

/// Board edges sit behind the path, which sits behind the vertex discs
const EDGE_DEPTH: f32 = -0.02;
const PATH_DEPTH: f32 = -0.01;

/// Thicker lines for the walked path
#[derive(Default, Reflect, GizmoConfigGroup)]
pub struct PathGizmos;

/// System: Set line widths once at startup
pub fn configure_gizmos(mut config_store: ResMut<GizmoConfigStore>) {
    let (config, _) = config_store.config_mut::<DefaultGizmoConfigGroup>();
    config.line.width = 2.0;

    let (config, _) = config_store.config_mut::<PathGizmos>();
    config.line.width = 5.0;
}

fn edge_endpoints(
    session: &PuzzleSession,
    metrics: &SceneMetrics,
    edge: Edge,
    depth: f32,
) -> Option<(Vec3, Vec3)> {
    let graph = session.graph();
    let lift = Vec3::Z * depth;
    Some((
        metrics.to_world(graph.position(edge.from)?) + lift,
        metrics.to_world(graph.position(edge.to)?) + lift,
    ))
}

/// System: Draw every board edge, the current path on top, and the closing
/// edge once the cycle is closed
pub fn draw_board_edges(
    mut gizmos: Gizmos,
    mut path_gizmos: Gizmos<PathGizmos>,
    session: Res<PuzzleSession>,
    settings: Res<BoardSettings>,
    metrics: Res<SceneMetrics>,
) {
    for &edge in session.graph().edges() {
        if let Some((a, b)) = edge_endpoints(&session, &metrics, edge, EDGE_DEPTH) {
            gizmos.line(a, b, settings.edge_color);
        }
    }

    for edge in session.path_edges() {
        if let Some((a, b)) = edge_endpoints(&session, &metrics, edge, PATH_DEPTH) {
            path_gizmos.line(a, b, settings.path_color);
        }
    }

    let closing = session
        .closing_edge()
        .and_then(|edge| edge_endpoints(&session, &metrics, edge, PATH_DEPTH));
    if let Some((a, b)) = closing {
        path_gizmos.line(a, b, settings.closing_color);
    }
}
