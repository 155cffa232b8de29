use bevy::prelude::*;

use crate::{
    camera::MainCamera,
    game::session::PuzzleSession,
    graph::VertexId,
    visual::setup::SceneMetrics,
};

const LABEL_FONT_SIZE: f32 = 14.0;

/// UI text showing a vertex's 0-based index over its disc
#[derive(Component)]
pub struct VertexLabel {
    pub vertex: VertexId,
}

pub fn spawn_vertex_labels(mut commands: Commands, session: Res<PuzzleSession>) {
    for vertex in session.graph().vertices() {
        commands.spawn((
            Text::new(vertex.to_string()),
            TextFont {
                font_size: LABEL_FONT_SIZE,
                ..default()
            },
            TextColor(Color::BLACK),
            Node {
                position_type: PositionType::Absolute,
                ..default()
            },
            VertexLabel { vertex },
        ));
    }
}

/// System: Keep each label centred on its vertex's projected position
pub fn update_vertex_labels(
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    session: Res<PuzzleSession>,
    metrics: Res<SceneMetrics>,
    mut labels: Query<(&VertexLabel, &ComputedNode, &mut Node)>,
) {
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };

    for (label, computed, mut node) in &mut labels {
        let Some(position) = session.graph().position(label.vertex) else {
            continue;
        };
        let Ok(viewport) = camera.world_to_viewport(camera_transform, metrics.to_world(position))
        else {
            continue;
        };

        let half_size = computed.size() * computed.inverse_scale_factor() * 0.5;
        let left = Val::Px(viewport.x - half_size.x);
        let top = Val::Px(viewport.y - half_size.y);

        // Write only on change; every Node write triggers a relayout
        if node.left != left || node.top != top {
            node.left = left;
            node.top = top;
        }
    }
}
