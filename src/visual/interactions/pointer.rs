use bevy::prelude::*;

use crate::{
    camera::MainCamera,
    game::session::PuzzleSession,
    graph::VertexId,
    input::{PointerEvent, PointerEventType},
    settings::BoardSettings,
    visual::{interactions::select_vertex, setup::SceneMetrics},
};

#[derive(Resource, Default)]
pub struct HoverState {
    pub hovered_node: Option<VertexId>,
}

/// Nearest vertex within `radius` of `point`; all in board units
pub fn pick_vertex(point: Vec2, positions: &[Vec2], radius: f32) -> Option<VertexId> {
    positions
        .iter()
        .enumerate()
        .map(|(index, position)| (VertexId(index), point.distance(*position)))
        .filter(|&(_, distance)| distance <= radius)
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(vertex, _)| vertex)
}

/// System: Track the hovered vertex and select on press
pub fn handle_pointer_input(
    mut pointer_events: MessageReader<PointerEvent>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    metrics: Res<SceneMetrics>,
    settings: Res<BoardSettings>,
    mut session: ResMut<PuzzleSession>,
    mut hover_state: ResMut<HoverState>,
) {
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };

    for event in pointer_events.read() {
        let Some(world_pos) = event.to_world_position(camera, camera_transform) else {
            continue;
        };

        let picked = pick_vertex(
            metrics.to_board(world_pos),
            session.graph().positions(),
            settings.pick_radius(),
        );

        hover_state.hovered_node = picked;

        // A press away from every vertex is simply ignored
        if event.event_type != PointerEventType::Down {
            continue;
        }
        if let Some(vertex) = picked {
            select_vertex(&mut session, i64::from(vertex));
        }
    }
}
