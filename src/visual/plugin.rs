use crate::settings::BoardSettings;
use crate::visual::edges::{PathGizmos, configure_gizmos, draw_board_edges};
use crate::visual::interactions::{HoverState, handle_key_commands, handle_pointer_input};
use crate::visual::nodes::{draw_vertex_outlines, update_node_visuals};
use crate::visual::setup::{setup_puzzle, setup_scene, update_scene_metrics};
use crate::visual::ui::{
    handle_reset_button, spawn_hud, spawn_vertex_labels, update_hud, update_vertex_labels,
};
use bevy::prelude::*;

pub struct BoardPlugin;

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        let settings = BoardSettings::default();

        app.insert_resource(ClearColor(settings.background))
            .insert_resource(settings)
            .init_resource::<HoverState>()
            .init_gizmo_group::<PathGizmos>()
            // Load the board first; scene and UI are built from the session
            .add_systems(
                Startup,
                (
                    setup_puzzle,
                    setup_scene,
                    spawn_hud,
                    spawn_vertex_labels,
                    configure_gizmos,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    update_scene_metrics,
                    // Input: one session mutation at a time
                    handle_key_commands,
                    handle_pointer_input,
                    handle_reset_button,
                    // Visual updates
                    update_node_visuals,
                    draw_board_edges,
                    draw_vertex_outlines,
                    update_vertex_labels,
                    update_hud,
                )
                    .chain(),
            );
    }
}
