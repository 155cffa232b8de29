use bevy::prelude::*;

use crate::{
    game::session::PuzzleSession,
    settings::{LAYOUT_ENV_VAR, load_board},
};

/// System: Load the board and start the session
/// Runs first in Startup; everything else reads `PuzzleSession`
pub fn setup_puzzle(mut commands: Commands) {
    match load_board() {
        Ok(graph) => {
            info!("✓ Board '{}' loaded:", graph.name());
            info!("  - {} vertices", graph.vertex_count());
            info!("  - {} edges", graph.edge_count());
            if let Ok(path) = std::env::var(LAYOUT_ENV_VAR) {
                info!("  - from {}", path);
            }
            if !graph.has_dodecahedron_shape() {
                warn!(
                    "Board '{}' is not a dodecahedron (20 vertices, 30 edges, degree 3); \
                     a Hamiltonian cycle may not exist",
                    graph.name()
                );
            }

            commands.insert_resource(PuzzleSession::new(graph));
        }
        Err(e) => {
            error!("Failed to load board layout: {}", e);
            panic!("Cannot continue without a board");
        }
    }
}
