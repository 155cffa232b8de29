pub mod keyboard;
pub mod pointer;

pub use keyboard::handle_key_commands;
pub use pointer::{HoverState, handle_pointer_input};

use bevy::prelude::*;

use crate::{
    game::session::PuzzleSession,
    graph::{CompletionOutcome, MoveResult},
};

/// Forward a selection to the session and log what happened
pub fn select_vertex(session: &mut PuzzleSession, index: i64) {
    match session.select(index) {
        Ok(MoveResult::Accepted(CompletionOutcome::Incomplete)) => {
            info!(
                "Vertex {} added ({})",
                index,
                session.progress().display_string()
            );
        }
        Ok(MoveResult::Accepted(CompletionOutcome::CycleClosed)) => {
            info!("🎉 Hamiltonian cycle closed! 🎉");
        }
        Ok(MoveResult::Accepted(CompletionOutcome::CycleNotClosed)) => {
            info!("All vertices visited, but the last one has no edge back to the start");
        }
        Ok(MoveResult::Rejected(rejection)) => {
            info!("❌ Vertex {} rejected: {}", index, rejection);
        }
        Err(err) => {
            warn!("Selection dropped: {}", err);
        }
    }
}

pub fn reset_board(session: &mut PuzzleSession) {
    session.reset();
    info!("Board reset");
}
