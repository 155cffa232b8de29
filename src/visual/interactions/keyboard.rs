use bevy::prelude::*;

use crate::{
    game::session::PuzzleSession,
    input::KeyCommand,
    visual::interactions::{reset_board, select_vertex},
};

/// System: Apply digit and reset keys
pub fn handle_key_commands(
    mut commands: MessageReader<KeyCommand>,
    mut session: ResMut<PuzzleSession>,
) {
    for command in commands.read() {
        match *command {
            KeyCommand::Select(index) => select_vertex(&mut session, index),
            KeyCommand::Reset => reset_board(&mut session),
        }
    }
}
