use bevy::prelude::*;
use thiserror::Error;

use crate::graph::{BoardGraph, GraphError, Layout};

/// Environment variable naming a JSON layout file to play instead of the
/// embedded dodecahedron
pub const LAYOUT_ENV_VAR: &str = "HAMILTON_LAYOUT";

#[derive(Error, Debug)]
pub enum LayoutSourceError {
    #[error("cannot read layout file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Build the board from `path` if given, otherwise from the embedded table
pub fn board_from_source(path: Option<&str>) -> Result<BoardGraph, LayoutSourceError> {
    let Some(path) = path else {
        return Ok(BoardGraph::dodecahedron()?);
    };

    let json = std::fs::read_to_string(path).map_err(|source| LayoutSourceError::Read {
        path: path.to_string(),
        source,
    })?;

    Ok(BoardGraph::from_layout(&Layout::parse(&json)?)?)
}

/// Build the board, honouring [`LAYOUT_ENV_VAR`]
pub fn load_board() -> Result<BoardGraph, LayoutSourceError> {
    let path = std::env::var(LAYOUT_ENV_VAR).ok();
    board_from_source(path.as_deref())
}

/// Look of the board. Sizes are in board units, where the outer ring of the
/// layout has radius 1.
#[derive(Resource, Debug, Clone)]
pub struct BoardSettings {
    pub vertex_radius: f32,
    /// Extra slack around a vertex that still counts as clicking it
    pub pick_margin: f32,
    /// Fraction of the board region the outer ring spans
    pub board_fill: f32,
    pub background: Color,
    pub edge_color: Color,
    pub path_color: Color,
    pub closing_color: Color,
    pub outline_color: Color,
    pub idle_color: Color,
    pub start_color: Color,
    pub visited_color: Color,
    pub legal_color: Color,
    pub illegal_color: Color,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            vertex_radius: 0.055,
            pick_margin: 0.03,
            board_fill: 0.9,
            background: Color::WHITE,
            edge_color: Color::srgb(0.8, 0.8, 0.8),
            path_color: Color::srgb(0.1, 0.2, 0.9),
            closing_color: Color::srgb(0.1, 0.7, 0.2),
            outline_color: Color::BLACK,
            idle_color: Color::WHITE,
            start_color: Color::srgb(1.0, 0.89, 0.71),
            visited_color: Color::srgb(0.68, 0.85, 0.9),
            legal_color: Color::srgb(0.1, 0.7, 0.2),
            illegal_color: Color::srgb(0.9, 0.2, 0.2),
        }
    }
}

impl BoardSettings {
    /// Distance from a vertex centre within which a click selects it
    pub fn pick_radius(&self) -> f32 {
        self.vertex_radius + self.pick_margin
    }
}
