use super::edge::Edge;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("vertex index {0} is outside the board")]
    InvalidVertex(i64),

    #[error("board layout has no vertices")]
    NoVertices,

    #[error("edge {0} joins a vertex to itself")]
    SelfLoop(Edge),

    #[error("edge {edge} references a vertex outside 0..{vertex_count}")]
    EdgeOutOfRange { edge: Edge, vertex_count: usize },

    #[error("edge {0} is listed twice")]
    DuplicateEdge(Edge),

    #[error("malformed board layout: {0}")]
    Layout(#[from] serde_json::Error),
}
