use std::fmt;

/// Vertex identifier, 0-based, in `[0, vertex_count)` of the board it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl VertexId {
    pub const fn index(&self) -> usize {
        self.0
    }
}

impl From<VertexId> for i64 {
    fn from(vertex: VertexId) -> Self {
        vertex.0 as i64
    }
}
