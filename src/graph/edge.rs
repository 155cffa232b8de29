use super::vertex::VertexId;

use std::collections::HashSet;
use std::fmt;

/// An undirected edge between two vertices
/// Invariant: always stored in canonical form with from <= to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
}

impl Edge {
    /// Create a new edge, automatically ordering vertices
    pub fn new(a: VertexId, b: VertexId) -> Self {
        if a <= b {
            Edge { from: a, to: b }
        } else {
            Edge { from: b, to: a }
        }
    }

    pub fn is_loop(&self) -> bool {
        self.from == self.to
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

/// A set of edges with O(1) lookup that also remembers insertion order,
/// so the board draws its edges in the order the layout table lists them
#[derive(Debug, Clone, Default)]
pub struct EdgeSet {
    edges: HashSet<Edge>,
    insertion_order: Vec<Edge>,
}

impl EdgeSet {
    pub fn new() -> Self {
        EdgeSet::default()
    }

    /// Add an edge to the set
    /// Returns true if the edge was newly inserted, false if it already existed
    pub fn add(&mut self, edge: Edge) -> bool {
        if self.edges.insert(edge) {
            self.insertion_order.push(edge);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, edge: &Edge) -> bool {
        self.edges.contains(edge)
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Edges in the order they were added
    pub fn as_slice(&self) -> &[Edge] {
        &self.insertion_order
    }
}
