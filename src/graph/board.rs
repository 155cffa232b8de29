use super::edge::{Edge, EdgeSet};
use super::error::GraphError;
use super::layout::Layout;
use super::vertex::VertexId;
use bevy::math::Vec2;

const DODECAHEDRON_VERTICES: usize = 20;
const DODECAHEDRON_EDGES: usize = 30;

/// The fixed board graph: vertex positions plus undirected adjacency.
/// Built once from a [`Layout`] and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct BoardGraph {
    name: String,
    positions: Vec<Vec2>,
    edges: EdgeSet,
    adjacency: Vec<Vec<VertexId>>,
}

impl BoardGraph {
    /// The 20-vertex, 30-edge dodecahedron board
    pub fn dodecahedron() -> Result<Self, GraphError> {
        Self::from_layout(&Layout::dodecahedron()?)
    }

    /// Build the graph from a data table, rejecting loops, dangling
    /// endpoints and repeated pairs
    pub fn from_layout(layout: &Layout) -> Result<Self, GraphError> {
        let vertex_count = layout.vertex_count();
        if vertex_count == 0 {
            return Err(GraphError::NoVertices);
        }

        let mut edges = EdgeSet::new();
        let mut adjacency = vec![Vec::new(); vertex_count];

        for (a, b) in layout.edge_pairs() {
            let edge = Edge::new(VertexId(a), VertexId(b));

            if edge.to.index() >= vertex_count {
                return Err(GraphError::EdgeOutOfRange { edge, vertex_count });
            }
            if edge.is_loop() {
                return Err(GraphError::SelfLoop(edge));
            }
            if !edges.add(edge) {
                return Err(GraphError::DuplicateEdge(edge));
            }

            adjacency[edge.from.index()].push(edge.to);
            adjacency[edge.to.index()].push(edge.from);
        }

        for neighbors in &mut adjacency {
            neighbors.sort_unstable();
        }

        Ok(BoardGraph {
            name: layout.name.clone(),
            positions: layout.positions().collect(),
            edges,
            adjacency,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Resolve a raw index (e.g. from key or click mapping) to a vertex
    pub fn vertex(&self, raw: i64) -> Result<VertexId, GraphError> {
        usize::try_from(raw)
            .ok()
            .filter(|&index| index < self.vertex_count())
            .map(VertexId)
            .ok_or(GraphError::InvalidVertex(raw))
    }

    /// Fails with `InvalidVertex` unless the id belongs to this board
    pub fn check(&self, vertex: VertexId) -> Result<VertexId, GraphError> {
        if vertex.index() < self.vertex_count() {
            Ok(vertex)
        } else {
            Err(GraphError::InvalidVertex(vertex.into()))
        }
    }

    /// Whether an edge joins `a` and `b`. A vertex is never adjacent to itself.
    pub fn are_adjacent(&self, a: VertexId, b: VertexId) -> Result<bool, GraphError> {
        self.check(a)?;
        self.check(b)?;
        Ok(a != b && self.contains_edge(&Edge::new(a, b)))
    }

    pub fn contains_edge(&self, edge: &Edge) -> bool {
        self.edges.contains(edge)
    }

    /// Neighbors in ascending order; empty for an id outside the board
    pub fn neighbors(&self, vertex: VertexId) -> &[VertexId] {
        self.adjacency
            .get(vertex.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of edges at `vertex`; 0 for an id outside the board
    pub fn degree(&self, vertex: VertexId) -> usize {
        self.neighbors(vertex).len()
    }

    /// 20 vertices and 30 edges, three at every vertex
    pub fn has_dodecahedron_shape(&self) -> bool {
        self.vertex_count() == DODECAHEDRON_VERTICES
            && self.edge_count() == DODECAHEDRON_EDGES
            && self.vertices().all(|vertex| self.degree(vertex) == 3)
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + use<> {
        (0..self.vertex_count()).map(VertexId)
    }

    /// Edges in layout order
    pub fn edges(&self) -> &[Edge] {
        self.edges.as_slice()
    }

    pub fn position(&self, vertex: VertexId) -> Option<Vec2> {
        self.positions.get(vertex.index()).copied()
    }

    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }
}
