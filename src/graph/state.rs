use super::board::BoardGraph;
use super::edge::Edge;
use super::error::GraphError;
use super::vertex::VertexId;
use std::fmt;

/// Where the current attempt stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Empty,
    Building,
    /// Every vertex visited; no further moves are accepted
    Complete,
}

/// Why a move was refused. These are normal play, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    AlreadyVisited,
    NoEdge,
    Complete,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::AlreadyVisited => write!(f, "vertex already visited"),
            Rejection::NoEdge => write!(f, "no edge from the last vertex"),
            Rejection::Complete => write!(f, "every vertex is already visited"),
        }
    }
}

/// Result of evaluating the closing edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// Not every vertex visited yet
    Incomplete,
    /// All vertices visited and the last one is adjacent to the start
    CycleClosed,
    /// All vertices visited but no edge leads back to the start
    CycleNotClosed,
}

/// Result of attempting to extend the path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    Accepted(CompletionOutcome),
    Rejected(Rejection),
}

/// Hamiltonian path attempt on a fixed board
#[derive(Debug, Clone)]
pub struct GameState {
    graph: BoardGraph,

    /// Visited vertices in selection order; path[0] is the start
    path: Vec<VertexId>,

    /// visited[v] mirrors `path.contains(v)`
    visited: Vec<bool>,
}

impl GameState {
    pub fn new(graph: BoardGraph) -> Self {
        let visited = vec![false; graph.vertex_count()];
        GameState {
            graph,
            path: Vec::new(),
            visited,
        }
    }

    pub fn graph(&self) -> &BoardGraph {
        &self.graph
    }

    pub fn path(&self) -> &[VertexId] {
        &self.path
    }

    pub fn phase(&self) -> Phase {
        match self.path.len() {
            0 => Phase::Empty,
            n if n >= self.graph.vertex_count() => Phase::Complete,
            _ => Phase::Building,
        }
    }

    pub fn start(&self) -> Option<VertexId> {
        self.path.first().copied()
    }

    pub fn last(&self) -> Option<VertexId> {
        self.path.last().copied()
    }

    pub fn is_start(&self, vertex: VertexId) -> bool {
        self.start() == Some(vertex)
    }

    pub fn is_visited(&self, vertex: VertexId) -> bool {
        self.visited.get(vertex.index()).copied().unwrap_or(false)
    }

    /// Consecutive path segments, in walk order
    pub fn path_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.path.windows(2).map(|pair| Edge::new(pair[0], pair[1]))
    }

    /// Decide whether `vertex` may be appended, without touching the path
    pub fn check_move(&self, vertex: VertexId) -> Result<Option<Rejection>, GraphError> {
        self.graph.check(vertex)?;

        if self.phase() == Phase::Complete {
            return Ok(Some(Rejection::Complete));
        }

        let Some(last) = self.last() else {
            return Ok(None);
        };

        // Includes the start vertex: closure is judged only at full length
        if self.is_visited(vertex) {
            return Ok(Some(Rejection::AlreadyVisited));
        }

        if !self.graph.are_adjacent(last, vertex)? {
            return Ok(Some(Rejection::NoEdge));
        }

        Ok(None)
    }

    /// Try to extend the path by one vertex
    pub fn attempt_move(&mut self, vertex: VertexId) -> Result<MoveResult, GraphError> {
        if let Some(rejection) = self.check_move(vertex)? {
            return Ok(MoveResult::Rejected(rejection));
        }

        self.path.push(vertex);
        self.visited[vertex.index()] = true;

        Ok(MoveResult::Accepted(self.check_completion()))
    }

    /// Evaluate the closing edge once every vertex is on the path
    pub fn check_completion(&self) -> CompletionOutcome {
        match self.closing_pair() {
            None => CompletionOutcome::Incomplete,
            Some(edge) if self.graph.contains_edge(&edge) => CompletionOutcome::CycleClosed,
            Some(_) => CompletionOutcome::CycleNotClosed,
        }
    }

    /// The last-to-start edge, present only when the cycle is closed
    pub fn closing_edge(&self) -> Option<Edge> {
        self.closing_pair()
            .filter(|edge| self.graph.contains_edge(edge))
    }

    fn closing_pair(&self) -> Option<Edge> {
        if self.phase() != Phase::Complete {
            return None;
        }
        Some(Edge::new(self.last()?, self.start()?))
    }

    /// Every vertex that `attempt_move` would accept right now
    pub fn legal_moves(&self) -> Vec<VertexId> {
        self.graph
            .vertices()
            .filter(|&vertex| matches!(self.check_move(vertex), Ok(None)))
            .collect()
    }

    /// Clear the path back to the empty state
    pub fn reset(&mut self) {
        self.path.clear();
        self.visited.fill(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HAMILTONIAN_CYCLE: [usize; 20] =
        [0, 1, 2, 3, 4, 13, 12, 11, 10, 9, 8, 7, 6, 15, 16, 17, 18, 19, 14, 5];

    /// Visits every vertex but ends on 18, which is not adjacent to 0
    const OPEN_HAMILTONIAN_PATH: [usize; 20] =
        [0, 1, 2, 3, 4, 13, 12, 11, 10, 9, 8, 7, 6, 5, 14, 19, 15, 16, 17, 18];

    fn new_state() -> GameState {
        GameState::new(BoardGraph::dodecahedron().unwrap())
    }

    fn play(state: &mut GameState, order: &[usize]) -> Vec<MoveResult> {
        order
            .iter()
            .map(|&v| state.attempt_move(VertexId(v)).unwrap())
            .collect()
    }

    #[test]
    fn test_first_two_moves() {
        let mut state = new_state();
        assert_eq!(state.phase(), Phase::Empty);

        assert_eq!(
            state.attempt_move(VertexId(0)).unwrap(),
            MoveResult::Accepted(CompletionOutcome::Incomplete)
        );
        assert_eq!(state.phase(), Phase::Building);

        assert_eq!(
            state.attempt_move(VertexId(5)).unwrap(),
            MoveResult::Accepted(CompletionOutcome::Incomplete)
        );
        assert_eq!(state.path(), &[VertexId(0), VertexId(5)]);
        assert!(state.is_start(VertexId(0)));
        assert!(!state.is_start(VertexId(5)));
    }

    #[test]
    fn test_any_vertex_can_start() {
        for v in 0..20 {
            let mut state = new_state();
            assert!(matches!(
                state.attempt_move(VertexId(v)).unwrap(),
                MoveResult::Accepted(_)
            ));
            assert_eq!(state.path(), &[VertexId(v)]);
        }
    }

    #[test]
    fn test_already_visited_is_rejected() {
        let mut state = new_state();
        play(&mut state, &[0, 1, 2]);

        for v in [0, 1, 2] {
            assert_eq!(
                state.attempt_move(VertexId(v)).unwrap(),
                MoveResult::Rejected(Rejection::AlreadyVisited)
            );
        }
        assert_eq!(state.path(), &[VertexId(0), VertexId(1), VertexId(2)]);
    }

    #[test]
    fn test_returning_to_start_early_is_rejected() {
        let mut state = new_state();
        // 0-1-7-6-5 and 5 is adjacent to 0
        play(&mut state, &[0, 1, 7, 6, 5]);

        assert_eq!(
            state.attempt_move(VertexId(0)).unwrap(),
            MoveResult::Rejected(Rejection::AlreadyVisited)
        );
        assert_eq!(state.path().len(), 5);
        assert_eq!(state.check_completion(), CompletionOutcome::Incomplete);
    }

    #[test]
    fn test_non_adjacent_is_rejected() {
        let mut state = new_state();
        play(&mut state, &[0]);

        assert_eq!(
            state.attempt_move(VertexId(2)).unwrap(),
            MoveResult::Rejected(Rejection::NoEdge)
        );
        assert_eq!(
            state.attempt_move(VertexId(19)).unwrap(),
            MoveResult::Rejected(Rejection::NoEdge)
        );
        assert_eq!(state.path(), &[VertexId(0)]);
    }

    #[test]
    fn test_invalid_vertex_is_an_error() {
        let mut state = new_state();
        assert!(matches!(
            state.attempt_move(VertexId(20)),
            Err(GraphError::InvalidVertex(20))
        ));

        play(&mut state, &[0]);
        assert!(matches!(
            state.attempt_move(VertexId(100)),
            Err(GraphError::InvalidVertex(100))
        ));
        assert_eq!(state.path(), &[VertexId(0)]);
    }

    #[test]
    fn test_hamiltonian_cycle_closes() {
        let mut state = new_state();
        let results = play(&mut state, &HAMILTONIAN_CYCLE);

        for result in &results[..19] {
            assert_eq!(*result, MoveResult::Accepted(CompletionOutcome::Incomplete));
        }
        assert_eq!(
            results[19],
            MoveResult::Accepted(CompletionOutcome::CycleClosed)
        );
        assert_eq!(state.phase(), Phase::Complete);
        assert_eq!(state.check_completion(), CompletionOutcome::CycleClosed);
        assert_eq!(state.closing_edge(), Some(Edge::new(VertexId(5), VertexId(0))));
    }

    #[test]
    fn test_open_path_is_a_near_miss() {
        let mut state = new_state();
        let results = play(&mut state, &OPEN_HAMILTONIAN_PATH);

        assert_eq!(
            results[19],
            MoveResult::Accepted(CompletionOutcome::CycleNotClosed)
        );
        assert_eq!(state.phase(), Phase::Complete);
        assert_eq!(state.check_completion(), CompletionOutcome::CycleNotClosed);
        assert_eq!(state.closing_edge(), None);
    }

    #[test]
    fn test_complete_is_terminal() {
        let mut state = new_state();
        play(&mut state, &HAMILTONIAN_CYCLE);
        let before = state.path().to_vec();

        for v in [0, 5, 19] {
            assert_eq!(
                state.attempt_move(VertexId(v)).unwrap(),
                MoveResult::Rejected(Rejection::Complete)
            );
        }
        assert_eq!(state.path(), before.as_slice());
        assert!(state.legal_moves().is_empty());
    }

    #[test]
    fn test_reset_from_any_phase() {
        let mut state = new_state();
        state.reset();
        assert_eq!(state.phase(), Phase::Empty);

        play(&mut state, &[3, 4, 13]);
        state.reset();
        assert_eq!(state.phase(), Phase::Empty);
        assert!(state.path().is_empty());
        assert!(!state.is_visited(VertexId(3)));

        play(&mut state, &OPEN_HAMILTONIAN_PATH);
        state.reset();
        assert_eq!(state.phase(), Phase::Empty);
        assert_eq!(state.check_completion(), CompletionOutcome::Incomplete);
        assert_eq!(state.start(), None);

        // Playable again after reset
        assert!(matches!(
            state.attempt_move(VertexId(18)).unwrap(),
            MoveResult::Accepted(_)
        ));
    }

    #[test]
    fn test_check_move_does_not_mutate() {
        let mut state = new_state();
        assert_eq!(state.check_move(VertexId(7)).unwrap(), None);
        assert!(state.path().is_empty());

        play(&mut state, &[0, 1]);
        assert_eq!(state.check_move(VertexId(7)).unwrap(), None);
        assert_eq!(
            state.check_move(VertexId(0)).unwrap(),
            Some(Rejection::AlreadyVisited)
        );
        assert_eq!(state.check_move(VertexId(9)).unwrap(), Some(Rejection::NoEdge));
        assert!(state.check_move(VertexId(20)).is_err());
        assert_eq!(state.path().len(), 2);
    }

    #[test]
    fn test_legal_moves() {
        let mut state = new_state();
        assert_eq!(state.legal_moves().len(), 20);

        play(&mut state, &[0]);
        assert_eq!(
            state.legal_moves(),
            vec![VertexId(1), VertexId(4), VertexId(5)]
        );

        play(&mut state, &[1]);
        assert_eq!(state.legal_moves(), vec![VertexId(2), VertexId(7)]);
    }

    #[test]
    fn test_path_edges() {
        let mut state = new_state();
        play(&mut state, &[0, 4, 13]);

        let edges: Vec<_> = state.path_edges().collect();
        assert_eq!(
            edges,
            vec![
                Edge::new(VertexId(0), VertexId(4)),
                Edge::new(VertexId(4), VertexId(13)),
            ]
        );
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(Rejection::NoEdge.to_string(), "no edge from the last vertex");
        assert_eq!(
            Rejection::AlreadyVisited.to_string(),
            "vertex already visited"
        );
    }
}
