// game/session.rs

use crate::graph::*;
use bevy::prelude::Resource;

/// A game session: the one board and the one path attempt being played
#[derive(Debug, Clone, Resource)]
pub struct PuzzleSession {
    /// The core game state
    state: GameState,
    /// What the last input did, for the status line
    feedback: Feedback,
}

/// Last user-facing outcome of an input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// Nothing selected yet
    Idle,
    Accepted(VertexId),
    Rejected(VertexId, Rejection),
    CycleClosed,
    CycleNotClosed,
    Reset,
    /// Input mapping produced an index outside the board
    InvalidVertex(i64),
}

impl PuzzleSession {
    /// Create a new session on a board
    pub fn new(graph: BoardGraph) -> Self {
        PuzzleSession {
            state: GameState::new(graph),
            feedback: Feedback::Idle,
        }
    }

    // === Query Methods (for Bevy systems to read state) ===

    pub fn graph(&self) -> &BoardGraph {
        self.state.graph()
    }

    /// Current path, start vertex first
    pub fn current_path(&self) -> &[VertexId] {
        self.state.path()
    }

    pub fn path_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.state.path_edges()
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn is_start(&self, vertex: VertexId) -> bool {
        self.state.is_start(vertex)
    }

    pub fn is_visited(&self, vertex: VertexId) -> bool {
        self.state.is_visited(vertex)
    }

    pub fn completion(&self) -> CompletionOutcome {
        self.state.check_completion()
    }

    pub fn closing_edge(&self) -> Option<Edge> {
        self.state.closing_edge()
    }

    /// Would selecting `vertex` be accepted? `None` means yes.
    pub fn check_move(&self, vertex: VertexId) -> Result<Option<Rejection>, GraphError> {
        self.state.check_move(vertex)
    }

    pub fn legal_moves(&self) -> Vec<VertexId> {
        self.state.legal_moves()
    }

    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    pub fn progress(&self) -> ProgressInfo {
        ProgressInfo {
            visited: self.state.path().len(),
            total: self.graph().vertex_count(),
        }
    }

    // === Mutation Methods (for handling user input) ===

    /// Select a vertex by raw index, as delivered by the input mapping
    pub fn select(&mut self, raw: i64) -> Result<MoveResult, GraphError> {
        let result = self
            .graph()
            .vertex(raw)
            .and_then(|vertex| self.state.attempt_move(vertex).map(|r| (vertex, r)));

        match result {
            Ok((vertex, result)) => {
                self.feedback = match result {
                    MoveResult::Accepted(CompletionOutcome::CycleClosed) => Feedback::CycleClosed,
                    MoveResult::Accepted(CompletionOutcome::CycleNotClosed) => {
                        Feedback::CycleNotClosed
                    }
                    MoveResult::Accepted(CompletionOutcome::Incomplete) => {
                        Feedback::Accepted(vertex)
                    }
                    MoveResult::Rejected(rejection) => Feedback::Rejected(vertex, rejection),
                };
                Ok(result)
            }
            Err(err) => {
                if let GraphError::InvalidVertex(index) = &err {
                    self.feedback = Feedback::InvalidVertex(*index);
                }
                Err(err)
            }
        }
    }

    /// Start the attempt over
    pub fn reset(&mut self) {
        self.state.reset();
        self.feedback = Feedback::Reset;
    }
}

/// Progress information for UI display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressInfo {
    pub visited: usize,
    pub total: usize,
}

impl ProgressInfo {
    /// Format as a string like "visited 7/20"
    pub fn display_string(&self) -> String {
        format!("visited {}/{}", self.visited, self.total)
    }

    pub fn is_complete(&self) -> bool {
        self.visited >= self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HAMILTONIAN_CYCLE: [i64; 20] =
        [0, 1, 2, 3, 4, 13, 12, 11, 10, 9, 8, 7, 6, 15, 16, 17, 18, 19, 14, 5];

    fn new_session() -> PuzzleSession {
        PuzzleSession::new(BoardGraph::dodecahedron().unwrap())
    }

    #[test]
    fn test_session_records_feedback() {
        let mut session = new_session();
        assert_eq!(session.feedback(), Feedback::Idle);

        session.select(0).unwrap();
        assert_eq!(session.feedback(), Feedback::Accepted(VertexId(0)));

        let result = session.select(2).unwrap();
        assert_eq!(result, MoveResult::Rejected(Rejection::NoEdge));
        assert_eq!(
            session.feedback(),
            Feedback::Rejected(VertexId(2), Rejection::NoEdge)
        );

        session.select(1).unwrap();
        session.select(0).unwrap();
        assert_eq!(
            session.feedback(),
            Feedback::Rejected(VertexId(0), Rejection::AlreadyVisited)
        );
        assert_eq!(session.current_path(), &[VertexId(0), VertexId(1)]);
    }

    #[test]
    fn test_invalid_raw_indices() {
        let mut session = new_session();

        for raw in [-1, 20, 1000] {
            assert!(matches!(
                session.select(raw),
                Err(GraphError::InvalidVertex(i)) if i == raw
            ));
            assert_eq!(session.feedback(), Feedback::InvalidVertex(raw));
        }
        assert!(session.current_path().is_empty());
        assert_eq!(session.phase(), Phase::Empty);
    }

    #[test]
    fn test_cycle_closed_feedback() {
        let mut session = new_session();
        for &v in &HAMILTONIAN_CYCLE {
            session.select(v).unwrap();
        }

        assert_eq!(session.feedback(), Feedback::CycleClosed);
        assert_eq!(session.completion(), CompletionOutcome::CycleClosed);
        assert!(session.progress().is_complete());

        assert_eq!(
            session.select(3).unwrap(),
            MoveResult::Rejected(Rejection::Complete)
        );
        assert_eq!(
            session.feedback(),
            Feedback::Rejected(VertexId(3), Rejection::Complete)
        );
        // Outcome survives the ignored move
        assert_eq!(session.completion(), CompletionOutcome::CycleClosed);
    }

    #[test]
    fn test_near_miss_feedback() {
        let mut session = new_session();
        for v in [0, 1, 2, 3, 4, 13, 12, 11, 10, 9, 8, 7, 6, 5, 14, 19, 15, 16, 17, 18] {
            session.select(v).unwrap();
        }

        assert_eq!(session.feedback(), Feedback::CycleNotClosed);
        assert_eq!(session.closing_edge(), None);
    }

    #[test]
    fn test_reset() {
        let mut session = new_session();
        session.select(4).unwrap();
        session.select(13).unwrap();

        session.reset();

        assert!(session.current_path().is_empty());
        assert_eq!(session.phase(), Phase::Empty);
        assert_eq!(session.feedback(), Feedback::Reset);
        assert_eq!(session.legal_moves().len(), 20);
    }

    #[test]
    fn test_progress_info() {
        let mut session = new_session();

        let progress = session.progress();
        assert_eq!(progress.display_string(), "visited 0/20");
        assert!(!progress.is_complete());

        session.select(0).unwrap();
        session.select(4).unwrap();

        assert_eq!(session.progress().display_string(), "visited 2/20");
    }

    #[test]
    fn test_render_queries() {
        let mut session = new_session();
        session.select(15).unwrap();
        session.select(16).unwrap();

        assert!(session.is_start(VertexId(15)));
        assert!(session.is_visited(VertexId(16)));
        assert!(!session.is_visited(VertexId(17)));
        assert_eq!(session.check_move(VertexId(17)).unwrap(), None);
        assert_eq!(session.path_edges().count(), 1);
        assert_eq!(session.graph().edges().len(), 30);
    }
}
