mod board;
mod edge;
mod error;
mod layout;
mod state;
mod vertex;

pub use board::BoardGraph;
pub use edge::{Edge, EdgeSet};
pub use error::GraphError;
pub use layout::Layout;
pub use state::{CompletionOutcome, GameState, MoveResult, Phase, Rejection};
pub use vertex::VertexId;
