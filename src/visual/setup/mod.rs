pub mod puzzle;
pub mod scene;

pub use puzzle::setup_puzzle;
pub use scene::{SceneMetrics, setup_scene, update_scene_metrics};
