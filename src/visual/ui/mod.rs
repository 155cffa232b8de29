pub mod hud;
pub mod labels;

pub use hud::{handle_reset_button, spawn_hud, update_hud};
pub use labels::{spawn_vertex_labels, update_vertex_labels};
