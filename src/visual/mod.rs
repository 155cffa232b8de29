pub mod edges;
pub mod interactions;
pub mod nodes;
pub mod plugin;
pub mod setup;
pub mod ui;
