//! Hamilton's dodecahedron puzzle: trace a cycle through all 20 vertices of
//! a dodecahedron projection, one adjacent vertex at a time.
//!
//! [`graph`] holds the board and the path state machine and does no I/O;
//! everything else is the Bevy front end around it.

pub mod camera;
pub mod game;
pub mod graph;
pub mod input;
pub mod settings;
pub mod visual;
