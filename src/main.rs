use bevy::prelude::*;
use bevy::window::WindowResolution;

use hamilton_dodecahedron::camera::CameraPlugin;
use hamilton_dodecahedron::input::InputPlugin;
use hamilton_dodecahedron::visual::plugin::BoardPlugin;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Hamilton's Dodecahedron".into(),
            resolution: WindowResolution::new(900, 900),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(CameraPlugin)
    .add_plugins(InputPlugin)
    .add_plugins(BoardPlugin);

    app.run();
}
