use bevy::camera::ScalingMode;
use bevy::math::Rect;
use bevy::prelude::*;
use bevy::window::WindowResized;

/// Aspect changes smaller than this keep the current view
const ASPECT_TOLERANCE: f32 = 0.01;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameCamera>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, fit_camera_to_window);
    }
}

/// What the orthographic camera shows of the board plane
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameCamera {
    /// Visible height in world units; the width follows the window aspect
    pub view_height: f32,
    pub aspect_ratio: f32,
    /// Visible world rectangle, centred on the origin
    pub view: Rect,
}

impl Default for GameCamera {
    fn default() -> Self {
        // Matches the square startup window
        GameCamera::new(8.0, 1.0)
    }
}

impl GameCamera {
    pub fn new(view_height: f32, aspect_ratio: f32) -> Self {
        Self {
            view_height,
            aspect_ratio,
            view: view_rect(view_height, aspect_ratio),
        }
    }

    /// The camera for a window of `width` × `height`, or `None` when the
    /// current view already fits (or the window is minimised)
    pub fn fitted_to(&self, width: f32, height: f32) -> Option<GameCamera> {
        if width <= 0.0 || height <= 0.0 {
            return None;
        }

        let aspect_ratio = width / height;
        if (aspect_ratio - self.aspect_ratio).abs() <= ASPECT_TOLERANCE {
            return None;
        }

        Some(GameCamera::new(self.view_height, aspect_ratio))
    }
}

/// World rectangle seen by a camera of the given height and aspect
pub fn view_rect(view_height: f32, aspect_ratio: f32) -> Rect {
    Rect::from_center_size(Vec2::ZERO, Vec2::new(view_height * aspect_ratio, view_height))
}

/// Part of `view` after insetting each side by `padding` (a fraction of the
/// view size), then taking the given fractional spans of what is left.
/// Spans run from left/bottom (0.0) to right/top (1.0).
pub fn sub_region(view: Rect, horizontal: (f32, f32), vertical: (f32, f32), padding: f32) -> Rect {
    let inset = view.size() * padding;
    let origin = view.min + inset;
    let size = view.size() - 2.0 * inset;

    Rect::from_corners(
        origin + size * Vec2::new(horizontal.0, vertical.0),
        origin + size * Vec2::new(horizontal.1, vertical.1),
    )
}

#[derive(Component)]
pub struct MainCamera;

/// Orthographic camera on +Z looking at the board, which lies in the XY
/// plane at z = 0 with +Y up on screen
fn setup_camera(mut commands: Commands, game_camera: Res<GameCamera>) {
    let projection = Projection::Orthographic(OrthographicProjection {
        scaling_mode: ScalingMode::FixedVertical {
            viewport_height: game_camera.view_height,
        },
        near: 0.0,
        far: 1000.0,
        ..OrthographicProjection::default_3d()
    });
    commands.spawn((
        Camera3d::default(),
        projection,
        Transform::from_xyz(0.0, 0.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));
}

/// System: Follow window resizes; only the latest size of a frame matters
fn fit_camera_to_window(
    mut resized: MessageReader<WindowResized>,
    mut game_camera: ResMut<GameCamera>,
) {
    let Some(size) = resized.read().last() else {
        return;
    };

    if let Some(fitted) = game_camera.fitted_to(size.width, size.height) {
        debug!("Camera view refitted: {:?}", fitted.view);
        *game_camera = fitted;
    }
}
