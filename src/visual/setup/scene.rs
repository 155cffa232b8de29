use bevy::prelude::*;

use crate::{
    camera::{GameCamera, sub_region},
    game::session::PuzzleSession,
    settings::BoardSettings,
    visual::nodes::{GraphNode, style_color, vertex_style},
};

/// Fraction of the view height kept free at the bottom for the HUD
const HUD_HEIGHT_FRACTION: f32 = 0.12;

/// Inset of the board region from the view edges
const BOARD_PADDING: f32 = 0.02;

/// Mapping between board units (layout coordinates) and world space
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct SceneMetrics {
    /// World position of the board origin
    pub center: Vec2,
    /// World units per board unit
    pub scale: f32,
}

impl SceneMetrics {
    pub fn from_view(view: Rect, board_fill: f32) -> Self {
        let region = sub_region(view, (0.0, 1.0), (HUD_HEIGHT_FRACTION, 1.0), BOARD_PADDING);

        Self {
            center: region.center(),
            scale: region.width().min(region.height()) * 0.5 * board_fill,
        }
    }

    pub fn to_world(&self, board: Vec2) -> Vec3 {
        (self.center + board * self.scale).extend(0.0)
    }

    pub fn to_board(&self, world: Vec3) -> Vec2 {
        (world.truncate() - self.center) / self.scale
    }

    pub fn world_length(&self, board_length: f32) -> f32 {
        board_length * self.scale
    }
}

/// Spawn one disc per vertex. Positions and colours are kept current by
/// `update_node_visuals`.
pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    game_camera: Res<GameCamera>,
    settings: Res<BoardSettings>,
    session: Res<PuzzleSession>,
) {
    let metrics = SceneMetrics::from_view(game_camera.view, settings.board_fill);
    commands.insert_resource(metrics);

    info!(
        "Scene setup: center={}, scale={}",
        metrics.center, metrics.scale
    );

    let disc = meshes.add(Circle::new(1.0));
    let radius = metrics.world_length(settings.vertex_radius);
    let graph = session.graph();

    for vertex in graph.vertices() {
        let Some(position) = graph.position(vertex) else {
            continue;
        };

        let material = materials.add(StandardMaterial {
            base_color: style_color(vertex_style(&session, vertex), &settings),
            unlit: true,
            ..default()
        });

        commands.spawn((
            Mesh3d(disc.clone()),
            MeshMaterial3d(material),
            Transform::from_translation(metrics.to_world(position)).with_scale(Vec3::splat(radius)),
            GraphNode { vertex },
            Name::new(format!("Vertex {vertex}")),
        ));
    }
}

/// Recompute the board mapping when the window aspect changes
pub fn update_scene_metrics(
    game_camera: Res<GameCamera>,
    settings: Res<BoardSettings>,
    mut metrics: ResMut<SceneMetrics>,
) {
    if !game_camera.is_changed() {
        return;
    }

    let updated = SceneMetrics::from_view(game_camera.view, settings.board_fill);
    if *metrics != updated {
        *metrics = updated;
    }
}
