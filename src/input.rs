use bevy::input::ButtonState;
use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::input::touch::{TouchInput, TouchPhase};
use bevy::prelude::*;
use bevy::window::CursorMoved;

pub struct InputPlugin;
impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CursorPos>()
            .add_message::<PointerEvent>()
            .add_message::<KeyCommand>()
            .add_systems(Update, (collect_pointer_events, collect_key_commands));
    }
}

#[derive(Message, Debug, Clone)]
pub struct PointerEvent {
    /// Window (logical) coordinates
    pub position: Vec2,
    pub event_type: PointerEventType,
    /// 0 = mouse, >0 = touch id
    pub id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventType {
    Down,
    Move,
    Up,
}

impl PointerEvent {
    /// Convert window coords to a point on the board plane (z = 0)
    pub fn to_world_position(
        &self,
        camera: &Camera,
        camera_transform: &GlobalTransform,
    ) -> Option<Vec3> {
        camera
            .viewport_to_world(camera_transform, self.position)
            .ok()
            .map(|ray| {
                let t = -ray.origin.z / ray.direction.z;
                ray.origin + ray.direction * t
            })
    }
}

/// Keyboard input after mapping to board commands
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Digit key: select the vertex with this 0-based index
    Select(i64),
    Reset,
}

/// Map a logical key to a board command. Digits select vertices 0-9,
/// `r` resets regardless of case; everything else is ignored.
pub fn key_command(key: &Key) -> Option<KeyCommand> {
    let Key::Character(text) = key else {
        return None;
    };

    let mut chars = text.chars();
    let ch = chars.next()?;
    if chars.next().is_some() {
        return None;
    }

    if let Some(digit) = ch.to_digit(10) {
        Some(KeyCommand::Select(i64::from(digit)))
    } else if ch.eq_ignore_ascii_case(&'r') {
        Some(KeyCommand::Reset)
    } else {
        None
    }
}

#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct CursorPos(pub Option<Vec2>);

fn collect_pointer_events(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mut cursor: ResMut<CursorPos>,
    mut ev_cursor: MessageReader<CursorMoved>,
    mut touch_events: MessageReader<TouchInput>,
    mut out: MessageWriter<PointerEvent>,
) {
    for e in ev_cursor.read() {
        cursor.0 = Some(e.position);
        out.write(PointerEvent {
            position: e.position,
            event_type: PointerEventType::Move,
            id: 0,
        });
    }

    if let Some(p) = cursor.0 {
        if mouse_buttons.just_pressed(MouseButton::Left) {
            out.write(PointerEvent {
                position: p,
                event_type: PointerEventType::Down,
                id: 0,
            });
        }
        if mouse_buttons.just_released(MouseButton::Left) {
            out.write(PointerEvent {
                position: p,
                event_type: PointerEventType::Up,
                id: 0,
            });
        }
    }

    for ev in touch_events.read() {
        let event_type = match ev.phase {
            TouchPhase::Started => PointerEventType::Down,
            TouchPhase::Moved => PointerEventType::Move,
            TouchPhase::Ended | TouchPhase::Canceled => PointerEventType::Up,
        };
        out.write(PointerEvent {
            position: ev.position,
            event_type,
            id: ev.id,
        });
    }
}

fn collect_key_commands(
    mut keyboard: MessageReader<KeyboardInput>,
    mut out: MessageWriter<KeyCommand>,
) {
    for ev in keyboard.read() {
        if ev.state != ButtonState::Pressed || ev.repeat {
            continue;
        }
        if let Some(command) = key_command(&ev.logical_key) {
            out.write(command);
        }
    }
}
