//! Status line and reset button along the bottom of the window.
//!
//! The status line shows the path so far, or the outcome of the last input
//! when there is something to report (a refused move, a closed cycle).

use bevy::prelude::*;

use crate::{
    game::session::{Feedback, PuzzleSession},
    graph::Rejection,
    visual::interactions::reset_board,
};

const STATUS_FONT_SIZE: f32 = 18.0;

const TEXT_COLOR: Color = Color::BLACK;
const SUCCESS_COLOR: Color = Color::srgb(0.1, 0.6, 0.15);
const NEAR_MISS_COLOR: Color = Color::srgb(0.95, 0.55, 0.0);
const REJECTED_COLOR: Color = Color::srgb(0.8, 0.15, 0.15);

const BUTTON_COLOR: Color = Color::srgb(0.9, 0.9, 0.9);
const BUTTON_HOVER_COLOR: Color = Color::srgb(0.8, 0.8, 0.8);
const BUTTON_PRESSED_COLOR: Color = Color::srgb(0.65, 0.65, 0.65);

#[derive(Component)]
pub struct StatusText;

#[derive(Component)]
pub struct ResetButton;

/// Path so far, e.g. `Path: 0 -> 1 -> 2 | visited 3/20 (R: reset, click vertices)`
pub fn path_line(session: &PuzzleSession) -> String {
    let path = session.current_path();
    let path_text = if path.is_empty() {
        "(empty)".to_string()
    } else {
        path.iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" -> ")
    };

    format!(
        "Path: {} | {} (R: reset, click vertices)",
        path_text,
        session.progress().display_string()
    )
}

pub fn status_line(session: &PuzzleSession) -> String {
    match session.feedback() {
        Feedback::CycleClosed => format!(
            "Hamiltonian cycle on the {} complete! Congratulations!",
            session.graph().name()
        ),
        Feedback::CycleNotClosed => {
            "Every vertex visited, but the cycle does not close back to the start.".to_string()
        }
        Feedback::Rejected(vertex, Rejection::NoEdge) => match session.current_path().last() {
            Some(last) => format!("No edge between {last} and {vertex}. Try another vertex."),
            None => format!("No edge to {vertex}. Try another vertex."),
        },
        Feedback::Rejected(vertex, Rejection::AlreadyVisited) => {
            format!("Vertex {vertex} is already on the path.")
        }
        Feedback::Rejected(_, Rejection::Complete) => {
            "The path already covers every vertex. Press R to start over.".to_string()
        }
        Feedback::InvalidVertex(index) => format!("There is no vertex {index} on this board."),
        Feedback::Idle | Feedback::Accepted(_) | Feedback::Reset => path_line(session),
    }
}

pub fn status_color(feedback: Feedback) -> Color {
    match feedback {
        Feedback::CycleClosed => SUCCESS_COLOR,
        Feedback::CycleNotClosed => NEAR_MISS_COLOR,
        Feedback::Rejected(..) | Feedback::InvalidVertex(_) => REJECTED_COLOR,
        Feedback::Idle | Feedback::Accepted(_) | Feedback::Reset => TEXT_COLOR,
    }
}

/// Spawn the HUD bar: status text on the left, reset button on the right
pub fn spawn_hud(mut commands: Commands, session: Res<PuzzleSession>) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(0.0),
                width: Val::Percent(100.0),
                padding: UiRect::all(Val::Px(12.0)),
                column_gap: Val::Px(16.0),
                align_items: AlignItems::Center,
                justify_content: JustifyContent::SpaceBetween,
                ..default()
            },
            Name::new("HUD"),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(status_line(&session)),
                TextFont {
                    font_size: STATUS_FONT_SIZE,
                    ..default()
                },
                TextColor(status_color(session.feedback())),
                Node {
                    flex_grow: 1.0,
                    ..default()
                },
                StatusText,
            ));

            parent
                .spawn((
                    Button,
                    Node {
                        padding: UiRect::axes(Val::Px(16.0), Val::Px(8.0)),
                        ..default()
                    },
                    BackgroundColor(BUTTON_COLOR),
                    ResetButton,
                ))
                .with_children(|button| {
                    button.spawn((
                        Text::new("Reset"),
                        TextFont {
                            font_size: STATUS_FONT_SIZE,
                            ..default()
                        },
                        TextColor(TEXT_COLOR),
                    ));
                });
        });

    info!("HUD spawned");
}

/// System: Refresh the status line after any session change
pub fn update_hud(
    session: Res<PuzzleSession>,
    mut status: Query<(&mut Text, &mut TextColor), With<StatusText>>,
) {
    if !session.is_changed() {
        return;
    }

    for (mut text, mut color) in &mut status {
        text.0 = status_line(&session);
        color.0 = status_color(session.feedback());
    }
}

/// System: Reset button clicks and hover shading
pub fn handle_reset_button(
    mut buttons: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<ResetButton>),
    >,
    mut session: ResMut<PuzzleSession>,
) {
    for (interaction, mut background) in &mut buttons {
        match *interaction {
            Interaction::Pressed => {
                background.0 = BUTTON_PRESSED_COLOR;
                reset_board(&mut session);
            }
            Interaction::Hovered => background.0 = BUTTON_HOVER_COLOR,
            Interaction::None => background.0 = BUTTON_COLOR,
        }
    }
}
