use bevy::prelude::*;
use crate::components::{ControlsHint, Crosshair, DebugOverlay, ExitButton, PauseMenu, ResumeButton, SprintBar, SprintBarFill};

const CONTROLS_TEXT: &str = "WASD move | Shift sprint | F4 auto-sprint\n\
Space jump | Ctrl crouch / dropshot | C slide\n\
F3 debug | F1 hide UI | Esc pause";

pub fn setup_pause_menu(mut commands: Commands) {
    // Create pause menu container (initially hidden)
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.8)),
            Visibility::Hidden,
            PauseMenu,
        ))
        .with_children(|parent| {
            parent
                .spawn(Node {
                    width: Val::Px(400.0),
                    height: Val::Px(300.0),
                    flex_direction: FlexDirection::Column,
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    row_gap: Val::Px(20.0),
                    ..default()
                })
                .with_children(|parent| {
                    parent.spawn((
                        Text::new("PAUSED"),
                        TextFont {
                            font_size: 60.0,
                            ..default()
                        },
                        TextColor(Color::srgb(1.0, 1.0, 1.0)),
                    ));

                    spawn_menu_button(parent, "Resume", ResumeButton);
                    spawn_menu_button(parent, "Exit", ExitButton);
                });
        });
}

fn spawn_menu_button(parent: &mut ChildBuilder, label: &str, marker: impl Component) {
    parent
        .spawn((
            Button,
            Node {
                width: Val::Px(250.0),
                height: Val::Px(65.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgb(0.15, 0.15, 0.15)),
            marker,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(label),
                TextFont {
                    font_size: 32.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.9)),
            ));
        });
}

/// Crosshair, debug text and controls hint
pub fn setup_hud(mut commands: Commands) {
    // Crosshair horizontal line
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            width: Val::Px(20.0),
            height: Val::Px(2.0),
            left: Val::Percent(50.0),
            top: Val::Percent(50.0),
            margin: UiRect {
                left: Val::Px(-10.0),
                top: Val::Px(-1.0),
                ..default()
            },
            ..default()
        },
        BackgroundColor(Color::srgba(1.0, 1.0, 1.0, 0.8)),
        Crosshair,
    ));

    // Crosshair vertical line
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            width: Val::Px(2.0),
            height: Val::Px(20.0),
            left: Val::Percent(50.0),
            top: Val::Percent(50.0),
            margin: UiRect {
                left: Val::Px(-1.0),
                top: Val::Px(-10.0),
                ..default()
            },
            ..default()
        },
        BackgroundColor(Color::srgba(1.0, 1.0, 1.0, 0.8)),
        Crosshair,
    ));

    // Debug overlay (visible by default)
    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgb(1.0, 1.0, 1.0)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        DebugOverlay { visible: true },
    ));

    commands.spawn((
        Text::new(CONTROLS_TEXT),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgba(1.0, 1.0, 1.0, 0.7)),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        ControlsHint,
    ));
}

/// Sprint energy bar centered above the bottom edge
pub fn setup_sprint_bar(mut commands: Commands) {
    const BAR_WIDTH: f32 = 240.0;
    const BAR_HEIGHT: f32 = 8.0;
    const BAR_BOTTOM: f32 = 40.0;

    // Full-width row so the bar can be centered
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Auto,
                position_type: PositionType::Absolute,
                bottom: Val::Px(BAR_BOTTOM),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            SprintBar,
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    Node {
                        width: Val::Px(BAR_WIDTH),
                        height: Val::Px(BAR_HEIGHT),
                        border: UiRect::all(Val::Px(1.0)),
                        ..default()
                    },
                    BorderColor(Color::srgb(0.3, 0.3, 0.3)),
                    BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.5)),
                ))
                .with_children(|parent| {
                    parent.spawn((
                        Node {
                            width: Val::Percent(100.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                        BackgroundColor(Color::srgb(0.85, 0.85, 0.85)),
                        SprintBarFill,
                    ));
                });
        });
}
