use bevy::prelude::*;
use bevy::window::{PrimaryWindow, CursorGrabMode};
use crate::components::{DebugOverlay, Player};
use crate::locomotion::LocomotionInput;
use crate::resources::GameState;

/// Sample the keyboard into the per-frame locomotion snapshot
pub fn sample_locomotion_input(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    game_state: Res<GameState>,
    player_query: Query<&Transform, With<Player>>,
    mut input: ResMut<LocomotionInput>,
) {
    let mut axes = Vec2::ZERO;
    if keyboard_input.pressed(KeyCode::KeyW) {
        axes.y += 1.0;
    }
    if keyboard_input.pressed(KeyCode::KeyS) {
        axes.y -= 1.0;
    }
    if keyboard_input.pressed(KeyCode::KeyD) {
        axes.x += 1.0;
    }
    if keyboard_input.pressed(KeyCode::KeyA) {
        axes.x -= 1.0;
    }

    // Keep the basis from the previous frame if there's no player yet
    let (forward, right) = match player_query.get_single() {
        Ok(transform) => (
            Vec3::new(transform.forward().x, 0.0, transform.forward().z).normalize_or_zero(),
            Vec3::new(transform.right().x, 0.0, transform.right().z).normalize_or_zero(),
        ),
        Err(_) => (input.forward, input.right),
    };

    *input = LocomotionInput {
        axes: axes.clamp_length_max(1.0),
        forward,
        right,
        slide_pressed: keyboard_input.just_pressed(KeyCode::KeyC),
        jump_pressed: keyboard_input.just_pressed(KeyCode::Space),
        crouch_pressed: keyboard_input.just_pressed(KeyCode::ControlLeft),
        sprint_held: keyboard_input.pressed(KeyCode::ShiftLeft),
        auto_sprint: game_state.auto_sprint,
    };
}

/// Zero the snapshot while paused so nothing is carried into the resumed frame
pub fn clear_locomotion_input(mut input: ResMut<LocomotionInput>) {
    let forward = input.forward;
    let right = input.right;
    *input = LocomotionInput {
        forward,
        right,
        ..default()
    };
}

pub fn toggle_pause_menu(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut game_state: ResMut<GameState>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    if keyboard_input.just_pressed(KeyCode::Escape) {
        game_state.paused = !game_state.paused;

        // Toggle cursor grab mode
        if let Ok(mut window) = windows.get_single_mut() {
            if game_state.paused {
                window.cursor_options.grab_mode = CursorGrabMode::None;
                window.cursor_options.visible = true;
            } else {
                window.cursor_options.grab_mode = CursorGrabMode::Locked;
                window.cursor_options.visible = false;
            }
        }

        info!("Game {}", if game_state.paused { "paused" } else { "resumed" });
    }
}

pub fn toggle_debug_overlay(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut query: Query<&mut DebugOverlay>,
) {
    if keyboard_input.just_pressed(KeyCode::F3) {
        for mut debug_overlay in query.iter_mut() {
            debug_overlay.visible = !debug_overlay.visible;
            info!("Debug overlay {}", if debug_overlay.visible { "shown" } else { "hidden" });
        }
    }
}

pub fn toggle_ui_visibility(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut game_state: ResMut<GameState>,
) {
    if keyboard_input.just_pressed(KeyCode::F1) {
        game_state.ui_visible = !game_state.ui_visible;
    }
}

pub fn toggle_auto_sprint(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut game_state: ResMut<GameState>,
) {
    if keyboard_input.just_pressed(KeyCode::F4) {
        game_state.auto_sprint = !game_state.auto_sprint;
        let mode = if game_state.auto_sprint { "on" } else { "off" };
        info!("Auto-sprint {}", mode);
    }
}
