use bevy::prelude::*;
use bevy::input::mouse::MouseMotion;
use bevy::window::{PrimaryWindow, CursorGrabMode, WindowFocused};
use crate::components::{CameraRig, Player};
use crate::locomotion::{LocomotionContext, LookAngles};
use crate::resources::GameState;

pub fn setup_cursor_grab(mut windows: Query<&mut Window, With<PrimaryWindow>>) {
    if let Ok(mut window) = windows.get_single_mut() {
        window.cursor_options.grab_mode = CursorGrabMode::Locked;
        window.cursor_options.visible = false;
    }
}

/// Re-grab cursor when window regains focus (e.g., after alt-tabbing)
pub fn handle_window_focus(
    mut focus_events: EventReader<WindowFocused>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
    game_state: Res<GameState>,
    mouse_button: Res<ButtonInput<MouseButton>>,
) {
    for event in focus_events.read() {
        if event.focused && !game_state.paused {
            if let Ok(mut window) = windows.get_single_mut() {
                window.cursor_options.grab_mode = CursorGrabMode::Locked;
                window.cursor_options.visible = false;
            }
        }
    }

    // Also re-grab on any mouse click when not paused (fallback for alt-tab issues)
    if !game_state.paused && (mouse_button.just_pressed(MouseButton::Left) || mouse_button.just_pressed(MouseButton::Right)) {
        if let Ok(mut window) = windows.get_single_mut() {
            if window.cursor_options.grab_mode != CursorGrabMode::Locked {
                window.cursor_options.grab_mode = CursorGrabMode::Locked;
                window.cursor_options.visible = false;
            }
        }
    }
}

/// Yaw turns the player body, pitch tilts the camera rig
pub fn mouse_look(
    mut mouse_motion_events: EventReader<MouseMotion>,
    mut player_query: Query<(&mut Transform, &mut LookAngles, &LocomotionContext), With<Player>>,
    mut rig_query: Query<&mut Transform, (With<CameraRig>, Without<Player>)>,
) {
    let Ok((mut body_transform, mut look, ctx)) = player_query.get_single_mut() else {
        // Drain so stale motion doesn't snap the view once the player exists
        mouse_motion_events.clear();
        return;
    };

    for event in mouse_motion_events.read() {
        look.apply_mouse_delta(event.delta, ctx.config());
    }

    body_transform.rotation = look.body_rotation();
    for mut rig_transform in rig_query.iter_mut() {
        rig_transform.rotation = look.holder_rotation();
    }
}
