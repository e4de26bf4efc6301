use bevy::prelude::*;
use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use crate::components::{DebugOverlay, KinematicBody, Player};
use crate::locomotion::{horizontal, LocomotionContext, LookAngles};
use crate::resources::GameState;

/// System to update debug overlay with FPS, position and locomotion internals
pub fn update_debug_overlay(
    diagnostics: Res<DiagnosticsStore>,
    game_state: Res<GameState>,
    player_query: Query<(&Transform, &LookAngles, &KinematicBody, &LocomotionContext), With<Player>>,
    mut debug_text_query: Query<(&mut Text, &DebugOverlay)>,
) {
    let Ok((transform, look, body, ctx)) = player_query.get_single() else {
        return;
    };

    let Ok((mut text, debug_overlay)) = debug_text_query.get_single_mut() else {
        return;
    };

    if !debug_overlay.visible {
        **text = "".to_string();
        return;
    }

    let mut debug_text = String::new();

    if let Some(fps_diagnostic) = diagnostics.get(&FrameTimeDiagnosticsPlugin::FPS) {
        if let Some(fps_smoothed) = fps_diagnostic.smoothed() {
            debug_text.push_str(&format!("FPS: {:.0}\n", fps_smoothed));
        }
    }

    let pos = transform.translation;
    debug_text.push_str(&format!("X: {:.1}\nY: {:.1}\nZ: {:.1}\n", pos.x, pos.y, pos.z));
    debug_text.push_str(&format!("Facing: {}\n", get_cardinal_direction(look.yaw)));

    debug_text.push_str(&format!("On floor: {}\n", body.on_floor));
    debug_text.push_str(&format!("Speed: {:.2}\n", horizontal(body.velocity).length()));

    debug_text.push_str(&locomotion_summary(ctx, game_state.auto_sprint));

    **text = debug_text;
}

/// Locomotion internals, one value per line
fn locomotion_summary(ctx: &LocomotionContext, auto_sprint_on: bool) -> String {
    let mut debug_text = format!("State: {}\n", ctx.state().label());

    let sprint = ctx.sprint();
    let sprint_status = if sprint.is_drained() {
        " (DRAINED)"
    } else if sprint.is_sprinting() {
        " (SPRINTING)"
    } else {
        ""
    };
    debug_text.push_str(&format!(
        "Sprint: {:.2}/{:.2}s{}\n",
        sprint.timer(),
        sprint.max_duration(),
        sprint_status
    ));
    let auto_sprint = if auto_sprint_on { "on" } else { "off" };
    debug_text.push_str(&format!("Auto-sprint: {}\n", auto_sprint));

    debug_text.push_str(&format!(
        "Slide: {:.2}s (cooldown {:.2}s)\n",
        ctx.slide_timer(),
        ctx.slide_cooldown_timer()
    ));
    debug_text.push_str(&format!("Recovery: {:.2}s\n", ctx.recovery_timer()));

    let momentum = ctx.air_momentum();
    debug_text.push_str(&format!(
        "Air momentum: ({:.1}, {:.1})\nAwaiting direction: {}\nDirection locked: {}\n",
        momentum.x,
        momentum.z,
        ctx.awaiting_air_direction(),
        ctx.air_direction_locked()
    ));

    debug_text.push_str(&format!("Camera offset: {:.2}", ctx.camera_target().y));

    debug_text
}

/// Yaw 0 looks down -Z, which the overlay calls north; positive yaw turns left
fn get_cardinal_direction(yaw: f32) -> &'static str {
    let degrees = yaw.to_degrees().rem_euclid(360.0);

    match degrees {
        d if !(22.5..337.5).contains(&d) => "N",
        d if d < 67.5 => "NW",
        d if d < 112.5 => "W",
        d if d < 157.5 => "SW",
        d if d < 202.5 => "S",
        d if d < 247.5 => "SE",
        d if d < 292.5 => "E",
        _ => "NE",
    }
}
