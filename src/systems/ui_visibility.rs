use bevy::prelude::*;
use crate::components::{ControlsHint, Crosshair, DebugOverlay, Player, SprintBar, SprintBarFill};
use crate::locomotion::LocomotionContext;
use crate::resources::GameState;

const SPRINT_READY: Color = Color::srgb(0.85, 0.85, 0.85);
const SPRINT_ACTIVE: Color = Color::srgb(0.4, 0.8, 1.0);
const SPRINT_DRAINED: Color = Color::srgb(0.85, 0.25, 0.2);

fn visible_if(condition: bool) -> Visibility {
    if condition {
        Visibility::Visible
    } else {
        Visibility::Hidden
    }
}

/// Update crosshair visibility based on UI state
pub fn update_crosshair_visibility(
    game_state: Res<GameState>,
    mut crosshair_query: Query<&mut Visibility, With<Crosshair>>,
) {
    if !game_state.is_changed() {
        return;
    }

    for mut visibility in crosshair_query.iter_mut() {
        *visibility = visible_if(game_state.ui_visible);
    }
}

/// Sprint bar and controls hint follow the UI toggle
pub fn update_hud_visibility(
    game_state: Res<GameState>,
    mut hud_query: Query<&mut Visibility, Or<(With<SprintBar>, With<ControlsHint>)>>,
) {
    if !game_state.is_changed() {
        return;
    }

    for mut visibility in hud_query.iter_mut() {
        *visibility = visible_if(game_state.ui_visible);
    }
}

/// Hide debug overlay when UI is hidden (F3 still toggles it when UI is visible)
pub fn update_debug_visibility(
    game_state: Res<GameState>,
    mut debug_query: Query<(&DebugOverlay, &mut Visibility), Changed<DebugOverlay>>,
) {
    for (debug_overlay, mut visibility) in debug_query.iter_mut() {
        *visibility = visible_if(game_state.ui_visible && debug_overlay.visible);
    }
}

/// Update debug overlay visibility when UI state changes
pub fn update_debug_visibility_on_ui_toggle(
    game_state: Res<GameState>,
    mut debug_query: Query<(&DebugOverlay, &mut Visibility)>,
) {
    if !game_state.is_changed() {
        return;
    }

    for (debug_overlay, mut visibility) in debug_query.iter_mut() {
        *visibility = visible_if(game_state.ui_visible && debug_overlay.visible);
    }
}

/// Resize and tint the sprint bar fill from the player's remaining energy
pub fn update_sprint_bar(
    player_query: Query<&LocomotionContext, (With<Player>, Changed<LocomotionContext>)>,
    mut fill_query: Query<(&mut Node, &mut BackgroundColor), With<SprintBarFill>>,
) {
    let Ok(ctx) = player_query.get_single() else {
        return;
    };

    let sprint = ctx.sprint();
    for (mut node, mut color) in fill_query.iter_mut() {
        node.width = Val::Percent(sprint.fraction() * 100.0);
        *color = BackgroundColor(sprint_bar_color(sprint.is_drained(), sprint.is_sprinting()));
    }
}

fn sprint_bar_color(drained: bool, sprinting: bool) -> Color {
    if drained {
        SPRINT_DRAINED
    } else if sprinting {
        SPRINT_ACTIVE
    } else {
        SPRINT_READY
    }
}
