use std::path::PathBuf;

use bevy::prelude::*;

use crate::locomotion::{LocomotionConfig, LocomotionInput};
use crate::resources::{ArenaWorld, GameState};
use crate::systems::*;
use crate::ui::{setup_hud, setup_pause_menu, setup_sprint_bar};
use crate::world::setup_arena;

/// Default location of the tunables file, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "assets/locomotion.ron";

/// Wires the locomotion core into a Bevy app: arena, player, input, physics and HUD
pub struct LocomotionPlugin {
    pub config_path: PathBuf,
}

impl Default for LocomotionPlugin {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }
}

impl LocomotionPlugin {
    fn load_config(&self) -> LocomotionConfig {
        match LocomotionConfig::load(&self.config_path) {
            Ok(config) => {
                info!("Loaded locomotion config from {}", self.config_path.display());
                config
            }
            Err(err) => {
                warn!("{err}; using default locomotion config");
                LocomotionConfig::default()
            }
        }
    }
}

fn not_paused(state: Res<GameState>) -> bool {
    !state.paused
}

fn paused(state: Res<GameState>) -> bool {
    state.paused
}

impl Plugin for LocomotionPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.load_config())
            .init_resource::<GameState>()
            .init_resource::<LocomotionInput>()
            .insert_resource(ArenaWorld::training_ground());

        app.add_systems(
            Startup,
            (
                setup_arena,
                spawn_player,
                setup_cursor_grab,
                setup_hud,
                setup_sprint_bar,
                setup_pause_menu,
            )
                .chain(),
        )
        // Input systems
        .add_systems(
            Update,
            (
                handle_window_focus,
                toggle_pause_menu,
                toggle_debug_overlay,
                toggle_ui_visibility,
                toggle_auto_sprint,
            ),
        )
        // Per-frame locomotion
        .add_systems(
            Update,
            (
                (
                    sample_locomotion_input,
                    mouse_look,
                    advance_locomotion,
                    animate_camera_offset,
                )
                    .chain()
                    .run_if(not_paused),
                clear_locomotion_input.run_if(paused),
            )
                .after(toggle_pause_menu)
                .after(toggle_auto_sprint),
        )
        // Physics step
        .add_systems(
            FixedUpdate,
            (resolve_locomotion_velocity, integrate_bodies)
                .chain()
                .run_if(not_paused),
        )
        // UI update systems
        .add_systems(
            Update,
            (
                update_crosshair_visibility,
                update_hud_visibility,
                update_debug_visibility,
                update_debug_visibility_on_ui_toggle,
                update_sprint_bar,
                update_debug_overlay,
                update_pause_menu_visibility,
                handle_pause_menu_buttons,
            )
                .after(advance_locomotion),
        );
    }
}
