//! Locomotion tunables.
//!
//! All values use world units and seconds. The config is fixed for the whole
//! session: the host reads it once (usually from `assets/locomotion.ron`) and
//! hands a copy to every [`LocomotionContext`](super::LocomotionContext).

use std::path::{Path, PathBuf};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while loading a [`LocomotionConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read locomotion config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse locomotion config: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("invalid locomotion config: `{field}` {constraint}")]
    Invalid {
        field: &'static str,
        constraint: &'static str,
    },
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionConfig {
    // ========================================================================
    // Ground movement
    // ========================================================================
    /// Walking speed.
    pub move_speed: f32,

    /// Upward velocity applied by a jump.
    pub jump_force: f32,

    /// Multiplier on move speed while crouched or recovering from a slide.
    pub crouch_speed_multiplier: f32,

    // ========================================================================
    // Tactical sprint
    // ========================================================================
    /// Ground speed while tactical sprint is active.
    pub sprint_tactical_speed: f32,

    /// Seconds of sprint a full energy bar holds.
    pub sprint_max_duration: f32,

    /// Energy regained per second while not sprinting.
    pub sprint_recharge_rate: f32,

    // ========================================================================
    // Slide
    // ========================================================================
    pub slide_speed: f32,
    pub slide_duration: f32,

    /// Idle time after a slide before another may start.
    pub slide_cooldown: f32,

    /// Time after a slide during which movement runs at crouch speed.
    pub recovery_duration: f32,

    // ========================================================================
    // Dropshot
    // ========================================================================
    /// Upward velocity component of the dropshot impulse.
    pub dropshot_up_impulse: f32,

    /// Forward dash speed as a multiple of `move_speed`.
    pub dropshot_forward_multiplier: f32,

    // ========================================================================
    // Collider
    // ========================================================================
    /// Resting collider height, used by the host when spawning the body.
    pub standing_height: f32,

    /// Collider radius, used by the host when spawning the body.
    pub player_radius: f32,

    /// Collider height while crouched, sliding or in a dropshot.
    pub crouch_height: f32,

    /// Added to the captured collider center while lowered.
    pub crouch_center_offset: Vec3,

    /// Extra reach of the ground probe past half the resting height.
    pub ground_probe_margin: f32,

    // ========================================================================
    // Camera
    // ========================================================================
    /// Camera holder offset while crouched or sliding.
    pub slide_camera_offset: Vec3,

    /// Camera holder offset during a dropshot.
    pub dropshot_camera_offset: Vec3,

    /// Exponential smoothing rate for the camera holder offset.
    pub camera_transition_speed: f32,

    /// Mouse look sensitivity (degrees per ten pixels of mouse travel).
    pub mouse_sensitivity: f32,

    /// Maximum pitch above or below the horizon, in degrees.
    pub look_pitch_limit_degrees: f32,

    // ========================================================================
    // Air control
    // ========================================================================
    /// Steering allowed while airborne and unlocked, as a fraction of move speed.
    pub air_control_multiplier_from_idle: f32,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            jump_force: 6.0,
            crouch_speed_multiplier: 0.5,

            sprint_tactical_speed: 8.0,
            sprint_max_duration: 3.0,
            sprint_recharge_rate: 1.0,

            slide_speed: 10.0,
            slide_duration: 0.5,
            slide_cooldown: 0.3,
            recovery_duration: 0.1,

            dropshot_up_impulse: 4.0,
            dropshot_forward_multiplier: 1.6,

            standing_height: 2.0,
            player_radius: 0.5,
            crouch_height: 1.0,
            crouch_center_offset: Vec3::new(0.0, -0.5, 0.0),
            ground_probe_margin: 0.1,

            slide_camera_offset: Vec3::new(0.0, -0.5, 0.0),
            dropshot_camera_offset: Vec3::new(0.0, -0.7, 0.0),
            camera_transition_speed: 6.0,
            mouse_sensitivity: 2.0,
            look_pitch_limit_degrees: 60.0,

            air_control_multiplier_from_idle: 0.2,
        }
    }
}

impl LocomotionConfig {
    /// Parse and validate a config from RON text.
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a RON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&text)
    }

    /// Check every tunable against its legal domain.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("move_speed", self.move_speed),
            ("jump_force", self.jump_force),
            ("sprint_tactical_speed", self.sprint_tactical_speed),
            ("sprint_max_duration", self.sprint_max_duration),
            ("sprint_recharge_rate", self.sprint_recharge_rate),
            ("slide_speed", self.slide_speed),
            ("slide_duration", self.slide_duration),
            ("recovery_duration", self.recovery_duration),
            ("dropshot_up_impulse", self.dropshot_up_impulse),
            ("dropshot_forward_multiplier", self.dropshot_forward_multiplier),
            ("standing_height", self.standing_height),
            ("player_radius", self.player_radius),
            ("crouch_height", self.crouch_height),
            ("ground_probe_margin", self.ground_probe_margin),
            ("camera_transition_speed", self.camera_transition_speed),
            ("mouse_sensitivity", self.mouse_sensitivity),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    constraint: "must be finite and greater than zero",
                });
            }
        }

        if !(self.slide_cooldown.is_finite() && self.slide_cooldown >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "slide_cooldown",
                constraint: "must be finite and not negative",
            });
        }

        if self.crouch_height >= self.standing_height {
            return Err(ConfigError::Invalid {
                field: "crouch_height",
                constraint: "must be less than standing_height",
            });
        }

        let unit = [
            ("crouch_speed_multiplier", self.crouch_speed_multiplier),
            (
                "air_control_multiplier_from_idle",
                self.air_control_multiplier_from_idle,
            ),
        ];
        for (field, value) in unit {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Invalid {
                    field,
                    constraint: "must lie in [0, 1]",
                });
            }
        }

        if !(self.look_pitch_limit_degrees > 0.0 && self.look_pitch_limit_degrees < 90.0) {
            return Err(ConfigError::Invalid {
                field: "look_pitch_limit_degrees",
                constraint: "must lie in (0, 90)",
            });
        }

        let offsets = [
            ("crouch_center_offset", self.crouch_center_offset),
            ("slide_camera_offset", self.slide_camera_offset),
            ("dropshot_camera_offset", self.dropshot_camera_offset),
        ];
        for (field, value) in offsets {
            if !value.is_finite() {
                return Err(ConfigError::Invalid {
                    field,
                    constraint: "must be finite",
                });
            }
        }

        Ok(())
    }
}
