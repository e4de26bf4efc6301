//! Camera holder offset animation and mouse look.

use bevy::prelude::*;

use super::body::CameraHolder;
use super::config::LocomotionConfig;
use super::state::LocomotionState;

/// Mouse travel is converted to axis units at this rate before sensitivity applies.
const PIXELS_TO_AXIS: f32 = 0.1;

/// Eases the camera holder between its resting offset and a lowered one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraOffsetAnimator {
    rest: Vec3,
}

impl CameraOffsetAnimator {
    pub fn new(rest: Vec3) -> Self {
        Self { rest }
    }

    #[cfg(test)]
    pub(crate) fn rest(&self) -> Vec3 {
        self.rest
    }

    /// Target local offset for a state.
    pub fn target(&self, state: LocomotionState, config: &LocomotionConfig) -> Vec3 {
        match state {
            LocomotionState::Normal => self.rest,
            LocomotionState::Dropshot => self.rest + config.dropshot_camera_offset,
            LocomotionState::Crouch | LocomotionState::Slide => {
                self.rest + config.slide_camera_offset
            }
        }
    }

    /// Move the holder toward the target by `min(1, dt * transition_speed)`.
    pub fn step(
        &self,
        dt: f32,
        state: LocomotionState,
        config: &LocomotionConfig,
        holder: &mut impl CameraHolder,
    ) {
        let t = (dt * config.camera_transition_speed).clamp(0.0, 1.0);
        let current = holder.local_position();
        holder.set_local_position(current.lerp(self.target(state, config), t));
    }
}

/// First-person view angles. Yaw turns the body, pitch tilts the camera holder.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct LookAngles {
    /// Radians around +Y.
    pub yaw: f32,
    /// Radians around the holder's X axis; positive looks up.
    pub pitch: f32,
}

impl LookAngles {
    /// Apply one mouse delta in pixels (positive y is downward travel).
    pub fn apply_mouse_delta(&mut self, delta: Vec2, config: &LocomotionConfig) {
        let degrees_per_pixel = config.mouse_sensitivity * PIXELS_TO_AXIS;
        self.yaw -= (delta.x * degrees_per_pixel).to_radians();

        let limit = config.look_pitch_limit_degrees.to_radians();
        self.pitch = (self.pitch - (delta.y * degrees_per_pixel).to_radians()).clamp(-limit, limit);
    }

    pub fn body_rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw)
    }

    pub fn holder_rotation(&self) -> Quat {
        Quat::from_rotation_x(self.pitch)
    }
}
