//! Per-frame input snapshot handed to the state machine.

use bevy::prelude::*;

use super::MOVE_INPUT_THRESHOLD;

/// Everything the state machine reads from the player in one frame.
///
/// Key fields are press *edges*: true only on the frame the key went down.
/// `forward` and `right` are the character's horizontal basis vectors, used
/// to turn the raw axes into a world-space direction.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct LocomotionInput {
    /// Raw movement axes in [-1, 1]: x = strafe, y = forward.
    pub axes: Vec2,
    pub forward: Vec3,
    pub right: Vec3,
    pub slide_pressed: bool,
    pub jump_pressed: bool,
    pub crouch_pressed: bool,
    /// Sprint key currently held.
    pub sprint_held: bool,
    /// Sprint whenever moving, without holding the key.
    pub auto_sprint: bool,
}

impl Default for LocomotionInput {
    fn default() -> Self {
        Self {
            axes: Vec2::ZERO,
            forward: Vec3::NEG_Z,
            right: Vec3::X,
            slide_pressed: false,
            jump_pressed: false,
            crouch_pressed: false,
            sprint_held: false,
            auto_sprint: false,
        }
    }
}

impl LocomotionInput {
    /// Snapshot with the given axes and no keys pressed.
    pub fn moving(axes: Vec2) -> Self {
        Self {
            axes,
            ..Default::default()
        }
    }

    /// Magnitude of the raw axes.
    #[inline]
    pub fn magnitude(&self) -> f32 {
        self.axes.length()
    }

    /// Whether the axes are past the movement threshold.
    #[inline]
    pub fn is_moving(&self) -> bool {
        self.magnitude() > MOVE_INPUT_THRESHOLD
    }

    #[inline]
    pub fn wants_sprint(&self) -> bool {
        self.sprint_held || self.auto_sprint
    }

    /// Normalized world-space movement direction, or zero with no input.
    pub fn world_direction(&self) -> Vec3 {
        let dir = self.right * self.axes.x + self.forward * self.axes.y;
        Vec3::new(dir.x, 0.0, dir.z).normalize_or_zero()
    }

    /// Horizontal facing direction of the character.
    pub fn facing(&self) -> Vec3 {
        Vec3::new(self.forward.x, 0.0, self.forward.z)
            .try_normalize()
            .unwrap_or(Vec3::NEG_Z)
    }

    /// Movement direction, falling back to facing when there is no input.
    pub fn direction_or_facing(&self) -> Vec3 {
        let dir = self.world_direction();
        if dir == Vec3::ZERO {
            self.facing()
        } else {
            dir
        }
    }
}
