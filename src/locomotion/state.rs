//! Locomotion state and the per-character context that owns it.

use bevy::prelude::*;

use super::body::{CameraHolder, ColliderShape};
use super::camera::CameraOffsetAnimator;
use super::config::LocomotionConfig;
use super::energy::{SprintEnergy, SprintEvent};

/// The mutually exclusive movement states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LocomotionState {
    #[default]
    Normal,
    Crouch,
    Slide,
    Dropshot,
}

impl LocomotionState {
    /// States that run with the lowered collider.
    pub fn is_lowered(self) -> bool {
        !matches!(self, LocomotionState::Normal)
    }

    /// States whose velocity is set at transition time rather than each step.
    pub fn drives_own_velocity(self) -> bool {
        matches!(self, LocomotionState::Slide | LocomotionState::Dropshot)
    }

    pub fn label(self) -> &'static str {
        match self {
            LocomotionState::Normal => "Normal",
            LocomotionState::Crouch => "Crouch",
            LocomotionState::Slide => "Slide",
            LocomotionState::Dropshot => "Dropshot",
        }
    }
}

/// Collider shape captured when the character became controllable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColliderSnapshot {
    pub height: f32,
    pub center: Vec3,
}

impl ColliderSnapshot {
    pub fn capture(collider: &impl ColliderShape) -> Self {
        Self {
            height: collider.height(),
            center: collider.center(),
        }
    }

    /// Shrink the collider for crouch, slide and dropshot.
    pub fn lower(&self, collider: &mut impl ColliderShape, config: &LocomotionConfig) {
        collider.set_height(config.crouch_height);
        collider.set_center(self.center + config.crouch_center_offset);
    }

    pub fn restore(&self, collider: &mut impl ColliderShape) {
        collider.set_height(self.height);
        collider.set_center(self.center);
    }
}

/// All locomotion state for one character.
///
/// Created once when the character spawns and mutated only through
/// [`advance`](Self::advance) and [`resolve_velocity`](Self::resolve_velocity).
#[derive(Component, Debug, Clone)]
pub struct LocomotionContext {
    pub(super) config: LocomotionConfig,
    pub(super) state: LocomotionState,

    pub(super) slide_timer: f32,
    pub(super) slide_cooldown_timer: f32,
    pub(super) slide_direction: Vec3,
    /// Counts down after a slide; movement is slowed while positive.
    pub(super) recovery_timer: f32,

    pub(super) air_momentum: Vec3,
    pub(super) awaiting_air_direction: bool,
    pub(super) air_direction_locked: bool,
    /// Ground status seen by the previous `advance`, for landing detection.
    pub(super) was_grounded: bool,

    /// Set when a key press cancels a state; cleared at the end of the same frame.
    pub(super) just_cancelled_action: bool,

    pub(super) sprint: SprintEnergy,
    /// Sprint edge reported by the most recent `advance`.
    pub(super) sprint_event: Option<SprintEvent>,
    pub(super) collider: ColliderSnapshot,
    pub(super) camera: CameraOffsetAnimator,
}

impl LocomotionContext {
    /// Snapshot the collider and camera holder and start in `Normal` with full energy.
    pub fn new(
        config: LocomotionConfig,
        collider: &impl ColliderShape,
        camera_holder: &impl CameraHolder,
    ) -> Self {
        let sprint = SprintEnergy::new(config.sprint_max_duration, config.sprint_recharge_rate);
        Self {
            state: LocomotionState::Normal,
            slide_timer: 0.0,
            slide_cooldown_timer: 0.0,
            slide_direction: Vec3::NEG_Z,
            recovery_timer: 0.0,
            air_momentum: Vec3::ZERO,
            awaiting_air_direction: false,
            air_direction_locked: false,
            was_grounded: false,
            just_cancelled_action: false,
            sprint,
            sprint_event: None,
            collider: ColliderSnapshot::capture(collider),
            camera: CameraOffsetAnimator::new(camera_holder.local_position()),
            config,
        }
    }

    pub fn state(&self) -> LocomotionState {
        self.state
    }

    pub fn config(&self) -> &LocomotionConfig {
        &self.config
    }

    pub fn sprint(&self) -> &SprintEnergy {
        &self.sprint
    }

    pub fn is_sprinting(&self) -> bool {
        self.sprint.is_sprinting()
    }

    /// Sprint edge from the last frame, if any.
    pub fn sprint_event(&self) -> Option<SprintEvent> {
        self.sprint_event
    }

    pub fn slide_timer(&self) -> f32 {
        self.slide_timer
    }

    pub fn slide_cooldown_timer(&self) -> f32 {
        self.slide_cooldown_timer
    }

    pub fn recovery_timer(&self) -> f32 {
        self.recovery_timer
    }

    pub fn air_momentum(&self) -> Vec3 {
        self.air_momentum
    }

    pub fn awaiting_air_direction(&self) -> bool {
        self.awaiting_air_direction
    }

    pub fn air_direction_locked(&self) -> bool {
        self.air_direction_locked
    }

    #[cfg(test)]
    pub(crate) fn collider_snapshot(&self) -> ColliderSnapshot {
        self.collider
    }

    /// Resting collider height, which also sizes the ground probe.
    pub fn resting_height(&self) -> f32 {
        self.collider.height
    }

    /// Where the camera holder is heading this frame.
    pub fn camera_target(&self) -> Vec3 {
        self.camera.target(self.state, &self.config)
    }

    /// Ease the camera holder toward the offset for the current state.
    pub fn animate_camera(&self, dt: f32, holder: &mut impl CameraHolder) {
        self.camera.step(dt, self.state, &self.config, holder);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locomotion::testing::{FakeCollider, FakeHolder};

    #[test]
    fn test_new_context_defaults() {
        let collider = FakeCollider::standing();
        let holder = FakeHolder(Vec3::new(0.0, 0.6, 0.0));
        let ctx = LocomotionContext::new(LocomotionConfig::default(), &collider, &holder);

        assert_eq!(ctx.state(), LocomotionState::Normal);
        assert_eq!(ctx.sprint().timer(), ctx.config().sprint_max_duration);
        assert_eq!(ctx.resting_height(), 2.0);
        assert_eq!(ctx.camera_target(), Vec3::new(0.0, 0.6, 0.0));
        assert!(!ctx.awaiting_air_direction());
        assert!(!ctx.air_direction_locked());
    }

    #[test]
    fn test_snapshot_lower_and_restore() {
        let config = LocomotionConfig::default();
        let mut collider = FakeCollider::standing();
        let snapshot = ColliderSnapshot::capture(&collider);

        snapshot.lower(&mut collider, &config);
        assert_eq!(collider.height, config.crouch_height);
        assert_eq!(collider.center, config.crouch_center_offset);

        snapshot.restore(&mut collider);
        assert_eq!(ColliderSnapshot::capture(&collider), snapshot);
    }

    #[test]
    fn test_state_predicates() {
        assert!(!LocomotionState::Normal.is_lowered());
        assert!(LocomotionState::Crouch.is_lowered());
        assert!(LocomotionState::Slide.drives_own_velocity());
        assert!(LocomotionState::Dropshot.drives_own_velocity());
        assert!(!LocomotionState::Crouch.drives_own_velocity());
    }
}
