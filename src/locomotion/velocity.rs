//! Per-physics-step horizontal velocity.

use bevy::prelude::*;

use super::body::PhysicsBody;
use super::input::LocomotionInput;
use super::state::{LocomotionContext, LocomotionState};

impl LocomotionContext {
    /// Ground speed for the current state, before direction is applied.
    pub fn effective_speed(&self) -> f32 {
        let config = &self.config;
        let mut speed = match self.state {
            LocomotionState::Crouch => config.move_speed * config.crouch_speed_multiplier,
            LocomotionState::Normal if self.sprint.is_sprinting() => config.sprint_tactical_speed,
            _ => config.move_speed,
        };
        if self.state == LocomotionState::Normal && self.recovery_timer > 0.0 {
            speed *= config.crouch_speed_multiplier;
        }
        speed
    }

    /// Set the body's horizontal velocity for this physics step.
    ///
    /// Slide and dropshot keep whatever velocity their transition assigned.
    /// The vertical component always belongs to the integrator.
    pub fn resolve_velocity(
        &mut self,
        input: &LocomotionInput,
        grounded: bool,
        body: &mut impl PhysicsBody,
    ) {
        if self.state.drives_own_velocity() {
            return;
        }

        let dir = input.world_direction();
        let planar = if grounded {
            let planar = dir * self.effective_speed();
            // A locked jump keeps its momentum until the body actually leaves the ground
            if !self.air_direction_locked {
                self.air_momentum = planar;
            }
            planar
        } else if self.air_direction_locked {
            self.air_momentum
        } else {
            let steer = dir * self.config.move_speed * self.config.air_control_multiplier_from_idle;
            self.air_momentum + steer
        };

        let vertical = body.velocity().y;
        body.set_velocity(Vec3::new(planar.x, vertical, planar.z));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locomotion::config::LocomotionConfig;
    use crate::locomotion::testing::{forward, sprinting_forward, Rig};

    #[test]
    fn test_grounded_walk_caches_momentum() {
        let mut rig = Rig::new(LocomotionConfig::default());
        rig.body.velocity.y = -1.0;
        rig.resolve(&forward());

        assert_eq!(rig.body.velocity, Vec3::new(0.0, -1.0, -5.0));
        assert_eq!(rig.ctx.air_momentum(), Vec3::new(0.0, 0.0, -5.0));
    }

    #[test]
    fn test_diagonal_input_is_normalized() {
        let mut rig = Rig::new(LocomotionConfig::default());
        rig.resolve(&LocomotionInput::moving(Vec2::new(1.0, 1.0)));
        assert!((rig.body.velocity.length() - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_sprint_speed() {
        let mut rig = Rig::new(LocomotionConfig::default());
        rig.frame(0.25, &sprinting_forward());
        assert!((rig.body.velocity.length() - 8.0).abs() < 1e-5);
    }

    #[test]
    fn test_crouch_halves_speed() {
        let mut rig = Rig::new(LocomotionConfig::default());
        let mut input = LocomotionInput::default();
        input.crouch_pressed = true;
        rig.advance(0.25, &input);

        rig.resolve(&forward());
        assert!((rig.body.velocity.length() - 2.5).abs() < 1e-5);
    }

    #[test]
    fn test_slide_velocity_untouched() {
        let mut rig = Rig::new(LocomotionConfig::default());
        rig.frame(0.25, &sprinting_forward());
        let mut input = sprinting_forward();
        input.slide_pressed = true;
        rig.advance(0.25, &input);

        let slide_velocity = rig.body.velocity;
        rig.resolve(&LocomotionInput::moving(Vec2::new(1.0, 0.0)));
        assert_eq!(rig.body.velocity, slide_velocity);
    }

    #[test]
    fn test_airborne_unlocked_steering() {
        let mut rig = Rig::new(LocomotionConfig::default());
        rig.resolve(&forward());
        rig.grounded = false;

        rig.resolve(&LocomotionInput::moving(Vec2::new(1.0, 0.0)));
        // Walk-off momentum plus a small sideways correction
        assert!((rig.body.velocity - Vec3::new(1.0, 0.0, -5.0)).length() < 1e-5);
        assert_eq!(rig.ctx.air_momentum(), Vec3::new(0.0, 0.0, -5.0));
    }

    #[test]
    fn test_recovery_slows_normal_movement() {
        let mut rig = Rig::new(LocomotionConfig::default());
        rig.frame(0.25, &sprinting_forward());
        let mut input = sprinting_forward();
        input.slide_pressed = true;
        rig.advance(0.05, &input);
        rig.advance(0.05, &input);
        assert_eq!(rig.ctx.state(), LocomotionState::Normal);

        rig.resolve(&forward());
        assert!((rig.body.velocity.length() - 2.5).abs() < 1e-5);

        rig.frame(0.25, &forward());
        assert_eq!(rig.ctx.recovery_timer(), 0.0);
        assert!((rig.body.velocity.length() - 5.0).abs() < 1e-5);
    }
}
