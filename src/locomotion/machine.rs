//! The locomotion state machine.
//!
//! # Frame order
//!
//! Each [`advance`](LocomotionContext::advance) runs, in order:
//!
//! 1. landing detection and timer countdowns
//! 2. key edges, resolved slide key → crouch key → jump key; the first edge
//!    that changes anything consumes the frame and later edges are dropped
//! 3. slide expiry (skipped on the frame the slide started)
//! 4. deferred air-direction commit
//! 5. sprint energy
//!
//! # Jump key priority
//!
//! A jump press cancels Slide, then Dropshot (grounded only), then Crouch,
//! and only jumps when none of those fired. A cancel raises
//! `just_cancelled_action`, which blocks the jump and sprint for the rest of
//! the frame and is cleared before `advance` returns.

use bevy::prelude::*;

use super::body::{horizontal, ColliderShape, PhysicsBody};
use super::input::LocomotionInput;
use super::sensor::GroundSensor;
use super::state::{LocomotionContext, LocomotionState};
use super::SLIDE_MIN_SPEED;

impl LocomotionContext {
    /// Advance the state machine by one logic frame.
    ///
    /// Writes the body velocity only at transition instants (slide, dropshot,
    /// jump, cancels); continuous movement is left to
    /// [`resolve_velocity`](Self::resolve_velocity).
    pub fn advance(
        &mut self,
        dt: f32,
        input: &LocomotionInput,
        ground: &impl GroundSensor,
        body: &mut impl PhysicsBody,
        collider: &mut impl ColliderShape,
    ) {
        let dt = dt.max(0.0);
        let grounded = ground.is_grounded();

        if grounded && !self.was_grounded {
            self.land();
        }
        self.was_grounded = grounded;

        self.tick_timers(dt);

        let state_before = self.state;
        let mut consumed = false;
        if input.slide_pressed {
            consumed = self.on_slide_key(grounded, input, body, collider);
        }
        if !consumed && input.crouch_pressed {
            consumed = self.on_crouch_key(grounded, input, body, collider);
        }
        if !consumed && input.jump_pressed {
            self.on_jump_key(grounded, input, body, collider);
        }

        let slide_started = self.state == LocomotionState::Slide
            && state_before != LocomotionState::Slide;
        if self.state == LocomotionState::Slide && !slide_started {
            self.update_slide(dt, body, collider);
        }

        if self.awaiting_air_direction && !grounded && !self.air_direction_locked {
            let dir = input.world_direction();
            if dir != Vec3::ZERO {
                self.lock_air_direction(dir);
                debug!("air direction committed: {:?}", self.air_momentum);
            }
        }

        let sprint_requested = input.wants_sprint()
            && self.state == LocomotionState::Normal
            && input.is_moving()
            && !self.just_cancelled_action;
        self.sprint_event = self.sprint.update(dt, sprint_requested);

        self.just_cancelled_action = false;
    }

    /// Landing ends the airborne phase and releases the air-direction lock.
    fn land(&mut self) {
        if self.awaiting_air_direction || self.air_direction_locked {
            debug!("landed, air direction released");
        }
        self.awaiting_air_direction = false;
        self.air_direction_locked = false;
    }

    fn tick_timers(&mut self, dt: f32) {
        // Cooldown only runs once the slide is over
        if self.state != LocomotionState::Slide {
            self.slide_cooldown_timer = (self.slide_cooldown_timer - dt).max(0.0);
        }
        self.recovery_timer = (self.recovery_timer - dt).max(0.0);
    }

    /// Returns true if the press changed anything.
    fn on_slide_key(
        &mut self,
        grounded: bool,
        input: &LocomotionInput,
        body: &mut impl PhysicsBody,
        collider: &mut impl ColliderShape,
    ) -> bool {
        match self.state {
            LocomotionState::Slide => {
                self.cancel_slide(body, collider);
                true
            }
            LocomotionState::Crouch => {
                self.exit_crouch(collider);
                self.just_cancelled_action = true;
                true
            }
            LocomotionState::Normal => {
                if !grounded
                    || self.slide_cooldown_timer > 0.0
                    || !self.sprint.is_sprinting()
                    || !input.is_moving()
                {
                    return false;
                }
                self.enter_slide(input, body, collider);
                true
            }
            LocomotionState::Dropshot => false,
        }
    }

    fn on_crouch_key(
        &mut self,
        grounded: bool,
        input: &LocomotionInput,
        body: &mut impl PhysicsBody,
        collider: &mut impl ColliderShape,
    ) -> bool {
        match self.state {
            LocomotionState::Crouch => {
                self.exit_crouch(collider);
                self.just_cancelled_action = true;
                true
            }
            LocomotionState::Normal if grounded => {
                if input.is_moving() && self.sprint.is_sprinting() {
                    self.enter_dropshot(input, body, collider);
                } else {
                    self.enter_crouch(body, collider);
                }
                true
            }
            _ => false,
        }
    }

    fn on_jump_key(
        &mut self,
        grounded: bool,
        input: &LocomotionInput,
        body: &mut impl PhysicsBody,
        collider: &mut impl ColliderShape,
    ) {
        match self.state {
            LocomotionState::Slide => self.cancel_slide(body, collider),
            LocomotionState::Dropshot => {
                if grounded {
                    self.cancel_dropshot(collider);
                } else {
                    debug!("dropshot cancel blocked while airborne");
                }
            }
            LocomotionState::Crouch => {
                self.exit_crouch(collider);
                self.just_cancelled_action = true;
            }
            LocomotionState::Normal => {
                if grounded && !self.just_cancelled_action {
                    self.jump(input, body);
                }
            }
        }
    }

    fn enter_slide(
        &mut self,
        input: &LocomotionInput,
        body: &mut impl PhysicsBody,
        collider: &mut impl ColliderShape,
    ) {
        self.state = LocomotionState::Slide;
        self.slide_timer = self.config.slide_duration;
        self.slide_cooldown_timer = self.config.slide_cooldown;
        self.slide_direction = input.direction_or_facing();

        self.collider.lower(collider, &self.config);
        body.set_velocity(self.slide_direction * self.config.slide_speed);
        debug!("Normal -> Slide toward {:?}", self.slide_direction);
    }

    fn update_slide(
        &mut self,
        dt: f32,
        body: &mut impl PhysicsBody,
        collider: &mut impl ColliderShape,
    ) {
        self.slide_timer = (self.slide_timer - dt).max(0.0);
        let speed = horizontal(body.velocity()).length();
        if speed <= SLIDE_MIN_SPEED || self.slide_timer <= 0.0 {
            self.end_slide(speed, body, collider);
        }
    }

    /// Natural end: keep heading the way the body is moving, at walking speed.
    fn end_slide(
        &mut self,
        speed: f32,
        body: &mut impl PhysicsBody,
        collider: &mut impl ColliderShape,
    ) {
        self.state = LocomotionState::Normal;
        self.collider.restore(collider);
        self.recovery_timer = self.config.recovery_duration;

        let velocity = body.velocity();
        let dir = horizontal(velocity)
            .try_normalize()
            .unwrap_or(self.slide_direction);
        let forward = dir * self.config.move_speed;
        body.set_velocity(Vec3::new(forward.x, velocity.y, forward.z));
        debug!(
            "Slide -> Normal (ended, speed {:.2}, {:.2}s left)",
            speed, self.slide_timer
        );
        self.slide_timer = 0.0;
    }

    /// Cancel: fall back to the last grounded momentum.
    fn cancel_slide(&mut self, body: &mut impl PhysicsBody, collider: &mut impl ColliderShape) {
        self.state = LocomotionState::Normal;
        self.collider.restore(collider);
        self.recovery_timer = self.config.recovery_duration;
        self.just_cancelled_action = true;

        let vertical = body.velocity().y;
        body.set_velocity(Vec3::new(
            self.air_momentum.x,
            vertical,
            self.air_momentum.z,
        ));
        debug!("Slide -> Normal (cancelled, {:.2}s left)", self.slide_timer);
        self.slide_timer = 0.0;
    }

    fn enter_crouch(&mut self, body: &mut impl PhysicsBody, collider: &mut impl ColliderShape) {
        self.state = LocomotionState::Crouch;
        self.collider.lower(collider, &self.config);
        let velocity = body.velocity();
        body.set_velocity(Vec3::new(0.0, velocity.y, 0.0));
        debug!("Normal -> Crouch");
    }

    fn exit_crouch(&mut self, collider: &mut impl ColliderShape) {
        self.state = LocomotionState::Normal;
        self.collider.restore(collider);
        debug!("Crouch -> Normal");
    }

    fn enter_dropshot(
        &mut self,
        input: &LocomotionInput,
        body: &mut impl PhysicsBody,
        collider: &mut impl ColliderShape,
    ) {
        self.state = LocomotionState::Dropshot;
        self.collider.lower(collider, &self.config);

        let dir = input.direction_or_facing();
        let forward = dir * self.config.move_speed * self.config.dropshot_forward_multiplier;
        body.set_velocity(forward + Vec3::Y * self.config.dropshot_up_impulse);
        debug!("Normal -> Dropshot toward {:?}", dir);
    }

    fn cancel_dropshot(&mut self, collider: &mut impl ColliderShape) {
        self.state = LocomotionState::Normal;
        self.collider.restore(collider);
        self.just_cancelled_action = true;
        debug!("Dropshot -> Normal (cancelled)");
    }

    fn jump(&mut self, input: &LocomotionInput, body: &mut impl PhysicsBody) {
        let dir = input.world_direction();
        if dir == Vec3::ZERO {
            self.air_momentum = Vec3::ZERO;
            self.awaiting_air_direction = true;
            self.air_direction_locked = false;
        } else {
            self.lock_air_direction(dir);
        }

        body.set_velocity(self.air_momentum + Vec3::Y * self.config.jump_force);
        debug!(
            "jump (momentum {:?}, awaiting direction: {})",
            self.air_momentum, self.awaiting_air_direction
        );
    }

    fn lock_air_direction(&mut self, dir: Vec3) {
        self.air_momentum = dir * self.config.move_speed;
        self.air_direction_locked = true;
        self.awaiting_air_direction = false;
    }
}
