//! In-memory stand-ins for the physics and scene capabilities.

use bevy::prelude::*;

use super::body::{CameraHolder, ColliderShape, PhysicsBody};
use super::config::LocomotionConfig;
use super::input::LocomotionInput;
use super::sensor::GroundSensor;
use super::state::LocomotionContext;

#[derive(Debug, Default)]
pub struct FakeBody {
    pub velocity: Vec3,
}

impl PhysicsBody for FakeBody {
    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }
}

#[derive(Debug)]
pub struct FakeCollider {
    pub height: f32,
    pub center: Vec3,
}

impl FakeCollider {
    pub fn standing() -> Self {
        Self {
            height: 2.0,
            center: Vec3::ZERO,
        }
    }
}

impl ColliderShape for FakeCollider {
    fn height(&self) -> f32 {
        self.height
    }

    fn set_height(&mut self, height: f32) {
        self.height = height;
    }

    fn center(&self) -> Vec3 {
        self.center
    }

    fn set_center(&mut self, center: Vec3) {
        self.center = center;
    }
}

#[derive(Debug)]
pub struct FakeHolder(pub Vec3);

impl CameraHolder for FakeHolder {
    fn local_position(&self) -> Vec3 {
        self.0
    }

    fn set_local_position(&mut self, position: Vec3) {
        self.0 = position;
    }
}

pub struct FixedGround(pub bool);

impl GroundSensor for FixedGround {
    fn is_grounded(&self) -> bool {
        self.0
    }
}

/// A context plus fake collaborators, stepped like the host would.
pub struct Rig {
    pub ctx: LocomotionContext,
    pub body: FakeBody,
    pub collider: FakeCollider,
    pub holder: FakeHolder,
    pub grounded: bool,
}

impl Rig {
    pub fn new(config: LocomotionConfig) -> Self {
        let collider = FakeCollider::standing();
        let holder = FakeHolder(Vec3::new(0.0, 0.6, 0.0));
        Self {
            ctx: LocomotionContext::new(config, &collider, &holder),
            body: FakeBody::default(),
            collider,
            holder,
            grounded: true,
        }
    }

    /// One logic frame.
    pub fn advance(&mut self, dt: f32, input: &LocomotionInput) {
        let ground = FixedGround(self.grounded);
        self.ctx
            .advance(dt, input, &ground, &mut self.body, &mut self.collider);
    }

    /// One fixed physics step (velocity only, no integration).
    pub fn resolve(&mut self, input: &LocomotionInput) {
        self.ctx.resolve_velocity(input, self.grounded, &mut self.body);
    }

    /// Logic frame followed by a physics step, as the host runs them.
    pub fn frame(&mut self, dt: f32, input: &LocomotionInput) {
        self.advance(dt, input);
        self.resolve(input);
    }
}

pub fn forward() -> LocomotionInput {
    LocomotionInput::moving(Vec2::new(0.0, 1.0))
}

pub fn sprinting_forward() -> LocomotionInput {
    LocomotionInput {
        sprint_held: true,
        ..forward()
    }
}
