use bevy::prelude::*;

use crate::locomotion::{ColliderShape, PhysicsBody};

/// Marker for the controllable character's root entity
#[derive(Component)]
pub struct Player;

/// Marker for the child entity the first-person camera hangs from.
/// Its local translation is animated by the locomotion camera offset.
#[derive(Component)]
pub struct CameraRig;

/// Velocity integrated by the kinematic physics step
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct KinematicBody {
    pub velocity: Vec3,
    /// Set by the physics step after vertical collision resolution
    pub on_floor: bool,
}

impl PhysicsBody for KinematicBody {
    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }
}

/// Upright collision volume, treated as a box of `radius` half-width
/// for collision against the arena.
#[derive(Component, Debug, Clone, Copy)]
pub struct CapsuleShape {
    pub radius: f32,
    pub height: f32,
    /// Offset of the shape's center from the entity origin
    pub center: Vec3,
}

impl CapsuleShape {
    pub fn new(radius: f32, height: f32) -> Self {
        Self {
            radius,
            height,
            center: Vec3::ZERO,
        }
    }

    /// World-space bounds when the entity sits at `origin`
    pub fn bounds(&self, origin: Vec3) -> (Vec3, Vec3) {
        let half = Vec3::new(self.radius, self.height * 0.5, self.radius);
        let center = origin + self.center;
        (center - half, center + half)
    }
}

impl ColliderShape for CapsuleShape {
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
