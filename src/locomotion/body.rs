//! Capabilities the locomotion core needs from the physics engine and scene.

use bevy::prelude::*;

/// Linear velocity of the simulated body.
///
/// Writes take effect at the next fixed physics step.
pub trait PhysicsBody {
    fn velocity(&self) -> Vec3;
    fn set_velocity(&mut self, velocity: Vec3);
}

/// The character's collision shape. Only height and center are ever touched.
pub trait ColliderShape {
    fn height(&self) -> f32;
    fn set_height(&mut self, height: f32);
    fn center(&self) -> Vec3;
    fn set_center(&mut self, center: Vec3);
}

/// Local position of the transform the camera hangs from.
pub trait CameraHolder {
    fn local_position(&self) -> Vec3;
    fn set_local_position(&mut self, position: Vec3);
}

impl CameraHolder for Transform {
    fn local_position(&self) -> Vec3 {
        self.translation
    }

    fn set_local_position(&mut self, position: Vec3) {
        self.translation = position;
    }
}

/// Drop the vertical component of a vector.
#[inline]
pub fn horizontal(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}
