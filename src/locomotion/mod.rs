//! First-person locomotion core.
//!
//! Everything in here is engine-agnostic apart from Bevy's math types: the
//! state machine talks to the physics world only through the small traits in
//! [`body`] and [`sensor`], and all timing comes in as explicit `delta_time`
//! arguments.
//!
//! Per frame the host calls, in order:
//!
//! 1. [`LocomotionContext::advance`] with the sampled [`LocomotionInput`]
//! 2. [`LocomotionContext::animate_camera`] for the camera holder offset
//!
//! and on every fixed physics step:
//!
//! 3. [`LocomotionContext::resolve_velocity`] before integrating the body.

pub mod body;
pub mod camera;
pub mod config;
pub mod energy;
pub mod input;
mod machine;
pub mod sensor;
pub mod state;
mod velocity;

#[cfg(test)]
mod scenarios;
#[cfg(test)]
pub(crate) mod testing;

pub use body::{horizontal, CameraHolder, ColliderShape, PhysicsBody};
pub use camera::{CameraOffsetAnimator, LookAngles};
pub use config::{ConfigError, LocomotionConfig};
pub use energy::{SprintEnergy, SprintEvent};
pub use input::LocomotionInput;
pub use sensor::{GroundSensor, ProbeGroundSensor, SpatialProbe};
pub use state::{ColliderSnapshot, LocomotionContext, LocomotionState};

/// Horizontal input magnitude above which the character counts as moving.
pub const MOVE_INPUT_THRESHOLD: f32 = 0.1;

/// A slide ends on its own once horizontal speed decays to this (units/second).
pub const SLIDE_MIN_SPEED: f32 = 1.0;
