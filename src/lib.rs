//! Tactical first-person locomotion: walk, crouch, slide, dropshot and
//! energy-limited sprint, plus a small Bevy arena to drive it.
//!
//! The [`locomotion`] module is the engine-agnostic core. Everything else is
//! the Bevy host that feeds it input and applies its output.

pub mod components;
pub mod locomotion;
mod plugin;
pub mod resources;
pub mod systems;
pub mod ui;
pub mod world;

pub use plugin::{LocomotionPlugin, DEFAULT_CONFIG_PATH};
