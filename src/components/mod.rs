mod player;
mod ui;

pub use player::{CameraRig, CapsuleShape, KinematicBody, Player};
pub use ui::{ControlsHint, Crosshair, DebugOverlay, ExitButton, PauseMenu, ResumeButton, SprintBar, SprintBarFill};
