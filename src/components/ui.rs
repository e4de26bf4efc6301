use bevy::prelude::*;

#[derive(Component)]
pub struct DebugOverlay {
    pub visible: bool,
}

#[derive(Component)]
pub struct Crosshair;

#[derive(Component)]
pub struct PauseMenu;

#[derive(Component)]
pub struct ResumeButton;

#[derive(Component)]
pub struct ExitButton;

/// Container for the sprint energy bar
#[derive(Component)]
pub struct SprintBar;

/// Fill node of the sprint energy bar; its width tracks remaining energy
#[derive(Component)]
pub struct SprintBarFill;

/// Key bindings hint in the bottom-left corner
#[derive(Component)]
pub struct ControlsHint;
