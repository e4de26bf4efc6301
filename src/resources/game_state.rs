use bevy::prelude::*;

#[derive(Resource)]
pub struct GameState {
    pub paused: bool,
    pub ui_visible: bool,
    /// Sprint whenever moving without holding the sprint key
    pub auto_sprint: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            paused: false,
            ui_visible: true,
            auto_sprint: false,
        }
    }
}
