mod setup;

pub use setup::{setup_hud, setup_pause_menu, setup_sprint_bar};
