mod camera;
mod debug_overlay;
mod input;
mod locomotion;
mod physics;
mod player;
mod ui;
mod ui_visibility;

pub use camera::{handle_window_focus, mouse_look, setup_cursor_grab};
pub use debug_overlay::update_debug_overlay;
pub use input::{
    clear_locomotion_input, sample_locomotion_input, toggle_auto_sprint, toggle_debug_overlay,
    toggle_pause_menu, toggle_ui_visibility,
};
pub use locomotion::{advance_locomotion, animate_camera_offset, resolve_locomotion_velocity};
pub use physics::integrate_bodies;
pub use player::spawn_player;
pub use ui::{handle_pause_menu_buttons, update_pause_menu_visibility};
pub use ui_visibility::{
    update_crosshair_visibility, update_debug_visibility, update_debug_visibility_on_ui_toggle,
    update_hud_visibility, update_sprint_bar,
};
