use bevy::prelude::*;
use bevy::window::{PrimaryWindow, CursorGrabMode};
use crate::components::{PauseMenu, ResumeButton, ExitButton};
use crate::resources::GameState;

pub fn update_pause_menu_visibility(
    game_state: Res<GameState>,
    mut menu_query: Query<&mut Visibility, With<PauseMenu>>,
) {
    if !game_state.is_changed() {
        return;
    }

    for mut visibility in menu_query.iter_mut() {
        *visibility = if game_state.paused {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}

pub fn handle_pause_menu_buttons(
    mut interaction_query: Query<
        (&Interaction, &mut BackgroundColor, Option<&ResumeButton>, Option<&ExitButton>),
        Changed<Interaction>,
    >,
    mut game_state: ResMut<GameState>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
    mut app_exit_events: EventWriter<AppExit>,
) {
    for (interaction, mut color, resume_button, exit_button) in interaction_query.iter_mut() {
        match *interaction {
            Interaction::Pressed => {
                if resume_button.is_some() {
                    game_state.paused = false;
                    if let Ok(mut window) = windows.get_single_mut() {
                        window.cursor_options.grab_mode = CursorGrabMode::Locked;
                        window.cursor_options.visible = false;
                    }
                    info!("Game resumed");
                } else if exit_button.is_some() {
                    app_exit_events.send(AppExit::Success);
                }
            }
            Interaction::Hovered => {
                *color = BackgroundColor(Color::srgb(0.25, 0.25, 0.25));
            }
            Interaction::None => {
                *color = BackgroundColor(Color::srgb(0.15, 0.15, 0.15));
            }
        }
    }
}
