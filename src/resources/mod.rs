mod game_state;

pub use game_state::GameState;
pub use crate::world::ArenaWorld;
