mod arena;

pub use arena::{setup_arena, ArenaWorld, SolidBox};
