pub mod game;

pub use game::{ConfigOverrides, GameConfig};
