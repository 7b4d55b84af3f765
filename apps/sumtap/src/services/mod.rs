pub mod clock;
pub mod game_flow;
pub mod game_loop;

pub use clock::{ClockTick, RoundClock};
pub use game_flow::{GameFlow, RoundView};
pub use game_loop::{run_game, GameEvent, InputEvent, PlayerCommand, Presenter};
