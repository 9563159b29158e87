//! The root state machine: sides, results, armies, moves, and game state.

pub mod army;
pub mod moves;
pub mod result;
pub mod side;
pub mod state;

pub use army::Army;
pub use moves::Move;
pub use result::GameResult;
pub use side::PlayingSide;
pub use state::{GameState, Tile};
