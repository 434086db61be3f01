//! Board model and chain engine.

pub mod board;
pub mod chains;
pub mod state;

pub use board::{Board, MAX_BOARD_SIZE, MIN_BOARD_SIZE, Point};
pub use chains::Chain;
pub use state::BoardState;
