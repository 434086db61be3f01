//! Error types for the decision core

use thiserror::Error;

use crate::types::{Color, Validity};

/// Main error type for the crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("board is not square: column {column} holds {got} cells, expected {expected}")]
    BoardNotSquare {
        column: usize,
        got: usize,
        expected: usize,
    },

    #[error("board size {size} is out of range ({}..={})", crate::goban::MIN_BOARD_SIZE, crate::goban::MAX_BOARD_SIZE)]
    BoardSizeOutOfRange { size: usize },

    #[error("unknown opponent '{name}'")]
    UnknownOpponent { name: String },

    #[error("illegal play at ({x}, {y}) for {player}: {verdict}")]
    IllegalPlay {
        x: usize,
        y: usize,
        player: Color,
        verdict: Validity,
    },

    #[error("cannot apply a stone placement for {player}: placements need a Black or White mover")]
    PlacementNeedsPlayer { player: Color },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
