//! Decision core of a computer Go opponent for small boards
//!
//! This crate provides:
//! - Board model with chain and liberty recomputation, capture
//!   resolution, and a textual SimpleBoard codec
//! - Legality adjudication under suicide, turn, and superko rules
//! - Eye detection, living-group confirmation, and disputed-territory
//!   extraction
//! - A family of candidate-move generators plus a 3x3 pattern matcher
//! - Persona-driven move selection behind a single `get_move` entry

pub mod analysis;
pub mod engine;
pub mod error;
pub mod goban;
pub mod ports;
pub mod rules;
pub mod types;

pub use analysis::{EyeReport, PotentialEye, find_disputed_territory};
pub use engine::{GoEngine, GoEngineBuilder, MoveCandidate, get_move};
pub use error::{Error, Result};
pub use goban::{Board, BoardState, Chain, Point};
pub use ports::{NoopPacer, Pacer};
pub use rules::{all_valid_moves, evaluate_move_validity};
pub use types::{ChainId, Color, Coord, Opponent, Play, Validity};
