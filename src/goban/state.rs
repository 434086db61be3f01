//! Decision-time snapshot of a game in progress.

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    goban::board::Board,
    rules,
    types::{Color, Opponent, Play, Validity},
};

/// Everything the decision core needs to know about one position.
///
/// The snapshot is immutable by convention: the core analyzes the board
/// once at construction and thereafter only clones it for hypothetical
/// placements. Superko history is owned by the host; the core reads
/// `previous_boards` but never extends it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    pub board: Board,
    /// Side that moved last. `Some(Color::Empty)` lets either side play
    /// next; `None` marks a finished game.
    pub previous_player: Option<Color>,
    /// Textual snapshots of earlier positions, consulted for superko.
    pub previous_boards: Vec<Vec<String>>,
    pub opponent: Opponent,
    /// Consecutive passes leading up to this position.
    pub passes: u32,
    /// Host bookkeeping (cheat counters); carried through, never read.
    pub cheat_counts: [u32; 2],
}

impl BoardState {
    /// Wrap a board, installing chain ids and liberties exactly once.
    /// Either side may move first on a fresh state.
    pub fn new(board: Board, opponent: Opponent) -> BoardState {
        let mut board = board;
        board.update_chains(true);
        BoardState {
            board,
            previous_player: Some(Color::Empty),
            previous_boards: Vec::new(),
            opponent,
            passes: 0,
            cheat_counts: [0, 0],
        }
    }

    /// Decode a SimpleBoard and wrap it.
    ///
    /// # Errors
    ///
    /// Returns an error when the grid is not square or its size falls
    /// outside the supported range.
    pub fn from_simple(rows: &[String], opponent: Opponent) -> Result<BoardState> {
        Ok(BoardState::new(Board::from_simple(rows)?, opponent))
    }

    pub fn with_previous_player(mut self, previous: Option<Color>) -> BoardState {
        self.previous_player = previous;
        self
    }

    pub fn with_previous_boards(mut self, snapshots: Vec<Vec<String>>) -> BoardState {
        self.previous_boards = snapshots;
        self
    }

    pub fn with_passes(mut self, passes: u32) -> BoardState {
        self.passes = passes;
        self
    }

    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        self.previous_player.is_none()
    }

    /// Host-side convenience: the successor state after `player` makes
    /// `play`. Placements are fully adjudicated (slow path) and the
    /// predecessor snapshot is appended to the superko history.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalPlay`] when the placement is not valid,
    /// or [`Error::PlacementNeedsPlayer`] when `player` is not a side.
    pub fn apply_play(&self, player: Color, play: Play) -> Result<BoardState> {
        match play {
            Play::GameOver => {
                let mut next = self.clone();
                next.previous_player = None;
                Ok(next)
            }
            Play::Pass => {
                let mut next = self.clone();
                next.passes += 1;
                // Two passes in a row close the game.
                next.previous_player = if next.passes >= 2 { None } else { Some(player) };
                Ok(next)
            }
            Play::Move { x, y } => {
                if player == Color::Empty {
                    return Err(Error::PlacementNeedsPlayer { player });
                }
                let verdict = rules::evaluate_move_validity(self, x, y, player, false);
                if verdict != Validity::Valid {
                    return Err(Error::IllegalPlay {
                        x,
                        y,
                        player,
                        verdict,
                    });
                }
                let mut next = self.clone();
                next.previous_boards.push(self.board.to_simple());
                next.board = self.board.evaluate_move_result(x, y, player);
                next.previous_player = Some(player);
                next.passes = 0;
                Ok(next)
            }
        }
    }
}
