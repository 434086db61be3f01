//! Legality adjudication for hypothetical placements.
//!
//! The adjudicator is a pure classification function: it never mutates
//! the state it is given and never raises. The fast path answers from
//! the current analysis alone and tolerates a one-position superko
//! window; the slow path materializes the placement and compares the
//! resulting snapshot against the recorded history.

use crate::{
    goban::state::BoardState,
    types::{Color, Coord, Validity},
};

/// Classify the placement of `player`'s stone at `(x, y)`.
///
/// Checks run in a fixed order: game over, turn, offline point, point
/// occupancy, then suicide/superko via the fast or slow path.
pub fn evaluate_move_validity(
    state: &BoardState,
    x: usize,
    y: usize,
    player: Color,
    fast: bool,
) -> Validity {
    if state.previous_player.is_none() {
        return Validity::GameOver;
    }
    if state.previous_player == Some(player) {
        return Validity::NotYourTurn;
    }
    if !state.board.in_bounds(x, y) {
        return Validity::Invalid;
    }
    let Some(point) = state.board.point(x, y) else {
        return Validity::PointBroken;
    };
    if point.color != Color::Empty {
        return Validity::PointNotEmpty;
    }

    if fast && let Some(verdict) = fast_path(state, x, y, player) {
        return verdict;
    }
    slow_path(state, x, y, player)
}

/// Every empty point where the fast-path adjudicator answers `valid`,
/// in column-major order.
pub fn all_valid_moves(state: &BoardState, player: Color) -> Vec<Coord> {
    state
        .board
        .coords()
        .filter(|&(x, y)| {
            state
                .board
                .point(x, y)
                .is_some_and(|point| point.color == Color::Empty)
        })
        .filter(|&(x, y)| evaluate_move_validity(state, x, y, player, true).is_valid())
        .collect()
}

/// Conclusive fast-path verdict, or `None` when the slow path must run.
fn fast_path(state: &BoardState, x: usize, y: usize, player: Color) -> Option<Validity> {
    let board = &state.board;
    // A prior position with our stone on this point means the placement
    // could recreate it; only the slow path can say for sure.
    let repeat_risk = state
        .previous_boards
        .iter()
        .any(|rows| stone_at(rows, x, y) == Some(player));

    let has_direct_liberty = !board.empty_neighbors(x, y).is_empty();
    if has_direct_liberty && !repeat_risk {
        return Some(Validity::Valid);
    }

    let mut friendly_safe = false;
    let mut capture_ready = false;
    for neighbor in board.neighbor_points(x, y) {
        if neighbor.color == player && neighbor.liberty_count() > 1 {
            friendly_safe = true;
        }
        if neighbor.color == player.opponent() && neighbor.liberty_count() <= 1 {
            capture_ready = true;
        }
    }
    if friendly_safe && !repeat_risk {
        return Some(Validity::Valid);
    }
    if capture_ready && !repeat_risk {
        return Some(Validity::Valid);
    }
    if !has_direct_liberty && !friendly_safe && !capture_ready {
        return Some(Validity::NoSuicide);
    }
    None
}

fn slow_path(state: &BoardState, x: usize, y: usize, player: Color) -> Validity {
    let evaluation = state.board.evaluate_move_result(x, y, player);
    // Capture resolution removed the placed stone: suicide.
    let survived = evaluation
        .point(x, y)
        .is_some_and(|point| point.color == player);
    if !survived {
        return Validity::NoSuicide;
    }

    let snapshot = evaluation.to_simple();
    if state.previous_boards.iter().any(|rows| *rows == snapshot) {
        return Validity::BoardRepeated;
    }
    Validity::Valid
}

fn stone_at(rows: &[String], x: usize, y: usize) -> Option<Color> {
    rows.get(x)?.chars().nth(y).and_then(Color::from_char)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Opponent;

    fn rows(rows: &[&str]) -> Vec<String> {
        rows.iter().map(|row| row.to_string()).collect()
    }

    fn state(rows_in: &[&str]) -> BoardState {
        BoardState::from_simple(&rows(rows_in), Opponent::Illuminati).unwrap()
    }

    #[test]
    fn checks_run_in_order() {
        let over = state(&["..", ".."]).with_previous_player(None);
        assert_eq!(
            evaluate_move_validity(&over, 0, 0, Color::Black, true),
            Validity::GameOver
        );

        let not_your_turn = state(&["..", ".."]).with_previous_player(Some(Color::Black));
        assert_eq!(
            evaluate_move_validity(&not_your_turn, 0, 0, Color::Black, true),
            Validity::NotYourTurn
        );

        let broken = state(&["#.", ".."]);
        assert_eq!(
            evaluate_move_validity(&broken, 0, 0, Color::Black, true),
            Validity::PointBroken
        );

        let occupied = state(&["O.", ".."]);
        assert_eq!(
            evaluate_move_validity(&occupied, 0, 0, Color::Black, true),
            Validity::PointNotEmpty
        );

        let out_of_range = state(&["..", ".."]);
        assert_eq!(
            evaluate_move_validity(&out_of_range, 5, 0, Color::Black, true),
            Validity::Invalid
        );
    }

    #[test]
    fn open_point_is_valid_on_the_fast_path() {
        let fresh = state(&[".....", ".....", ".....", ".....", "....."]);
        assert_eq!(
            evaluate_move_validity(&fresh, 2, 2, Color::Black, true),
            Validity::Valid
        );
    }

    #[test]
    fn surrounded_point_with_no_rescue_is_suicide() {
        // (0, 0) is walled in by White stones that keep outside liberties.
        let walled = state(&[".O...", "O....", ".....", ".....", "....."]);
        assert_eq!(
            evaluate_move_validity(&walled, 0, 0, Color::Black, true),
            Validity::NoSuicide
        );
        // The slow path agrees.
        assert_eq!(
            evaluate_move_validity(&walled, 0, 0, Color::Black, false),
            Validity::NoSuicide
        );
    }

    #[test]
    fn capture_rescues_an_otherwise_suicidal_point() {
        // White at (0, 1) is in atari; Black taking (0, 0) captures it
        // even though the point itself has no direct liberty.
        let atari = state(&[".OX..", "OX...", ".....", ".....", "....."]);
        assert_eq!(
            evaluate_move_validity(&atari, 0, 0, Color::Black, true),
            Validity::Valid
        );
    }

    #[test]
    fn repeated_position_is_blocked_by_the_slow_path() {
        let fresh = state(&[".....", ".....", ".....", ".....", "....."]);
        let replayed = fresh.board.evaluate_move_result(2, 2, Color::Black);
        let blocked = fresh.with_previous_boards(vec![replayed.to_simple()]);
        assert_eq!(
            evaluate_move_validity(&blocked, 2, 2, Color::Black, false),
            Validity::BoardRepeated
        );
    }

    #[test]
    fn adjudication_is_pure() {
        let fresh = state(&[".....", ".....", ".....", ".....", "....."]);
        let snapshot = fresh.clone();
        let first = evaluate_move_validity(&fresh, 2, 2, Color::Black, false);
        let second = evaluate_move_validity(&fresh, 2, 2, Color::Black, false);
        assert_eq!(first, second);
        assert_eq!(fresh, snapshot, "adjudication must not mutate the state");
    }

    #[test]
    fn all_valid_moves_excludes_occupied_and_broken_points() {
        let mixed = state(&["X#.", "...", "..O"]);
        let moves = all_valid_moves(&mixed, Color::Black);
        assert!(!moves.contains(&(0, 0)));
        assert!(!moves.contains(&(0, 1)));
        assert!(!moves.contains(&(2, 2)));
        assert_eq!(moves.len(), 6);
    }
}
