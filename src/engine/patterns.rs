//! 3x3 local-pattern matcher.
//!
//! A small fixed catalog of shapes (hane, cuts, side blocks) is
//! expanded under the full dihedral group once, on first use. Matching
//! treats off-board and offline cells alike, and the smart filter drops
//! matches that would leave the placed stone short of breath.

use std::sync::OnceLock;

use rand::{Rng, seq::IndexedRandom};

use crate::{
    goban::board::Board,
    ports::Pacer,
    types::{Color, Coord},
};

use super::{generators, options::MoveCandidate};

/// Pattern grammar: `X` player stone, `O` opponent stone, `x` anything
/// but an opponent stone, `o` anything but a player stone, `.` empty,
/// space off-board, `?` anything. The move point is the center.
const BASE_PATTERNS: [[&str; 3]; 13] = [
    // hane: enclosing
    ["XOX", "...", "???"],
    // hane: non-cutting
    ["XO.", "...", "?.?"],
    // hane: magari
    ["XO?", "X..", "o.?"],
    // diagonal attachment
    [".O.", "X..", "..."],
    // unprotected cut
    ["XO?", "O.x", "?x?"],
    // peeped cut
    ["XO?", "O.X", "???"],
    // wedge
    ["?X?", "O.O", "xxx"],
    // cut against the keima
    ["OX?", "x.O", "???"],
    // side: chase
    ["X.?", "O.?", "   "],
    // side: block the cut
    ["OX?", "X.O", "   "],
    // side: block the connection
    ["?X?", "o.O", "   "],
    // side: sagari
    ["?XO", "o.o", "   "],
    // side: cut
    ["?OX", "X.O", "   "],
];

/// One expanded stencil; `cells[i][j]` covers the point offset by
/// `(i - 1, j - 1)` from the move point.
type Stencil = [[u8; 3]; 3];

fn stencil_of(rows: &[&str; 3]) -> Stencil {
    let mut out = [[b'?'; 3]; 3];
    for (i, row) in rows.iter().enumerate() {
        for (j, byte) in row.bytes().enumerate() {
            out[i][j] = byte;
        }
    }
    out
}

fn rotate_quarter(stencil: &Stencil) -> Stencil {
    let mut out = [[b'?'; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            out[j][2 - i] = stencil[i][j];
        }
    }
    out
}

fn mirror_vertical(stencil: &Stencil) -> Stencil {
    [stencil[2], stencil[1], stencil[0]]
}

fn mirror_horizontal(stencil: &Stencil) -> Stencil {
    let mut out = *stencil;
    for row in &mut out {
        row.reverse();
    }
    out
}

/// The catalog expanded by rotations and both mirrors, deduplicated.
fn expanded_patterns() -> &'static [Stencil] {
    static PATTERNS: OnceLock<Vec<Stencil>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        let mut out: Vec<Stencil> = Vec::new();
        for base in &BASE_PATTERNS {
            let mut forms = Vec::with_capacity(16);
            let mut turned = stencil_of(base);
            for _ in 0..4 {
                forms.push(turned);
                turned = rotate_quarter(&turned);
            }
            for index in 0..forms.len() {
                forms.push(mirror_vertical(&forms[index]));
            }
            for index in 0..forms.len() {
                forms.push(mirror_horizontal(&forms[index]));
            }
            for form in forms {
                if !out.contains(&form) {
                    out.push(form);
                }
            }
        }
        out
    })
}

fn matches_at(board: &Board, stencil: &Stencil, x: usize, y: usize, player: Color) -> bool {
    let opponent = player.opponent();
    for i in 0..3 {
        for j in 0..3 {
            let cell = x
                .checked_add_signed(i as isize - 1)
                .zip(y.checked_add_signed(j as isize - 1))
                .and_then(|(nx, ny)| board.point(nx, ny));
            let ok = match stencil[i][j] {
                b'X' => cell.is_some_and(|point| point.color == player),
                b'O' => cell.is_some_and(|point| point.color == opponent),
                b'x' => !cell.is_some_and(|point| point.color == opponent),
                b'o' => !cell.is_some_and(|point| point.color == player),
                b'.' => cell.is_some_and(|point| point.color == Color::Empty),
                b' ' => cell.is_none(),
                b'?' => true,
                _ => false,
            };
            if !ok {
                return false;
            }
        }
    }
    true
}

/// Every available point whose neighborhood matches some catalog shape.
/// The scan pauses once per column for the host; the smart filter
/// requires the placement to keep more than one effective liberty.
pub fn pattern_matches(
    board: &Board,
    player: Color,
    available: &[Coord],
    smart: bool,
    pacer: &mut dyn Pacer,
) -> Vec<Coord> {
    let available: std::collections::HashSet<Coord> = available.iter().copied().collect();
    let mut out = Vec::new();
    for x in 0..board.size() {
        pacer.pause();
        for y in 0..board.size() {
            if !available.contains(&(x, y)) || board.point(x, y).is_none() {
                continue;
            }
            if !expanded_patterns()
                .iter()
                .any(|stencil| matches_at(board, stencil, x, y, player))
            {
                continue;
            }
            if smart && generators::hypothetical_liberties(board, x, y, player).len() <= 1 {
                continue;
            }
            out.push((x, y));
        }
    }
    out
}

/// Uniform choice among the pattern matches.
pub fn pattern_move<R: Rng>(
    board: &Board,
    player: Color,
    available: &[Coord],
    smart: bool,
    rng: &mut R,
    pacer: &mut dyn Pacer,
) -> Option<MoveCandidate> {
    let matches = pattern_matches(board, player, available, smart, pacer);
    matches
        .choose(rng)
        .map(|&(x, y)| MoveCandidate::bare(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::NoopPacer;

    fn board(rows: &[&str]) -> Board {
        let rows: Vec<String> = rows.iter().map(|row| row.to_string()).collect();
        let mut board = Board::from_simple(&rows).unwrap();
        board.update_chains(true);
        board
    }

    fn all_empty(board: &Board) -> Vec<Coord> {
        board
            .coords()
            .filter(|&(x, y)| {
                board
                    .point(x, y)
                    .is_some_and(|point| point.color == Color::Empty)
            })
            .collect()
    }

    #[test]
    fn expansion_is_the_dihedral_closure() {
        let patterns = expanded_patterns();
        assert!(
            patterns.len() <= 13 * 8,
            "dedup must cap the catalog at 104, got {}",
            patterns.len()
        );
        // Closed under rotation and both mirrors.
        for stencil in patterns {
            assert!(patterns.contains(&rotate_quarter(stencil)));
            assert!(patterns.contains(&mirror_vertical(stencil)));
            assert!(patterns.contains(&mirror_horizontal(stencil)));
        }
    }

    #[test]
    fn rotation_has_order_four() {
        let stencil = stencil_of(&["XO?", "X..", "o.?"]);
        let mut turned = stencil;
        for _ in 0..4 {
            turned = rotate_quarter(&turned);
        }
        assert_eq!(turned, stencil);
    }

    #[test]
    fn verdicts_are_symmetric_under_rotation() {
        // A hane-ish cluster; rotating the whole position by 90 degrees
        // must preserve every match verdict.
        let original = board(&[".....", ".XO..", "..X..", ".....", "....."]);
        let size = original.size();
        let rotated = {
            let simple = original.to_simple();
            // (x, y) -> (y, size-1-x): rebuild columns accordingly.
            let mut columns = vec![String::new(); size];
            for (nx, column) in columns.iter_mut().enumerate() {
                for ny in 0..size {
                    // Inverse map back into the original grid.
                    let ox = size - 1 - ny;
                    let oy = nx;
                    column.push(simple[ox].as_bytes()[oy] as char);
                }
            }
            let mut board = Board::from_simple(&columns).unwrap();
            board.update_chains(true);
            board
        };

        let mut pacer = NoopPacer;
        let matches = pattern_matches(&original, Color::Black, &all_empty(&original), false, &mut pacer);
        let rotated_matches =
            pattern_matches(&rotated, Color::Black, &all_empty(&rotated), false, &mut pacer);
        let mapped: std::collections::HashSet<Coord> = matches
            .iter()
            .map(|&(x, y)| (y, size - 1 - x))
            .collect();
        let rotated_set: std::collections::HashSet<Coord> = rotated_matches.into_iter().collect();
        assert_eq!(mapped, rotated_set);
    }

    #[test]
    fn smart_filter_drops_breathless_matches() {
        let mut pacer = NoopPacer;
        let position = board(&[".....", ".XO..", "..X..", ".....", "....."]);
        let loose = pattern_matches(&position, Color::Black, &all_empty(&position), false, &mut pacer);
        let strict = pattern_matches(&position, Color::Black, &all_empty(&position), true, &mut pacer);
        assert!(strict.len() <= loose.len());
        for coord in &strict {
            assert!(loose.contains(coord));
        }
    }

    #[test]
    fn matcher_pauses_once_per_column() {
        let mut pacer = crate::ports::CountingPacer::default();
        let position = board(&[".....", ".....", ".....", ".....", "....."]);
        pattern_matches(&position, Color::Black, &[], false, &mut pacer);
        assert_eq!(pacer.pauses, 5);
    }
}
