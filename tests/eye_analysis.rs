//! Test suite for eye detection and disputed-territory extraction

use tengen::{Board, BoardState, Color, EyeReport, Opponent, find_disputed_territory};

fn rows(rows: &[&str]) -> Vec<String> {
    rows.iter().map(|row| row.to_string()).collect()
}

fn analyzed(rows_in: &[&str]) -> Board {
    let mut board = Board::from_simple(&rows(rows_in)).unwrap();
    board.update_chains(true);
    board
}

/// Two independent living groups splitting the whole board between
/// them: Black holds the left edge eyes, White the right edge eyes.
const PARTITIONED: &[&str] = &[".X.X.", "XXXXX", "XXXXX", "OOOOO", ".O.O."];

mod living_groups {
    use super::*;

    #[test]
    fn both_sides_read_as_alive() {
        let board = analyzed(PARTITIONED);
        let black = EyeReport::for_player(&board, Color::Black);
        let white = EyeReport::for_player(&board, Color::White);
        assert_eq!(black.living_chain_count(), 1);
        assert_eq!(white.living_chain_count(), 1);
        assert_eq!(black.eye_count(), 3, "three one-point eyes on the left");
        assert_eq!(white.eye_count(), 3, "three one-point eyes on the right");
    }

    #[test]
    fn eye_interiors_are_attributed_to_the_owner() {
        let board = analyzed(PARTITIONED);
        let black = EyeReport::for_player(&board, Color::Black).living_eye_points();
        assert!(black.contains(&(0, 0)));
        assert!(black.contains(&(0, 2)));
        assert!(black.contains(&(0, 4)));
        assert!(!black.contains(&(4, 0)), "White's eyes are not Black's");
    }

    #[test]
    fn a_single_eye_is_not_life() {
        let board = analyzed(&["XXX..", "X.X..", "XXX..", ".....", "....O"]);
        let report = EyeReport::for_player(&board, Color::Black);
        assert_eq!(report.eye_count(), 1);
        assert_eq!(report.living_chain_count(), 0);
        assert!(report.living_eye_points().is_empty());
    }
}

mod disputed_territory {
    use super::*;

    #[test]
    fn settled_endgame_leaves_nothing_to_contest() {
        let state = BoardState::from_simple(&rows(PARTITIONED), Opponent::Illuminati)
            .unwrap()
            .with_previous_player(Some(Color::White))
            .with_passes(1);
        let disputed = find_disputed_territory(&state, Color::Black, true);
        assert!(
            disputed.is_empty(),
            "a fully partitioned board has no disputed points: {disputed:?}"
        );
    }

    #[test]
    fn open_boards_are_entirely_disputed() {
        let state = BoardState::from_simple(
            &rows(&[".....", ".....", ".....", ".....", "....."]),
            Opponent::Illuminati,
        )
        .unwrap();
        assert_eq!(find_disputed_territory(&state, Color::Black, true).len(), 25);
    }

    #[test]
    fn weak_walls_keep_their_interior_contestable() {
        // The White wall guarding the corner pocket is in atari and
        // touches Black: the pocket stays on the menu.
        let state = BoardState::from_simple(
            &rows(&[".OX..", "OX...", "X....", ".....", "....."]),
            Opponent::Illuminati,
        )
        .unwrap()
        .with_previous_player(Some(Color::White));
        let disputed = find_disputed_territory(&state, Color::Black, true);
        assert!(disputed.contains(&(0, 0)), "got {disputed:?}");
    }
}
