//! Test suite for the full decision pipeline
//! Exercises the personas and the orchestrator end to end

use tengen::{
    BoardState, Color, GoEngine, Opponent, Play, Validity, evaluate_move_validity, get_move,
};

fn rows(rows: &[&str]) -> Vec<String> {
    rows.iter().map(|row| row.to_string()).collect()
}

const ALL_OPPONENTS: [Opponent; 7] = [
    Opponent::NoAi,
    Opponent::Netburners,
    Opponent::SlumSnakes,
    Opponent::TheBlackHand,
    Opponent::Tetrads,
    Opponent::Daedalus,
    Opponent::Illuminati,
];

mod openings {
    use super::*;

    #[test]
    fn illuminati_opens_on_the_three_three_point() {
        // On an empty 5x5 every corner window qualifies and they all
        // share the inner point (2, 2).
        let play = get_move(
            &rows(&[".....", ".....", ".....", ".....", "....."]),
            Opponent::Illuminati,
            Color::Black,
        )
        .unwrap();
        assert_eq!(play, Play::Move { x: 2, y: 2 });
    }

    #[test]
    fn the_redacted_name_plays_like_illuminati() {
        let opponent: Opponent = "????????????".parse().unwrap();
        let play = get_move(
            &rows(&[".....", ".....", ".....", ".....", "....."]),
            opponent,
            Color::Black,
        )
        .unwrap();
        assert_eq!(play, Play::Move { x: 2, y: 2 });
    }
}

mod captures {
    use super::*;

    fn atari_state(opponent: Opponent) -> BoardState {
        BoardState::from_simple(
            &rows(&[".....", "..X..", ".XO..", "..X..", "....."]),
            opponent,
        )
        .unwrap()
        .with_previous_player(Some(Color::White))
    }

    #[test]
    fn illuminati_takes_the_capture() {
        let state = atari_state(Opponent::Illuminati);
        let play = GoEngine::builder().seed(3).build().get_move(&state, Color::Black);
        assert_eq!(play, Play::Move { x: 2, y: 3 });

        // Applying the capture clears the White stone.
        let next = state.apply_play(Color::Black, play).unwrap();
        assert_eq!(next.board.point(2, 2).unwrap().color, Color::Empty);
    }

    #[test]
    fn every_capture_first_persona_agrees() {
        for opponent in [
            Opponent::Illuminati,
            Opponent::Tetrads,
            Opponent::TheBlackHand,
        ] {
            let state = atari_state(opponent);
            let play = GoEngine::builder().seed(5).build().get_move(&state, Color::Black);
            assert_eq!(
                play,
                Play::Move { x: 2, y: 3 },
                "{opponent} leads with the capture"
            );
        }
    }
}

mod endgame {
    use super::*;

    #[test]
    fn settled_board_is_passed() {
        let state = BoardState::from_simple(
            &rows(&[".X.X.", "XXXXX", "XXXXX", "OOOOO", ".O.O."]),
            Opponent::Illuminati,
        )
        .unwrap()
        .with_previous_player(Some(Color::White))
        .with_passes(1);
        let play = GoEngine::builder().seed(8).build().get_move(&state, Color::Black);
        assert_eq!(play, Play::Pass);
    }

    #[test]
    fn finished_game_reports_game_over() {
        let state = BoardState::from_simple(&rows(&["..", ".."]), Opponent::Daedalus)
            .unwrap()
            .with_previous_player(None);
        let play = GoEngine::builder().seed(8).build().get_move(&state, Color::White);
        assert_eq!(play, Play::GameOver);
    }
}

mod determinism {
    use super::*;

    #[test]
    fn seeded_netburners_reproduce_their_choice() {
        let state = BoardState::from_simple(
            &rows(&[".....", "..X..", "..O..", ".....", "....."]),
            Opponent::Netburners,
        )
        .unwrap()
        .with_previous_player(Some(Color::White));

        for seed in [0, 1, 2, 77] {
            let first = GoEngine::builder().seed(seed).build().get_move(&state, Color::Black);
            let second = GoEngine::builder().seed(seed).build().get_move(&state, Color::Black);
            assert_eq!(first, second, "seed {seed} must reproduce");
        }
    }

    #[test]
    fn reseeding_restores_the_sequence() {
        let state = BoardState::from_simple(
            &rows(&[".....", "..X..", "..O..", ".....", "....."]),
            Opponent::SlumSnakes,
        )
        .unwrap()
        .with_previous_player(Some(Color::White));

        let mut engine = GoEngine::builder().seed(21).build();
        let first = engine.get_move(&state, Color::Black);
        engine.reseed(Some(21));
        let replay = engine.get_move(&state, Color::Black);
        assert_eq!(first, replay);
    }
}

mod totality {
    use super::*;

    /// Every persona, on every probed position, returns either a pass
    /// or a move the fast-path adjudicator accepts.
    #[test]
    fn personas_always_answer_with_a_legal_play() {
        let positions = [
            rows(&[".....", ".....", ".....", ".....", "....."]),
            rows(&[".....", "..X..", ".XO..", "..X..", "....."]),
            rows(&["XX#..", "X.O..", ".OO.#", "..#..", "X...O"]),
            rows(&[".X.X.", "XXXXX", "XXXXX", "OOOOO", ".O.O."]),
            rows(&["X#O", "#.#", "O#X"]),
        ];
        for position in &positions {
            for opponent in ALL_OPPONENTS {
                for seed in [0, 9, 1000] {
                    let state = BoardState::from_simple(position, opponent)
                        .unwrap()
                        .with_previous_player(Some(Color::White));
                    let play = GoEngine::builder()
                        .seed(seed)
                        .build()
                        .get_move(&state, Color::Black);
                    match play {
                        Play::Move { x, y } => {
                            assert_eq!(
                                evaluate_move_validity(&state, x, y, Color::Black, true),
                                Validity::Valid,
                                "{opponent} (seed {seed}) played an illegal move on {position:?}"
                            );
                        }
                        Play::Pass => {}
                        Play::GameOver => panic!("game is not over"),
                    }
                }
            }
        }
    }

    #[test]
    fn the_state_is_never_mutated_by_a_decision() {
        let state = BoardState::from_simple(
            &rows(&[".....", "..X..", ".XO..", "..X..", "....."]),
            Opponent::TheBlackHand,
        )
        .unwrap()
        .with_previous_player(Some(Color::White));
        let snapshot = state.clone();
        let _play = GoEngine::builder().seed(4).build().get_move(&state, Color::Black);
        assert_eq!(state, snapshot);
    }
}

mod pacing {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tengen::Pacer;

    #[derive(Clone, Default)]
    struct SharedCounter(Arc<Mutex<usize>>);

    impl Pacer for SharedCounter {
        fn pause(&mut self) {
            *self.0.lock().unwrap() += 1;
        }
    }

    #[test]
    fn the_engine_yields_to_its_host() {
        let counter = SharedCounter::default();
        let handle = counter.clone();
        let state = BoardState::from_simple(
            &rows(&[".....", "..X..", ".XO..", "..X..", "....."]),
            Opponent::Illuminati,
        )
        .unwrap()
        .with_previous_player(Some(Color::White));

        let mut engine = GoEngine::builder()
            .seed(6)
            .pacer(Box::new(counter))
            .build();
        let _play = engine.get_move(&state, Color::Black);
        assert!(
            *handle.0.lock().unwrap() >= 2,
            "at least entry and exit must yield"
        );
    }
}
