//! Disputed-territory extraction feeding the move generators.

use std::collections::{HashMap, HashSet};

use crate::{
    analysis::eyes::{EyeReport, find_potential_eyes},
    goban::{board::Board, state::BoardState},
    rules,
    types::{Color, Coord},
};

/// A bordering chain is attackable inside an eye only while it is this
/// short of breath.
const ATTACKABLE_LIBERTY_LIMIT: usize = 4;

/// The legal moves for `player` that are worth contesting.
///
/// Moves inside the opponent's settled empty territory are dropped
/// unless they hit the attackable interior: liberties of a bordering
/// opponent chain that is low on liberties, touches `player`, and
/// breathes only inside the candidate eye. With
/// `exclude_friendly_eyes`, points inside `player`'s own two-eyed
/// regions are dropped as well.
pub fn find_disputed_territory(
    state: &BoardState,
    player: Color,
    exclude_friendly_eyes: bool,
) -> Vec<Coord> {
    let board = &state.board;
    let mut moves = rules::all_valid_moves(state, player);

    if exclude_friendly_eyes {
        let friendly = EyeReport::for_player(board, player).living_eye_points();
        moves.retain(|coord| !friendly.contains(coord));
    }

    let chains = board.chains();
    let by_id: HashMap<_, _> = chains.iter().map(|chain| (chain.id, chain)).collect();

    let mut interior: HashSet<Coord> = HashSet::new();
    let mut attackable: HashSet<Coord> = HashSet::new();
    for eye in find_potential_eyes(board, player.opponent()) {
        interior.extend(eye.points.iter().copied());
        let eye_points: HashSet<Coord> = eye.points.iter().copied().collect();
        for &id in &eye.border_chains {
            let Some(chain) = by_id.get(&id) else {
                continue;
            };
            if chain.liberty_count() > ATTACKABLE_LIBERTY_LIMIT {
                continue;
            }
            let touches_player = board
                .neighboring_chain_ids(&chain.points)
                .into_iter()
                .any(|nid| board.chain_color(nid) == Some(player));
            if !touches_player {
                continue;
            }
            if chain.liberties.iter().all(|lib| eye_points.contains(lib)) {
                attackable.extend(chain.liberties.iter().copied());
            }
        }
    }

    moves.retain(|coord| !interior.contains(coord) || attackable.contains(coord));
    moves
}

/// Empty points genuinely contested by both sides: members of empty
/// chains, no larger than `max_chain_size`, that touch both a Black and
/// a White chain. Restricted to `available`.
pub fn contested_points(
    board: &Board,
    available: &[Coord],
    max_chain_size: usize,
) -> Vec<Coord> {
    let available: HashSet<Coord> = available.iter().copied().collect();
    let mut out = Vec::new();
    for chain in board.chains() {
        if chain.color != Color::Empty || chain.len() > max_chain_size {
            continue;
        }
        let border_colors: HashSet<Color> = board
            .neighboring_chain_ids(&chain.points)
            .into_iter()
            .filter_map(|id| board.chain_color(id))
            .collect();
        if border_colors.contains(&Color::Black) && border_colors.contains(&Color::White) {
            out.extend(
                chain
                    .points
                    .iter()
                    .copied()
                    .filter(|coord| available.contains(coord)),
            );
        }
    }
    out
}
