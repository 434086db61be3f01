//! Candidate-move generators.
//!
//! Every generator reads the analyzed board plus the disputed-territory
//! filter and returns at most one candidate. Stochastic generators draw
//! from the injected RNG; the rest are deterministic functions of the
//! position.

use std::collections::{HashMap, HashSet};

use rand::{Rng, seq::IndexedRandom};

use crate::{
    analysis::{eyes::EyeReport, territory},
    goban::{board::Board, chains::Chain},
    types::{ChainId, Color, Coord},
};

use super::options::MoveCandidate;

/// Sentinel liberty count when a placement touches no friendly chain.
const NO_FRIENDLY_NEIGHBOR: usize = 99;

/// Opposing chains whose eye space is this small cannot be left alone.
const EYE_BLOCK_LIBERTY_LIMIT: usize = 5;

/// Liberties the placed stone would enjoy at `(x, y)`: the point's own
/// empty neighbors plus the current liberties of adjacent friendly
/// chains, minus the point itself.
pub fn hypothetical_liberties(board: &Board, x: usize, y: usize, player: Color) -> Vec<Coord> {
    let mut seen: HashSet<Coord> = HashSet::new();
    let mut liberties = Vec::new();
    for point in board.neighbor_points(x, y) {
        if point.color == Color::Empty {
            if seen.insert((point.x, point.y)) {
                liberties.push((point.x, point.y));
            }
        } else if point.color == player {
            for &lib in point.liberties.iter().flatten() {
                if lib != (x, y) && seen.insert(lib) {
                    liberties.push(lib);
                }
            }
        }
    }
    liberties
}

fn choose_bare<R: Rng>(candidates: &[Coord], rng: &mut R) -> Option<MoveCandidate> {
    candidates
        .choose(rng)
        .map(|&(x, y)| MoveCandidate::bare(x, y))
}

/// All four orthogonal neighbors exist and are empty.
fn surrounded_by_open_space(board: &Board, x: usize, y: usize) -> bool {
    let neighbors: Vec<Coord> = board.adjacent_coords(x, y).collect();
    neighbors.len() == 4
        && neighbors.iter().all(|&(nx, ny)| {
            board
                .point(nx, ny)
                .is_some_and(|point| point.color == Color::Empty)
        })
}

/// Claim open space: points whose whole neighborhood is empty, falling
/// back to single-point contested territory once none remain.
pub fn expansion_move<R: Rng>(
    board: &Board,
    available: &[Coord],
    rng: &mut R,
) -> Option<MoveCandidate> {
    let open: Vec<Coord> = available
        .iter()
        .copied()
        .filter(|&(x, y)| surrounded_by_open_space(board, x, y))
        .collect();
    let pool = if open.is_empty() {
        territory::contested_points(board, available, 1)
    } else {
        open
    };
    choose_bare(&pool, rng)
}

/// Expansion candidates that keep loose contact with a friendly stone
/// two points away along a line.
pub fn jump_move<R: Rng>(
    board: &Board,
    player: Color,
    available: &[Coord],
    rng: &mut R,
) -> Option<MoveCandidate> {
    let candidates: Vec<Coord> = available
        .iter()
        .copied()
        .filter(|&(x, y)| surrounded_by_open_space(board, x, y))
        .filter(|&(x, y)| {
            two_away_coords(board, x, y).any(|(tx, ty)| {
                board
                    .point(tx, ty)
                    .is_some_and(|point| point.color == player)
            })
        })
        .collect();
    choose_bare(&candidates, rng)
}

fn two_away_coords(board: &Board, x: usize, y: usize) -> impl Iterator<Item = Coord> {
    let size = board.size();
    [(0isize, 2isize), (2, 0), (0, -2), (-2, 0)]
        .into_iter()
        .filter_map(move |(dx, dy)| {
            let nx = x.checked_add_signed(dx)?;
            let ny = y.checked_add_signed(dy)?;
            (nx < size && ny < size).then_some((nx, ny))
        })
}

#[derive(Debug, Clone, Copy)]
struct LibertyGain {
    x: usize,
    y: usize,
    old: usize,
    new: usize,
}

impl LibertyGain {
    fn candidate(self) -> MoveCandidate {
        MoveCandidate {
            x: self.x,
            y: self.y,
            old_liberties: Some(self.old),
            new_liberties: Some(self.new),
            creates_life: false,
        }
    }
}

/// For every friendly-chain liberty in `available`, the liberty count
/// the chain would have after playing there versus the weakest friendly
/// neighbor's count today.
fn liberty_gain_moves(board: &Board, player: Color, available: &[Coord]) -> Vec<LibertyGain> {
    let available: HashSet<Coord> = available.iter().copied().collect();
    let mut seen: HashSet<Coord> = HashSet::new();
    let mut out = Vec::new();
    for chain in board.chains().iter().filter(|chain| chain.color == player) {
        for &(x, y) in &chain.liberties {
            if !available.contains(&(x, y)) || !seen.insert((x, y)) {
                continue;
            }
            let new = hypothetical_liberties(board, x, y, player).len();
            let old = board
                .neighbor_points(x, y)
                .filter(|point| point.color == player)
                .map(|point| point.liberty_count())
                .min()
                .unwrap_or(NO_FRIENDLY_NEIGHBOR);
            out.push(LibertyGain { x, y, old, new });
        }
    }
    out
}

/// Strengthen a chain: keep placements that leave more than one liberty
/// and never lose ground, then maximize the gain.
pub fn growth_move<R: Rng>(
    board: &Board,
    player: Color,
    available: &[Coord],
    rng: &mut R,
) -> Option<MoveCandidate> {
    let gains: Vec<LibertyGain> = liberty_gain_moves(board, player, available)
        .into_iter()
        .filter(|gain| gain.new > 1 && gain.new >= gain.old)
        .collect();
    let best = gains
        .iter()
        .map(|gain| gain.new as isize - gain.old as isize)
        .max()?;
    let pool: Vec<LibertyGain> = gains
        .into_iter()
        .filter(|gain| gain.new as isize - gain.old as isize == best)
        .collect();
    pool.choose(rng).map(|gain| gain.candidate())
}

/// Rescue a chain in atari: liberty gains restricted to chains at one
/// liberty, maximizing the liberties left afterwards.
pub fn defend_move<R: Rng>(
    board: &Board,
    player: Color,
    available: &[Coord],
    rng: &mut R,
) -> Option<MoveCandidate> {
    let rescues: Vec<LibertyGain> = liberty_gain_moves(board, player, available)
        .into_iter()
        .filter(|gain| gain.old <= 1 && gain.new > gain.old)
        .collect();
    let best = rescues.iter().map(|gain| gain.new).max()?;
    let pool: Vec<LibertyGain> = rescues
        .into_iter()
        .filter(|gain| gain.new == best)
        .collect();
    pool.choose(rng).map(|gain| gain.candidate())
}

/// Tighten the net around enemy chains. Captures come first, then
/// ataris, then plain squeezes; the liberty counts on the returned
/// candidate describe the targeted enemy chain before and after.
pub fn surround_move(
    board: &Board,
    player: Color,
    available: &[Coord],
    smart: bool,
) -> Option<MoveCandidate> {
    let available: HashSet<Coord> = available.iter().copied().collect();
    let opponent = player.opponent();
    let chains = board.chains();
    let by_id: HashMap<ChainId, &Chain> = chains.iter().map(|chain| (chain.id, chain)).collect();

    let mut captures = Vec::new();
    let mut ataris = Vec::new();
    let mut squeezes = Vec::new();
    let mut seen: HashSet<Coord> = HashSet::new();
    for chain in chains.iter().filter(|chain| chain.color == opponent) {
        for &(x, y) in &chain.liberties {
            if !available.contains(&(x, y)) || !seen.insert((x, y)) {
                continue;
            }
            let effective = hypothetical_liberties(board, x, y, player).len();
            let weakest = board
                .neighbor_points(x, y)
                .filter(|point| point.color == opponent)
                .filter_map(|point| point.chain)
                .filter_map(|id| by_id.get(&id))
                .min_by_key(|enemy| enemy.liberty_count());
            let Some(weakest) = weakest else {
                continue;
            };
            let enemy_liberties = weakest.liberty_count();
            let candidate = MoveCandidate {
                x,
                y,
                old_liberties: Some(enemy_liberties),
                new_liberties: Some(enemy_liberties.saturating_sub(1)),
                creates_life: false,
            };

            if enemy_liberties <= 1 {
                captures.push(candidate);
            } else if enemy_liberties == 2
                && (effective >= 2
                    || (liberty_group_count(board, weakest) == 1 && weakest.len() > 3)
                    || !smart)
            {
                ataris.push(candidate);
            } else if effective > 2 {
                // Squeezing a healthy chain from a self-endangering stone
                // is never worth it, hence the taller bar here.
                squeezes.push(candidate);
            }
        }
    }
    captures
        .into_iter()
        .chain(ataris)
        .chain(squeezes)
        .next()
}

/// Number of distinct empty regions a chain breathes through.
fn liberty_group_count(board: &Board, chain: &Chain) -> usize {
    let mut regions: HashSet<ChainId> = HashSet::new();
    for &(x, y) in &chain.liberties {
        if let Some(id) = board.point(x, y).and_then(|point| point.chain) {
            regions.insert(id);
        }
    }
    regions.len()
}

/// Eye-building placements for `player`, strongest first. A candidate
/// must give a not-yet-living chain a sheltered liberty and must raise
/// the player's eye count, or the number of living groups outright.
pub fn eye_creation_moves(
    board: &Board,
    player: Color,
    available: &[Coord],
    max_liberties: usize,
) -> Vec<MoveCandidate> {
    let available: HashSet<Coord> = available.iter().copied().collect();
    let opponent = player.opponent();
    let report = EyeReport::for_player(board, player);
    let current_living = report.living_chain_count();
    let current_eyes = report.eye_count();

    let mut targets: Vec<Coord> = Vec::new();
    let mut seen: HashSet<Coord> = HashSet::new();
    for chain in board.chains() {
        if chain.color != player || chain.len() <= 1 {
            continue;
        }
        if chain.liberty_count() > max_liberties || report.is_living(chain.id) {
            continue;
        }
        for &(x, y) in &chain.liberties {
            if !available.contains(&(x, y)) || !seen.insert((x, y)) {
                continue;
            }
            if sheltered_neighborhood(board, x, y, opponent) {
                targets.push((x, y));
            }
        }
    }

    let mut out = Vec::new();
    for (x, y) in targets {
        let evaluation = board.evaluate_move_result(x, y, player);
        let next = EyeReport::for_player(&evaluation, player);
        let creates_life = next.living_chain_count() > current_living;
        if creates_life
            || (next.eye_count() > current_eyes
                && next.living_chain_count() == current_living)
        {
            out.push(MoveCandidate {
                x,
                y,
                old_liberties: None,
                new_liberties: None,
                creates_life,
            });
        }
    }
    out.sort_by_key(|candidate| !candidate.creates_life);
    out
}

/// At least two non-opposing neighbors (off-board counts) and at least
/// one genuinely empty one.
fn sheltered_neighborhood(board: &Board, x: usize, y: usize, opponent: Color) -> bool {
    let mut non_opposing = 0;
    let mut empties = 0;
    for (dx, dy) in [(0isize, 1isize), (1, 0), (0, -1), (-1, 0)] {
        let cell = x
            .checked_add_signed(dx)
            .zip(y.checked_add_signed(dy))
            .and_then(|(nx, ny)| board.point(nx, ny));
        match cell {
            None => non_opposing += 1,
            Some(point) if point.color != opponent => {
                non_opposing += 1;
                if point.color == Color::Empty {
                    empties += 1;
                }
            }
            Some(_) => {}
        }
    }
    non_opposing >= 2 && empties >= 1
}

/// The strongest eye-building placement, if any.
pub fn eye_creation_move(
    board: &Board,
    player: Color,
    available: &[Coord],
) -> Option<MoveCandidate> {
    eye_creation_moves(board, player, available, usize::MAX)
        .into_iter()
        .next()
}

/// Deny the opponent an eye, but only when the refutation is unique:
/// exactly one move of theirs would create life, or failing that
/// exactly one would create an eye.
pub fn eye_blocking_move(
    board: &Board,
    player: Color,
    available: &[Coord],
) -> Option<MoveCandidate> {
    let threats = eye_creation_moves(board, player.opponent(), available, EYE_BLOCK_LIBERTY_LIMIT);
    let (life_makers, eye_makers): (Vec<MoveCandidate>, Vec<MoveCandidate>) =
        threats.into_iter().partition(|threat| threat.creates_life);
    if life_makers.len() == 1 {
        return life_makers.into_iter().next();
    }
    if life_makers.is_empty() && eye_makers.len() == 1 {
        return eye_makers.into_iter().next();
    }
    None
}

/// Take the 3-3 point of the first untouched corner, checking the four
/// corners in a fixed order.
pub fn corner_move(board: &Board) -> Option<MoveCandidate> {
    let size = board.size();
    if size < 3 {
        return None;
    }
    let near = size - 3;
    let edge = size - 1;
    let windows: [(usize, usize, usize, usize, Coord); 4] = [
        (near, near, edge, edge, (near, near)),
        (0, near, 2, edge, (2, near)),
        (0, 0, 2, 2, (2, 2)),
        (near, 0, edge, 2, (near, 2)),
    ];
    for (x0, y0, x1, y1, (ix, iy)) in windows {
        if corner_is_open(board, x0, y0, x1, y1) {
            return Some(MoveCandidate::bare(ix, iy));
        }
    }
    None
}

/// Mostly intact (seven or more online cells) and entirely unclaimed.
fn corner_is_open(board: &Board, x0: usize, y0: usize, x1: usize, y1: usize) -> bool {
    let mut online = 0;
    for x in x0..=x1 {
        for y in y0..=y1 {
            if let Some(point) = board.point(x, y) {
                if point.color != Color::Empty {
                    return false;
                }
                online += 1;
            }
        }
    }
    online >= 7
}

/// Uniform choice over the disputed filter, withheld entirely once no
/// genuinely contested point remains (passing is just as good then).
pub fn random_move<R: Rng>(
    board: &Board,
    available: &[Coord],
    rng: &mut R,
) -> Option<MoveCandidate> {
    if territory::contested_points(board, available, usize::MAX).is_empty() {
        return None;
    }
    choose_bare(available, rng)
}
