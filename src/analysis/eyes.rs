//! Eye detection: potential eyes, true-eye confirmation, living groups.

use std::collections::{HashMap, HashSet};

use crate::{
    goban::{board::Board, chains::Chain},
    types::{ChainId, Color, Coord},
};

/// Hard cap on how many points a candidate eye may span.
const EYE_SIZE_LIMIT: usize = 11;

/// An empty region whose stone borders are all the one color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PotentialEye {
    /// Id of the empty chain forming the candidate.
    pub id: ChainId,
    pub points: Vec<Coord>,
    /// Bordering stone chains, all of the controlling color.
    pub border_chains: Vec<ChainId>,
}

/// Candidate eyes for `player`: empty chains no larger than
/// `min(0.4 * onlineCells, 11)` whose stone borders are all `player`'s.
pub fn find_potential_eyes(board: &Board, player: Color) -> Vec<PotentialEye> {
    let cap = ((board.live_cell_count() as f64 * 0.4).floor() as usize).min(EYE_SIZE_LIMIT);
    let mut out = Vec::new();
    for chain in board.chains() {
        if chain.color != Color::Empty || chain.len() > cap {
            continue;
        }
        let borders: Vec<ChainId> = board
            .neighboring_chain_ids(&chain.points)
            .into_iter()
            .filter(|&id| board.chain_color(id).is_some_and(|color| color != Color::Empty))
            .collect();
        if borders.is_empty() {
            continue;
        }
        if borders
            .iter()
            .all(|&id| board.chain_color(id) == Some(player))
        {
            out.push(PotentialEye {
                id: chain.id,
                points: chain.points,
                border_chains: borders,
            });
        }
    }
    out
}

/// Confirmed eyes for `player`, grouped by the id of the chain that
/// controls them. Each eye is the point group of one empty chain.
pub fn eyes_by_chain(board: &Board, player: Color) -> HashMap<ChainId, Vec<Vec<Coord>>> {
    let mut out: HashMap<ChainId, Vec<Vec<Coord>>> = HashMap::new();
    for candidate in find_potential_eyes(board, player) {
        match candidate.border_chains.len() {
            0 => continue,
            1 => out
                .entry(candidate.border_chains[0])
                .or_default()
                .push(candidate.points.clone()),
            _ => {
                for id in fully_encircling_chains(board, &candidate) {
                    out.entry(id).or_default().push(candidate.points.clone());
                }
            }
        }
    }
    out
}

/// Members of `candidate.border_chains` that encircle the candidate on
/// their own: with every other border chain lifted off the board, the
/// candidate's merged empty region touches exactly one stone chain.
fn fully_encircling_chains(board: &Board, candidate: &PotentialEye) -> Vec<ChainId> {
    let chains = board.chains();
    let by_id: HashMap<ChainId, &Chain> = chains.iter().map(|chain| (chain.id, chain)).collect();
    let candidate_box = BoundingBox::of(&candidate.points);
    let edge = board.size() - 1;

    let mut out = Vec::new();
    for &id in &candidate.border_chains {
        let Some(chain) = by_id.get(&id) else {
            continue;
        };
        // A chain whose span does not wrap the candidate cannot close it off.
        if !BoundingBox::of(&chain.points).encircles(&candidate_box, edge) {
            continue;
        }

        let mut evaluation = board.clone();
        for &other in &candidate.border_chains {
            if other == id {
                continue;
            }
            let Some(other_chain) = by_id.get(&other) else {
                continue;
            };
            for &(x, y) in &other_chain.points {
                if let Some(point) = evaluation.point_mut(x, y) {
                    point.color = Color::Empty;
                    point.chain = None;
                    point.liberties = None;
                }
            }
        }
        evaluation.update_chains(true);

        let (cx, cy) = candidate.points[0];
        let Some(merged) = evaluation.point(cx, cy).and_then(|point| point.chain) else {
            continue;
        };
        let stone_neighbors = evaluation
            .neighboring_chain_ids(&evaluation.chain_members(merged))
            .into_iter()
            .filter(|&nid| {
                evaluation
                    .chain_color(nid)
                    .is_some_and(|color| color != Color::Empty)
            })
            .count();
        if stone_neighbors == 1 {
            out.push(id);
        }
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BoundingBox {
    min_x: usize,
    max_x: usize,
    min_y: usize,
    max_y: usize,
}

impl BoundingBox {
    fn of(points: &[Coord]) -> BoundingBox {
        let mut bounds = BoundingBox {
            min_x: usize::MAX,
            max_x: 0,
            min_y: usize::MAX,
            max_y: 0,
        };
        for &(x, y) in points {
            bounds.min_x = bounds.min_x.min(x);
            bounds.max_x = bounds.max_x.max(x);
            bounds.min_y = bounds.min_y.min(y);
            bounds.max_y = bounds.max_y.max(y);
        }
        bounds
    }

    /// Whether this box strictly encloses `inner` on every side, with
    /// equality allowed where `inner` already touches the board edge.
    fn encircles(&self, inner: &BoundingBox, edge: usize) -> bool {
        (self.min_x < inner.min_x || inner.min_x == 0)
            && (self.min_y < inner.min_y || inner.min_y == 0)
            && (self.max_x > inner.max_x || inner.max_x == edge)
            && (self.max_y > inner.max_y || inner.max_y == edge)
    }
}

/// Per-player eye summary consumed by the move generators.
#[derive(Debug, Clone, Default)]
pub struct EyeReport {
    pub eyes_by_chain: HashMap<ChainId, Vec<Vec<Coord>>>,
}

impl EyeReport {
    pub fn for_player(board: &Board, player: Color) -> EyeReport {
        EyeReport {
            eyes_by_chain: eyes_by_chain(board, player),
        }
    }

    /// Total number of confirmed eyes across all chains.
    pub fn eye_count(&self) -> usize {
        self.eyes_by_chain.values().map(Vec::len).sum()
    }

    /// Number of chains holding two or more eyes.
    pub fn living_chain_count(&self) -> usize {
        self.eyes_by_chain
            .values()
            .filter(|eyes| eyes.len() >= 2)
            .count()
    }

    pub fn is_living(&self, id: ChainId) -> bool {
        self.eyes_by_chain.get(&id).is_some_and(|eyes| eyes.len() >= 2)
    }

    /// Interior points of every living chain's eyes.
    pub fn living_eye_points(&self) -> HashSet<Coord> {
        self.eyes_by_chain
            .values()
            .filter(|eyes| eyes.len() >= 2)
            .flat_map(|eyes| eyes.iter().flatten().copied())
            .collect()
    }
}
