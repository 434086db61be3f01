//! Chain discovery, liberty recomputation, and capture resolution.

use std::collections::{HashMap, HashSet};

use crate::{
    goban::board::Board,
    types::{ChainId, Color, Coord},
};

/// Summary of one chain, in the board's column-major scan order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    pub id: ChainId,
    pub color: Color,
    pub points: Vec<Coord>,
    pub liberties: Vec<Coord>,
}

impl Chain {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn liberty_count(&self) -> usize {
        self.liberties.len()
    }
}

impl Board {
    /// Assign chain ids and liberty lists to every online point.
    ///
    /// The scan is column-major and ids are the first-scanned member's
    /// coordinate, so the result is a pure function of the position.
    /// With `reset` the previous analysis is discarded first; without
    /// it only unanalyzed points are (re)assigned.
    pub fn update_chains(&mut self, reset: bool) {
        if reset {
            for (x, y) in self.coords().collect::<Vec<_>>() {
                if let Some(point) = self.point_mut(x, y) {
                    point.chain = None;
                    point.liberties = None;
                }
            }
        }

        for (x, y) in self.coords().collect::<Vec<_>>() {
            let Some(point) = self.point(x, y) else {
                continue;
            };
            if point.chain.is_some() {
                continue;
            }
            let color = point.color;

            // Flood fill over same-color orthogonal steps; holes block.
            let mut members = vec![(x, y)];
            let mut seen: HashSet<Coord> = HashSet::from([(x, y)]);
            let mut frontier = vec![(x, y)];
            while let Some((cx, cy)) = frontier.pop() {
                for (nx, ny) in self.adjacent_coords(cx, cy).collect::<Vec<_>>() {
                    if seen.contains(&(nx, ny)) {
                        continue;
                    }
                    if self
                        .point(nx, ny)
                        .is_some_and(|neighbor| neighbor.color == color)
                    {
                        seen.insert((nx, ny));
                        members.push((nx, ny));
                        frontier.push((nx, ny));
                    }
                }
            }
            members.sort_unstable();

            let mut liberties: Vec<Coord> = Vec::new();
            let mut liberty_seen: HashSet<Coord> = HashSet::new();
            for &(mx, my) in &members {
                for (nx, ny) in self.adjacent_coords(mx, my).collect::<Vec<_>>() {
                    if seen.contains(&(nx, ny)) || !liberty_seen.insert((nx, ny)) {
                        continue;
                    }
                    if self
                        .point(nx, ny)
                        .is_some_and(|neighbor| neighbor.color == Color::Empty)
                    {
                        liberties.push((nx, ny));
                    }
                }
            }
            liberties.sort_unstable();

            let id = ChainId { x, y };
            for &(mx, my) in &members {
                if let Some(member) = self.point_mut(mx, my) {
                    member.chain = Some(id);
                    member.liberties = Some(liberties.clone());
                }
            }
        }
    }

    /// Resolve captures after a placement by `moved`.
    ///
    /// Opposing chains with no liberties are removed first; a friendly
    /// zero-liberty chain is only removed when no opposing chain was.
    /// Returns the removed chains (empty when nothing died).
    pub fn update_captures(&mut self, moved: Color) -> Vec<Chain> {
        self.update_chains(true);

        let chains = self.chains();
        let enemy = moved.opponent();
        let captured: Vec<Chain> = chains
            .iter()
            .filter(|chain| chain.color == enemy && chain.color != Color::Empty)
            .filter(|chain| chain.liberties.is_empty())
            .cloned()
            .collect();
        let doomed = if captured.is_empty() {
            chains
                .into_iter()
                .filter(|chain| chain.color == moved && chain.color != Color::Empty)
                .filter(|chain| chain.liberties.is_empty())
                .collect()
        } else {
            captured
        };

        if doomed.is_empty() {
            return doomed;
        }
        for chain in &doomed {
            for &(x, y) in &chain.points {
                if let Some(point) = self.point_mut(x, y) {
                    point.color = Color::Empty;
                    point.chain = None;
                    point.liberties = None;
                }
            }
        }
        self.update_chains(true);
        doomed
    }

    /// The board that results from `player` placing a stone at `(x, y)`
    /// and captures resolving, leaving `self` untouched.
    pub fn evaluate_move_result(&self, x: usize, y: usize, player: Color) -> Board {
        let mut next = self.clone();
        if let Some(point) = next.point_mut(x, y) {
            point.color = player;
            point.chain = None;
            point.liberties = None;
        }
        next.update_captures(player);
        next
    }

    /// All chains of the analyzed board, in first-member scan order.
    pub fn chains(&self) -> Vec<Chain> {
        let mut order: Vec<ChainId> = Vec::new();
        let mut grouped: HashMap<ChainId, Chain> = HashMap::new();
        for (x, y) in self.coords() {
            let Some(point) = self.point(x, y) else {
                continue;
            };
            let Some(id) = point.chain else {
                continue;
            };
            grouped
                .entry(id)
                .or_insert_with(|| {
                    order.push(id);
                    Chain {
                        id,
                        color: point.color,
                        points: Vec::new(),
                        liberties: point.liberties.clone().unwrap_or_default(),
                    }
                })
                .points
                .push((x, y));
        }
        order
            .into_iter()
            .filter_map(|id| grouped.remove(&id))
            .collect()
    }

    /// Color of the chain with the given id, read off its origin point.
    pub fn chain_color(&self, id: ChainId) -> Option<Color> {
        self.point(id.x, id.y).map(|point| point.color)
    }

    /// Members of the chain with the given id, in scan order.
    pub fn chain_members(&self, id: ChainId) -> Vec<Coord> {
        self.coords()
            .filter(|&(x, y)| {
                self.point(x, y)
                    .is_some_and(|point| point.chain == Some(id))
            })
            .collect()
    }

    /// Distinct ids of chains orthogonally adjacent to the given point
    /// set, excluding chains of the set's own members. Order follows
    /// the first adjacency encountered.
    pub fn neighboring_chain_ids(&self, points: &[Coord]) -> Vec<ChainId> {
        let own: HashSet<Coord> = points.iter().copied().collect();
        let own_ids: HashSet<ChainId> = points
            .iter()
            .filter_map(|&(x, y)| self.point(x, y).and_then(|point| point.chain))
            .collect();
        let mut out = Vec::new();
        let mut seen: HashSet<ChainId> = HashSet::new();
        for &(x, y) in points {
            for (nx, ny) in self.adjacent_coords(x, y) {
                if own.contains(&(nx, ny)) {
                    continue;
                }
                let Some(id) = self.point(nx, ny).and_then(|point| point.chain) else {
                    continue;
                };
                if !own_ids.contains(&id) && seen.insert(id) {
                    out.push(id);
                }
            }
        }
        out
    }
}
