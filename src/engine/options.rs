//! Per-decision memoized table of generator results.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    goban::board::Board,
    ports::Pacer,
    types::{Color, Coord},
};

use super::{generators, patterns};

/// A candidate move plus the strength metadata generators attach to it.
///
/// For growth-family moves the liberty counts describe the mover's own
/// chain before and after; for surround-family moves they describe the
/// targeted enemy chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCandidate {
    pub x: usize,
    pub y: usize,
    pub old_liberties: Option<usize>,
    pub new_liberties: Option<usize>,
    pub creates_life: bool,
}

impl MoveCandidate {
    pub(crate) fn bare(x: usize, y: usize) -> MoveCandidate {
        MoveCandidate {
            x,
            y,
            old_liberties: None,
            new_liberties: None,
            creates_life: false,
        }
    }

    pub fn coord(&self) -> Coord {
        (self.x, self.y)
    }
}

/// Inputs shared by every generator during one decision.
pub(crate) struct DecisionContext<'a> {
    pub board: &'a Board,
    pub player: Color,
    pub available: Vec<Coord>,
    pub smart: bool,
}

type Slot = Option<Option<MoveCandidate>>;

/// Lazily evaluated generator results. Personas may probe the same
/// getter repeatedly; each generator still runs at most once per
/// decision, and every getter invocation is a host suspension point.
#[derive(Debug, Default)]
pub(crate) struct MoveOptions {
    expansion: Slot,
    jump: Slot,
    growth: Slot,
    defend: Slot,
    surround: Slot,
    eye_move: Slot,
    eye_block: Slot,
    pattern: Slot,
    corner: Slot,
    random: Slot,
}

impl MoveOptions {
    pub fn new() -> MoveOptions {
        MoveOptions::default()
    }

    pub fn expansion<R: Rng>(
        &mut self,
        cx: &DecisionContext<'_>,
        rng: &mut R,
        pacer: &mut dyn Pacer,
    ) -> Option<MoveCandidate> {
        pacer.pause();
        *self
            .expansion
            .get_or_insert_with(|| generators::expansion_move(cx.board, &cx.available, rng))
    }

    pub fn jump<R: Rng>(
        &mut self,
        cx: &DecisionContext<'_>,
        rng: &mut R,
        pacer: &mut dyn Pacer,
    ) -> Option<MoveCandidate> {
        pacer.pause();
        *self
            .jump
            .get_or_insert_with(|| generators::jump_move(cx.board, cx.player, &cx.available, rng))
    }

    pub fn growth<R: Rng>(
        &mut self,
        cx: &DecisionContext<'_>,
        rng: &mut R,
        pacer: &mut dyn Pacer,
    ) -> Option<MoveCandidate> {
        pacer.pause();
        *self
            .growth
            .get_or_insert_with(|| generators::growth_move(cx.board, cx.player, &cx.available, rng))
    }

    pub fn defend<R: Rng>(
        &mut self,
        cx: &DecisionContext<'_>,
        rng: &mut R,
        pacer: &mut dyn Pacer,
    ) -> Option<MoveCandidate> {
        pacer.pause();
        *self
            .defend
            .get_or_insert_with(|| generators::defend_move(cx.board, cx.player, &cx.available, rng))
    }

    pub fn surround(
        &mut self,
        cx: &DecisionContext<'_>,
        pacer: &mut dyn Pacer,
    ) -> Option<MoveCandidate> {
        pacer.pause();
        *self.surround.get_or_insert_with(|| {
            generators::surround_move(cx.board, cx.player, &cx.available, cx.smart)
        })
    }

    pub fn eye_move(
        &mut self,
        cx: &DecisionContext<'_>,
        pacer: &mut dyn Pacer,
    ) -> Option<MoveCandidate> {
        pacer.pause();
        *self.eye_move.get_or_insert_with(|| {
            generators::eye_creation_move(cx.board, cx.player, &cx.available)
        })
    }

    pub fn eye_block(
        &mut self,
        cx: &DecisionContext<'_>,
        pacer: &mut dyn Pacer,
    ) -> Option<MoveCandidate> {
        pacer.pause();
        *self.eye_block.get_or_insert_with(|| {
            generators::eye_blocking_move(cx.board, cx.player, &cx.available)
        })
    }

    pub fn pattern<R: Rng>(
        &mut self,
        cx: &DecisionContext<'_>,
        rng: &mut R,
        pacer: &mut dyn Pacer,
    ) -> Option<MoveCandidate> {
        pacer.pause();
        if let Some(cached) = self.pattern {
            return cached;
        }
        let value =
            patterns::pattern_move(cx.board, cx.player, &cx.available, cx.smart, rng, pacer);
        self.pattern = Some(value);
        value
    }

    pub fn corner(
        &mut self,
        cx: &DecisionContext<'_>,
        pacer: &mut dyn Pacer,
    ) -> Option<MoveCandidate> {
        pacer.pause();
        *self
            .corner
            .get_or_insert_with(|| generators::corner_move(cx.board))
    }

    pub fn random<R: Rng>(
        &mut self,
        cx: &DecisionContext<'_>,
        rng: &mut R,
        pacer: &mut dyn Pacer,
    ) -> Option<MoveCandidate> {
        pacer.pause();
        *self
            .random
            .get_or_insert_with(|| generators::random_move(cx.board, &cx.available, rng))
    }

    /// The surround result when it is an outright capture.
    pub fn capture(
        &mut self,
        cx: &DecisionContext<'_>,
        pacer: &mut dyn Pacer,
    ) -> Option<MoveCandidate> {
        self.surround(cx, pacer)
            .filter(|candidate| candidate.new_liberties == Some(0))
    }

    /// The defend result when it pulls a chain out of atari.
    pub fn defend_capture<R: Rng>(
        &mut self,
        cx: &DecisionContext<'_>,
        rng: &mut R,
        pacer: &mut dyn Pacer,
    ) -> Option<MoveCandidate> {
        self.defend(cx, rng, pacer).filter(|candidate| {
            candidate.old_liberties == Some(1)
                && candidate.new_liberties.is_some_and(|new| new > 1)
        })
    }
}
