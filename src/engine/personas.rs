//! Persona priority lists composing the generator table.
//!
//! Each persona is an ordered decision list over the memoized move
//! options, short-circuiting on its first hit. Returning `None` means
//! "no strong preference": the orchestrator then falls back to its
//! reasonable-move pool.

use rand::Rng;

use crate::{
    ports::Pacer,
    types::{Coord, Opponent},
};

use super::options::{DecisionContext, MoveOptions};

fn roll<R: Rng>(rng: &mut R) -> f64 {
    rng.random::<f64>()
}

/// Whether the persona plays with its quality filters on this turn.
pub(crate) fn is_smart<R: Rng>(opponent: Opponent, rng: &mut R) -> bool {
    match opponent {
        Opponent::Netburners => false,
        Opponent::SlumSnakes => roll(rng) <= 0.3,
        Opponent::TheBlackHand => roll(rng) <= 0.8,
        _ => true,
    }
}

/// The persona's preferred point for this decision, if it has one.
pub(crate) fn priority_move<R: Rng>(
    opponent: Opponent,
    options: &mut MoveOptions,
    cx: &DecisionContext<'_>,
    rng: &mut R,
    pacer: &mut dyn Pacer,
) -> Option<Coord> {
    match opponent {
        Opponent::NoAi => None,
        Opponent::Netburners => netburners_move(options, cx, rng, pacer),
        Opponent::SlumSnakes => slum_snakes_move(options, cx, rng, pacer),
        Opponent::TheBlackHand => black_hand_move(options, cx, rng, pacer),
        Opponent::Tetrads => tetrads_move(options, cx, rng, pacer),
        Opponent::Daedalus => {
            if roll(rng) < 0.9 {
                illuminati_move(options, cx, rng, pacer)
            } else {
                None
            }
        }
        Opponent::Illuminati => illuminati_move(options, cx, rng, pacer),
    }
}

/// The strongest list; also the fallback several personas defer to.
fn illuminati_move<R: Rng>(
    options: &mut MoveOptions,
    cx: &DecisionContext<'_>,
    rng: &mut R,
    pacer: &mut dyn Pacer,
) -> Option<Coord> {
    if let Some(candidate) = options.capture(cx, pacer) {
        return Some(candidate.coord());
    }
    if let Some(candidate) = options.defend_capture(cx, rng, pacer) {
        return Some(candidate.coord());
    }
    if let Some(candidate) = options.eye_move(cx, pacer) {
        return Some(candidate.coord());
    }
    if let Some(candidate) = options
        .surround(cx, pacer)
        .filter(|candidate| candidate.new_liberties.is_some_and(|new| new <= 1))
    {
        return Some(candidate.coord());
    }
    if let Some(candidate) = options.eye_block(cx, pacer) {
        return Some(candidate.coord());
    }
    if let Some(candidate) = options.corner(cx, pacer) {
        return Some(candidate.coord());
    }
    let use_pattern = roll(rng) > 0.25 || !has_reasonable_move(options, cx, rng, pacer);
    if use_pattern && let Some(candidate) = options.pattern(cx, rng, pacer) {
        return Some(candidate.coord());
    }
    if roll(rng) > 0.4 && let Some(candidate) = options.jump(cx, rng, pacer) {
        return Some(candidate.coord());
    }
    if roll(rng) < 0.6
        && let Some(candidate) = options
            .surround(cx, pacer)
            .filter(|candidate| candidate.new_liberties.is_some_and(|new| new <= 2))
    {
        return Some(candidate.coord());
    }
    None
}

fn tetrads_move<R: Rng>(
    options: &mut MoveOptions,
    cx: &DecisionContext<'_>,
    rng: &mut R,
    pacer: &mut dyn Pacer,
) -> Option<Coord> {
    if let Some(candidate) = options.capture(cx, pacer) {
        return Some(candidate.coord());
    }
    if let Some(candidate) = options.defend_capture(cx, rng, pacer) {
        return Some(candidate.coord());
    }
    if let Some(candidate) = options.pattern(cx, rng, pacer) {
        return Some(candidate.coord());
    }
    if let Some(candidate) = options
        .surround(cx, pacer)
        .filter(|candidate| candidate.new_liberties.is_some_and(|new| new <= 1))
    {
        return Some(candidate.coord());
    }
    if roll(rng) < 0.4 {
        return illuminati_move(options, cx, rng, pacer);
    }
    None
}

fn black_hand_move<R: Rng>(
    options: &mut MoveOptions,
    cx: &DecisionContext<'_>,
    rng: &mut R,
    pacer: &mut dyn Pacer,
) -> Option<Coord> {
    if let Some(candidate) = options.capture(cx, pacer) {
        return Some(candidate.coord());
    }
    if let Some(candidate) = options
        .surround(cx, pacer)
        .filter(|candidate| candidate.new_liberties.is_some_and(|new| new <= 1))
    {
        return Some(candidate.coord());
    }
    if let Some(candidate) = options.defend_capture(cx, rng, pacer) {
        return Some(candidate.coord());
    }
    if let Some(candidate) = options
        .surround(cx, pacer)
        .filter(|candidate| candidate.new_liberties.is_some_and(|new| new <= 2))
    {
        return Some(candidate.coord());
    }
    if roll(rng) < 0.3 && let Some(point) = illuminati_move(options, cx, rng, pacer) {
        return Some(point);
    }
    if roll(rng) < 0.75 && let Some(candidate) = options.surround(cx, pacer) {
        return Some(candidate.coord());
    }
    if roll(rng) < 0.8 && let Some(candidate) = options.random(cx, rng, pacer) {
        return Some(candidate.coord());
    }
    None
}

fn slum_snakes_move<R: Rng>(
    options: &mut MoveOptions,
    cx: &DecisionContext<'_>,
    rng: &mut R,
    pacer: &mut dyn Pacer,
) -> Option<Coord> {
    if let Some(candidate) = options.defend_capture(cx, rng, pacer) {
        return Some(candidate.coord());
    }
    if roll(rng) < 0.2 && let Some(point) = illuminati_move(options, cx, rng, pacer) {
        return Some(point);
    }
    if roll(rng) < 0.6 && let Some(candidate) = options.growth(cx, rng, pacer) {
        return Some(candidate.coord());
    }
    if roll(rng) < 0.65 && let Some(candidate) = options.random(cx, rng, pacer) {
        return Some(candidate.coord());
    }
    None
}

fn netburners_move<R: Rng>(
    options: &mut MoveOptions,
    cx: &DecisionContext<'_>,
    rng: &mut R,
    pacer: &mut dyn Pacer,
) -> Option<Coord> {
    if roll(rng) < 0.2 && let Some(point) = illuminati_move(options, cx, rng, pacer) {
        return Some(point);
    }
    if roll(rng) < 0.4 && let Some(candidate) = options.expansion(cx, rng, pacer) {
        return Some(candidate.coord());
    }
    if roll(rng) < 0.6 && let Some(candidate) = options.growth(cx, rng, pacer) {
        return Some(candidate.coord());
    }
    if roll(rng) < 0.75 && let Some(candidate) = options.random(cx, rng, pacer) {
        return Some(candidate.coord());
    }
    None
}

/// Whether any of the orchestrator's fallback pool would fire; the
/// Illuminati pattern branch runs unconditionally when nothing else is
/// on offer.
fn has_reasonable_move<R: Rng>(
    options: &mut MoveOptions,
    cx: &DecisionContext<'_>,
    rng: &mut R,
    pacer: &mut dyn Pacer,
) -> bool {
    options.growth(cx, rng, pacer).is_some()
        || options.surround(cx, pacer).is_some()
        || options.defend(cx, rng, pacer).is_some()
        || options.expansion(cx, rng, pacer).is_some()
        || options.eye_move(cx, pacer).is_some()
        || options.eye_block(cx, pacer).is_some()
}
