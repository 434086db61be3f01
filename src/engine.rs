//! Decision engine: persona-driven orchestration of the generators.

pub mod generators;
pub mod options;
pub mod patterns;
pub mod personas;

use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};

use crate::{
    analysis::territory,
    error::Result,
    goban::state::BoardState,
    ports::{NoopPacer, Pacer},
    rules,
    types::{Color, Coord, Opponent, Play},
};

pub use options::MoveCandidate;

use options::{DecisionContext, MoveOptions};

fn build_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

/// The decision core. Owns the injected capabilities (RNG and pacing);
/// everything else arrives per call as a [`BoardState`].
pub struct GoEngine {
    rng: StdRng,
    rng_seed: Option<u64>,
    pacer: Box<dyn Pacer>,
}

impl std::fmt::Debug for GoEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoEngine")
            .field("rng_seed", &self.rng_seed)
            .finish()
    }
}

impl GoEngine {
    /// Create a new builder for configuring an engine.
    ///
    /// # Example
    /// ```
    /// use tengen::GoEngine;
    ///
    /// let engine = GoEngine::builder().seed(42).build();
    /// ```
    pub fn builder() -> GoEngineBuilder {
        GoEngineBuilder::new()
    }

    /// An engine with entropy-seeded randomness and no pacing.
    pub fn new() -> GoEngine {
        GoEngine::builder().build()
    }

    /// Set or reset the engine's RNG seed.
    pub fn reseed(&mut self, seed: Option<u64>) {
        self.rng = build_rng(seed);
        self.rng_seed = seed;
    }

    /// Select a play for `player` on the given position.
    ///
    /// The persona recorded in the state drives the priority pass; when
    /// it has no preference the reasonable-move pool decides, and an
    /// empty pool becomes a pass. Every emitted move satisfies the
    /// fast-path adjudicator.
    pub fn get_move(&mut self, state: &BoardState, player: Color) -> Play {
        self.pacer.pause();
        if state.is_over() {
            return Play::GameOver;
        }

        let smart = personas::is_smart(state.opponent, &mut self.rng);
        let available = territory::find_disputed_territory(state, player, smart);
        let cx = DecisionContext {
            board: &state.board,
            player,
            available,
            smart,
        };
        let mut options = MoveOptions::new();

        if let Some((x, y)) = personas::priority_move(
            state.opponent,
            &mut options,
            &cx,
            &mut self.rng,
            self.pacer.as_mut(),
        ) && rules::evaluate_move_validity(state, x, y, player, true).is_valid()
        {
            self.pacer.pause();
            return Play::Move { x, y };
        }

        // No (valid) preference: gather the reasonable fallbacks in a
        // fixed order and pick uniformly among the legal ones.
        let picks = [
            options.growth(&cx, &mut self.rng, self.pacer.as_mut()),
            options.surround(&cx, self.pacer.as_mut()),
            options.defend(&cx, &mut self.rng, self.pacer.as_mut()),
            options.expansion(&cx, &mut self.rng, self.pacer.as_mut()),
            options.pattern(&cx, &mut self.rng, self.pacer.as_mut()),
            options.eye_move(&cx, self.pacer.as_mut()),
            options.eye_block(&cx, self.pacer.as_mut()),
        ];
        let fallback: Vec<Coord> = picks
            .into_iter()
            .flatten()
            .map(|candidate| candidate.coord())
            .filter(|&(x, y)| rules::evaluate_move_validity(state, x, y, player, true).is_valid())
            .collect();

        self.pacer.pause();
        match fallback.choose(&mut self.rng) {
            Some(&(x, y)) => Play::Move { x, y },
            None => Play::Pass,
        }
    }
}

impl Default for GoEngine {
    fn default() -> Self {
        GoEngine::new()
    }
}

/// Builder for [`GoEngine`].
#[derive(Default)]
pub struct GoEngineBuilder {
    seed: Option<u64>,
    pacer: Option<Box<dyn Pacer>>,
}

impl GoEngineBuilder {
    pub fn new() -> GoEngineBuilder {
        GoEngineBuilder::default()
    }

    /// Seed the RNG for reproducible play.
    pub fn seed(mut self, seed: u64) -> GoEngineBuilder {
        self.seed = Some(seed);
        self
    }

    /// Install a pacing adapter; defaults to never pausing.
    pub fn pacer(mut self, pacer: Box<dyn Pacer>) -> GoEngineBuilder {
        self.pacer = Some(pacer);
        self
    }

    pub fn build(self) -> GoEngine {
        GoEngine {
            rng: build_rng(self.seed),
            rng_seed: self.seed,
            pacer: self.pacer.unwrap_or_else(|| Box::new(NoopPacer)),
        }
    }
}

/// One-shot entry point: decode a SimpleBoard, let the given opponent
/// persona pick for `player`, and return the play.
///
/// # Errors
///
/// Returns an error when the grid is not square or out of size range.
pub fn get_move(rows: &[String], opponent: Opponent, player: Color) -> Result<Play> {
    let state = BoardState::from_simple(rows, opponent)?;
    Ok(GoEngine::new().get_move(&state, player))
}
