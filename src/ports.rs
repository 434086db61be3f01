//! Host-facing capability ports.
//!
//! The decision core cooperates with its host through two injected
//! capabilities: randomness (expressed as [`rand::Rng`] bounds on the
//! engine's entry points) and pacing, the single-method port below.

/// Pacing port.
///
/// The engine calls [`Pacer::pause`] at its defined suspension points:
/// orchestrator entry and exit, each move-getter invocation, and once
/// per outer column of the pattern scan. Semantically every call is a
/// no-op; a host that wants a responsive UI can briefly run its event
/// loop inside the adapter.
pub trait Pacer {
    fn pause(&mut self);
}

/// Default adapter that never pauses.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPacer;

impl Pacer for NoopPacer {
    fn pause(&mut self) {}
}

/// Adapter that counts suspension points, for hosts (and tests) that
/// meter how often the engine yields.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountingPacer {
    pub pauses: usize,
}

impl Pacer for CountingPacer {
    fn pause(&mut self) {
        self.pauses += 1;
    }
}
