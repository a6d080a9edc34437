//! Sleep abstraction.
//!
//! Countdowns and alerts never call `std::thread::sleep` directly; they go
//! through a [`Sleeper`] so tests can advance a virtual clock instead of
//! waiting.

use std::time::Duration;

/// Blocks the caller for roughly `duration`.
///
/// Implementations may return early (e.g. when an interrupt arrives); callers
/// re-check their cancellation token after every sleep.
pub trait Sleeper {
    fn sleep(&mut self, duration: Duration);
}

impl<S: Sleeper + ?Sized> Sleeper for &mut S {
    fn sleep(&mut self, duration: Duration) {
        (**self).sleep(duration)
    }
}

/// Virtual clock: sleeping only advances an internal counter.
#[derive(Debug, Default, Clone)]
pub struct ManualClock {
    elapsed: Duration,
    sleeps: usize,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total virtual time slept so far.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Number of sleep calls so far.
    pub fn sleeps(&self) -> usize {
        self.sleeps
    }
}

impl Sleeper for ManualClock {
    fn sleep(&mut self, duration: Duration) {
        self.elapsed = self.elapsed.saturating_add(duration);
        self.sleeps += 1;
    }
}
