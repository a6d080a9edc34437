//! Tick-based countdown.
//!
//! A countdown of `N` seconds produces `N + 1` ticks (`N, N-1, .., 0`). Each
//! tick is reported, then the sleeper is asked for one second. The
//! cancellation token is checked on both sides of every sleep, so an interrupt
//! stops the countdown at the next tick boundary.

use std::io;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use super::clock::Sleeper;

/// Length of one tick.
pub const TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountdownOutcome {
    Completed,
    Interrupted,
}

/// `MM:SS` with no hour rollover: 3661 seconds is `61:01`.
pub fn format_remaining(remaining_secs: u64) -> String {
    format!("{:02}:{:02}", remaining_secs / 60, remaining_secs % 60)
}

/// Receives one update per tick.
pub trait ProgressReporter {
    fn report(&mut self, remaining_secs: u64, label: &str) -> io::Result<()>;

    /// Called exactly once when a countdown ends, completed or interrupted.
    fn finish(&mut self, _outcome: CountdownOutcome) -> io::Result<()> {
        Ok(())
    }
}

impl<R: ProgressReporter + ?Sized> ProgressReporter for &mut R {
    fn report(&mut self, remaining_secs: u64, label: &str) -> io::Result<()> {
        (**self).report(remaining_secs, label)
    }

    fn finish(&mut self, outcome: CountdownOutcome) -> io::Result<()> {
        (**self).finish(outcome)
    }
}

/// Keeps every update in memory. Handy for headless runs and tests.
#[derive(Debug, Default, Clone)]
pub struct RecordingReporter {
    pub updates: Vec<(String, u64)>,
    pub outcomes: Vec<CountdownOutcome>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remaining-seconds values reported under `label`, in order.
    pub fn updates_for(&self, label: &str) -> Vec<u64> {
        self.updates
            .iter()
            .filter(|(l, _)| l == label)
            .map(|(_, r)| *r)
            .collect()
    }
}

impl ProgressReporter for RecordingReporter {
    fn report(&mut self, remaining_secs: u64, label: &str) -> io::Result<()> {
        self.updates.push((label.to_string(), remaining_secs));
        Ok(())
    }

    fn finish(&mut self, outcome: CountdownOutcome) -> io::Result<()> {
        self.outcomes.push(outcome);
        Ok(())
    }
}

/// Remaining-seconds sequence `total, total-1, .., 0`.
#[derive(Debug, Clone)]
pub struct Countdown {
    remaining: u64,
    done: bool,
}

impl Countdown {
    pub fn new(total_secs: u64) -> Self {
        Self {
            remaining: total_secs,
            done: false,
        }
    }
}

impl Iterator for Countdown {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.done {
            return None;
        }
        let current = self.remaining;
        if current == 0 {
            self.done = true;
        } else {
            self.remaining -= 1;
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        match usize::try_from(self.remaining) {
            Ok(n) => (n.saturating_add(1), n.checked_add(1)),
            Err(_) => (usize::MAX, None),
        }
    }
}

/// Run a countdown of `total_secs` labelled `label`.
///
/// Returns `Interrupted` as soon as `cancel` fires; the reporter's `finish`
/// runs on both outcomes. Only reporter I/O failures are errors.
pub fn countdown<R, S>(
    total_secs: u64,
    label: &str,
    reporter: &mut R,
    sleeper: &mut S,
    cancel: &CancellationToken,
) -> io::Result<CountdownOutcome>
where
    R: ProgressReporter + ?Sized,
    S: Sleeper + ?Sized,
{
    tracing::debug!(total_secs, label, "countdown started");
    let outcome = tick_loop(total_secs, label, reporter, sleeper, cancel)?;
    tracing::debug!(label, ?outcome, "countdown ended");
    reporter.finish(outcome)?;
    Ok(outcome)
}

fn tick_loop<R, S>(
    total_secs: u64,
    label: &str,
    reporter: &mut R,
    sleeper: &mut S,
    cancel: &CancellationToken,
) -> io::Result<CountdownOutcome>
where
    R: ProgressReporter + ?Sized,
    S: Sleeper + ?Sized,
{
    for remaining in Countdown::new(total_secs) {
        if cancel.is_cancelled() {
            return Ok(CountdownOutcome::Interrupted);
        }
        reporter.report(remaining, label)?;
        sleeper.sleep(TICK);
        if cancel.is_cancelled() {
            return Ok(CountdownOutcome::Interrupted);
        }
    }
    Ok(CountdownOutcome::Completed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::ManualClock;

    /// Cancels the token during the `after`-th sleep.
    struct CancelDuringSleep {
        clock: ManualClock,
        token: CancellationToken,
        after: usize,
    }

    impl Sleeper for CancelDuringSleep {
        fn sleep(&mut self, duration: Duration) {
            self.clock.sleep(duration);
            if self.clock.sleeps() == self.after {
                self.token.cancel();
            }
        }
    }

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_remaining(125), "02:05");
        assert_eq!(format_remaining(0), "00:00");
        assert_eq!(format_remaining(59), "00:59");
        assert_eq!(format_remaining(1500), "25:00");
    }

    #[test]
    fn no_hour_rollover() {
        assert_eq!(format_remaining(3661), "61:01");
        assert_eq!(format_remaining(6000 * 60), "6000:00");
    }

    #[test]
    fn countdown_iterator_is_inclusive() {
        assert_eq!(Countdown::new(3).collect::<Vec<_>>(), vec![3, 2, 1, 0]);
        assert_eq!(Countdown::new(0).collect::<Vec<_>>(), vec![0]);
        assert_eq!(Countdown::new(5).size_hint(), (6, Some(6)));
    }

    #[test]
    fn completes_with_n_plus_one_updates() {
        let mut reporter = RecordingReporter::new();
        let mut clock = ManualClock::new();
        let token = CancellationToken::new();

        let outcome = countdown(60, "Work", &mut reporter, &mut clock, &token).unwrap();

        assert_eq!(outcome, CountdownOutcome::Completed);
        let updates = reporter.updates_for("Work");
        assert_eq!(updates.len(), 61);
        assert_eq!(updates.first(), Some(&60));
        assert_eq!(updates.last(), Some(&0));
        assert_eq!(clock.elapsed(), Duration::from_secs(61));
        assert_eq!(reporter.outcomes, vec![CountdownOutcome::Completed]);
    }

    #[test]
    fn zero_second_countdown_reports_once() {
        let mut reporter = RecordingReporter::new();
        let mut clock = ManualClock::new();
        let token = CancellationToken::new();

        countdown(0, "Break", &mut reporter, &mut clock, &token).unwrap();

        assert_eq!(reporter.updates_for("Break"), vec![0]);
        assert_eq!(clock.sleeps(), 1);
    }

    #[test]
    fn interrupt_stops_at_tick_boundary() {
        let token = CancellationToken::new();
        let mut sleeper = CancelDuringSleep {
            clock: ManualClock::new(),
            token: token.clone(),
            after: 3,
        };
        let mut reporter = RecordingReporter::new();

        let outcome = countdown(10, "Work", &mut reporter, &mut sleeper, &token).unwrap();

        assert_eq!(outcome, CountdownOutcome::Interrupted);
        assert_eq!(reporter.updates_for("Work"), vec![10, 9, 8]);
        assert_eq!(reporter.outcomes, vec![CountdownOutcome::Interrupted]);
    }

    #[test]
    fn already_cancelled_reports_nothing() {
        let token = CancellationToken::new();
        token.cancel();
        let mut reporter = RecordingReporter::new();
        let mut clock = ManualClock::new();

        let outcome = countdown(5, "Work", &mut reporter, &mut clock, &token).unwrap();

        assert_eq!(outcome, CountdownOutcome::Interrupted);
        assert!(reporter.updates.is_empty());
        assert_eq!(clock.sleeps(), 0);
        assert_eq!(reporter.outcomes, vec![CountdownOutcome::Interrupted]);
    }

    #[test]
    fn reporter_error_propagates() {
        struct Broken;
        impl ProgressReporter for Broken {
            fn report(&mut self, _: u64, _: &str) -> io::Result<()> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
        }

        let mut clock = ManualClock::new();
        let token = CancellationToken::new();
        let err = countdown(3, "Work", &mut Broken, &mut clock, &token).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
