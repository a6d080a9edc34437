//! Terminal side of the timer: the in-place countdown line and a sleeper that
//! wakes up early on Ctrl+C.

use std::io::{self, Write};
use std::time::Duration;

use pomodoro_core::{
    format_remaining, CancellationToken, CountdownOutcome, ProgressReporter, Sleeper,
};
use tokio::runtime::{Builder, Runtime};

/// Rewrites a single line with `\r` on every tick.
pub struct TerminalReporter<W: Write> {
    out: W,
}

impl<W: Write> TerminalReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> ProgressReporter for TerminalReporter<W> {
    fn report(&mut self, remaining_secs: u64, label: &str) -> io::Result<()> {
        write!(
            self.out,
            "\r{label}: {} remaining",
            format_remaining(remaining_secs)
        )?;
        self.out.flush()
    }

    fn finish(&mut self, outcome: CountdownOutcome) -> io::Result<()> {
        if outcome == CountdownOutcome::Interrupted {
            write!(self.out, "\nTimer interrupted.\n")?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }
}

/// Sleeps on a single-threaded tokio runtime that also listens for Ctrl+C.
///
/// The listener task cancels the shared token; a sleep in progress returns as
/// soon as that happens. A Ctrl+C pressed between sleeps is picked up the next
/// time the runtime is driven.
pub struct SignalSleeper {
    runtime: Runtime,
    cancel: CancellationToken,
}

impl SignalSleeper {
    /// Take over Ctrl+C. From here on an interrupt cancels `cancel` instead of
    /// killing the process.
    pub fn install(cancel: CancellationToken) -> io::Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;

        let token = cancel.clone();
        runtime.spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    tracing::debug!("interrupt received");
                    token.cancel();
                }
                Err(e) => tracing::warn!(error = %e, "unable to listen for Ctrl+C"),
            }
        });
        // Let the listener register its handler before the first tick.
        runtime.block_on(tokio::task::yield_now());

        Ok(Self { runtime, cancel })
    }
}

impl Sleeper for SignalSleeper {
    fn sleep(&mut self, duration: Duration) {
        let cancel = self.cancel.clone();
        self.runtime.block_on(async move {
            tokio::select! {
                _ = tokio::time::sleep(duration) => {}
                _ = cancel.cancelled() => {}
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn rendered(f: impl FnOnce(&mut TerminalReporter<&mut Vec<u8>>)) -> String {
        let mut buf = Vec::new();
        let mut reporter = TerminalReporter::new(&mut buf);
        f(&mut reporter);
        drop(reporter);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn report_overwrites_line() {
        let text = rendered(|r| {
            r.report(125, "Work").unwrap();
            r.report(124, "Work").unwrap();
        });
        assert_eq!(text, "\rWork: 02:05 remaining\rWork: 02:04 remaining");
    }

    #[test]
    fn completed_ends_line() {
        let text = rendered(|r| {
            r.report(0, "Break").unwrap();
            r.finish(CountdownOutcome::Completed).unwrap();
        });
        assert_eq!(text, "\rBreak: 00:00 remaining\n");
    }

    #[test]
    fn interrupted_prints_notice_then_ends_line() {
        let text = rendered(|r| {
            r.finish(CountdownOutcome::Interrupted).unwrap();
        });
        assert_eq!(text, "\nTimer interrupted.\n\n");
    }

    #[test]
    fn cancelled_sleeper_returns_early() {
        let cancel = CancellationToken::new();
        let mut sleeper = SignalSleeper::install(cancel.clone()).unwrap();
        cancel.cancel();

        let started = Instant::now();
        sleeper.sleep(Duration::from_secs(30));
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn sleeper_waits_without_cancel() {
        let mut sleeper = SignalSleeper::install(CancellationToken::new()).unwrap();
        let started = Instant::now();
        sleeper.sleep(Duration::from_millis(50));
        assert!(started.elapsed() >= Duration::from_millis(50));
    }
}
