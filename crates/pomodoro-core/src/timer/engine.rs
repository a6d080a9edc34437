//! Cycle engine.
//!
//! Drives a whole session: one work countdown per cycle, each followed by an
//! alert and (except after the last cycle) a break countdown with its own
//! alert. It does not use threads or real time directly - sleeping goes
//! through the injected [`Sleeper`] and interrupts arrive through a
//! [`CancellationToken`].
//!
//! ## State Transitions
//!
//! ```text
//! Configuring -> Running(1..N) -> Finished
//!                     \-> Stopped (on interrupt)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let config = SessionConfig::prompt(&mut stdin, &mut stdout);
//! let mut engine = CycleEngine::new(stdout, reporter, sleeper, cancel);
//! engine.run(config.plan())?;
//! ```

use std::fmt;
use std::io::Write;

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use super::clock::Sleeper;
use super::countdown::{countdown, CountdownOutcome, ProgressReporter};
use super::schedule::{SessionPlan, Step, StepType};
use crate::alert::{alert, DEFAULT_REPEAT};
use crate::error::Result;
use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum SessionState {
    Configuring,
    Running { cycle: u64 },
    Finished,
    /// Interrupted before all cycles ran.
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunOutcome {
    Finished,
    Stopped,
}

/// Core session engine.
///
/// `W` receives announcements and the bell, `R` renders countdown ticks.
pub struct CycleEngine<W, R, S> {
    out: W,
    reporter: R,
    sleeper: S,
    cancel: CancellationToken,
    state: SessionState,
    events: Vec<Event>,
}

impl<W, R, S> CycleEngine<W, R, S>
where
    W: Write,
    R: ProgressReporter,
    S: Sleeper,
{
    /// Create an engine in the `Configuring` state. It stays there until
    /// [`CycleEngine::run`] is called.
    pub fn new(out: W, reporter: R, sleeper: S, cancel: CancellationToken) -> Self {
        Self {
            out,
            reporter,
            sleeper,
            cancel,
            state: SessionState::Configuring,
            events: Vec::new(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Run every step of `plan` in order.
    ///
    /// Returns `Stopped` if the cancellation token fires during a countdown
    /// or alert; no further steps run after that.
    pub fn run(&mut self, plan: SessionPlan) -> Result<RunOutcome> {
        for step in plan.steps() {
            if step.step_type == StepType::Work {
                self.state = SessionState::Running { cycle: step.cycle };
                tracing::info!(cycle = step.cycle, cycles = plan.cycles, "cycle started");
                self.events.push(Event::CycleStarted {
                    cycle: step.cycle,
                    cycles: plan.cycles,
                });
                self.say(format_args!("\nCycle {}/{}: Focus time!", step.cycle, plan.cycles))?;
            }

            if self.run_step(step)? == CountdownOutcome::Interrupted {
                return self.stop(step.cycle);
            }

            match step.step_type {
                StepType::Work => {
                    self.say(format_args!("Work session done. Time for a break!\n"))?;
                    if !plan.has_break_after(step.cycle) {
                        self.events.push(Event::BreakSkipped { cycle: step.cycle });
                    }
                }
                StepType::Break => self.say(format_args!("Break over. Back to work!"))?,
            }
        }
        self.finish(plan.cycles)
    }

    // ── Internal ─────────────────────────────────────────────────────

    /// Countdown followed by the alert. An interrupt during the alert pauses
    /// counts the same as one during the countdown.
    fn run_step(&mut self, step: Step) -> Result<CountdownOutcome> {
        let outcome = countdown(
            step.duration_secs,
            step.step_type.label(),
            &mut self.reporter,
            &mut self.sleeper,
            &self.cancel,
        )?;
        if outcome == CountdownOutcome::Interrupted {
            self.events.push(Event::CountdownInterrupted {
                cycle: step.cycle,
                step_type: step.step_type,
            });
            return Ok(outcome);
        }
        self.events.push(Event::CountdownCompleted {
            cycle: step.cycle,
            step_type: step.step_type,
            duration_secs: step.duration_secs,
        });

        alert(&mut self.out, &mut self.sleeper, DEFAULT_REPEAT, &self.cancel);
        self.events.push(Event::Alerted {
            cycle: step.cycle,
            step_type: step.step_type,
        });

        if self.cancel.is_cancelled() {
            return Ok(CountdownOutcome::Interrupted);
        }
        Ok(CountdownOutcome::Completed)
    }

    fn stop(&mut self, cycle: u64) -> Result<RunOutcome> {
        self.state = SessionState::Stopped;
        tracing::info!(cycle, "session stopped early");
        self.events.push(Event::SessionStopped { cycle });
        self.say(format_args!("\n\nStopped early. See you next time!\n"))?;
        Ok(RunOutcome::Stopped)
    }

    fn finish(&mut self, cycles: u64) -> Result<RunOutcome> {
        self.state = SessionState::Finished;
        tracing::info!(cycles, "session finished");
        self.events.push(Event::SessionFinished { cycles });
        self.say(format_args!("\nAll cycles finished — great job!\n"))?;
        Ok(RunOutcome::Finished)
    }

    fn say(&mut self, message: fmt::Arguments<'_>) -> Result<()> {
        writeln!(self.out, "{message}")?;
        self.out.flush()?;
        Ok(())
    }
}
