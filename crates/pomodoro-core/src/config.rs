//! Session configuration collected interactively.
//!
//! Nothing is read from disk or the environment; the three values come from
//! the prompts, with the classic 25 / 5 / 4 defaults.

use std::io::{BufRead, Write};

use crate::input::resolve_int;
use crate::timer::SessionPlan;

pub const WORK_PROMPT: &str = "Work minutes";
pub const BREAK_PROMPT: &str = "Break minutes";
pub const CYCLES_PROMPT: &str = "Number of cycles";

pub const DEFAULT_WORK_MINUTES: u64 = 25;
pub const DEFAULT_BREAK_MINUTES: u64 = 5;
pub const DEFAULT_CYCLES: u64 = 4;

/// Values as the user typed them, durations in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub work_minutes: u64,
    pub break_minutes: u64,
    pub cycles: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            work_minutes: DEFAULT_WORK_MINUTES,
            break_minutes: DEFAULT_BREAK_MINUTES,
            cycles: DEFAULT_CYCLES,
        }
    }
}

impl SessionConfig {
    /// Ask for work minutes, break minutes and cycle count, in that order.
    pub fn prompt<R, W>(input: &mut R, output: &mut W) -> Self
    where
        R: BufRead,
        W: Write,
    {
        let defaults = Self::default();
        let config = Self {
            work_minutes: resolve_int(input, output, WORK_PROMPT, defaults.work_minutes),
            break_minutes: resolve_int(input, output, BREAK_PROMPT, defaults.break_minutes),
            cycles: resolve_int(input, output, CYCLES_PROMPT, defaults.cycles),
        };
        tracing::info!(
            work_minutes = config.work_minutes,
            break_minutes = config.break_minutes,
            cycles = config.cycles,
            "session configured"
        );
        config
    }

    pub fn plan(&self) -> SessionPlan {
        SessionPlan::from_minutes(self.work_minutes, self.break_minutes, self.cycles)
    }
}
