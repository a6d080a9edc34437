//! # Pomodoro Core Library
//!
//! Business logic for the interactive terminal Pomodoro timer. The binary in
//! `pomodoro-cli` only supplies the terminal: stdin/stdout, a signal-aware
//! sleeper and the in-place countdown line.
//!
//! ## Architecture
//!
//! - **Input**: prompt-and-parse with default substitution, never fails
//! - **Timer**: tick-based countdown driven through an injected [`Sleeper`],
//!   cancelled through a [`CancellationToken`]
//! - **Alert**: terminal bell between steps
//! - **Engine**: the cycle state machine tying it all together
//!
//! ## Key Components
//!
//! - [`CycleEngine`]: session state machine
//! - [`SessionConfig`]: the three prompted values
//! - [`ProgressReporter`]: rendering seam for countdown ticks

pub mod alert;
pub mod config;
pub mod error;
pub mod events;
pub mod input;
pub mod timer;

pub use alert::alert;
pub use config::SessionConfig;
pub use error::{CoreError, InputError, Result};
pub use events::Event;
pub use input::{parse_count, resolve_int};
pub use timer::{
    countdown, format_remaining, CountdownOutcome, CycleEngine, ManualClock, ProgressReporter,
    RecordingReporter, RunOutcome, SessionPlan, SessionState, Sleeper, StepType,
};
pub use tokio_util::sync::CancellationToken;
