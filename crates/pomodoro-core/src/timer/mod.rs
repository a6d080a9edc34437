mod clock;
mod countdown;
mod engine;
mod schedule;

pub use clock::{ManualClock, Sleeper};
pub use countdown::{
    countdown, format_remaining, Countdown, CountdownOutcome, ProgressReporter,
    RecordingReporter, TICK,
};
pub use engine::{CycleEngine, RunOutcome, SessionState};
pub use schedule::{SessionPlan, Step, StepType};
