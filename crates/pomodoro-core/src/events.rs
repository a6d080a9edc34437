use serde::{Deserialize, Serialize};

use crate::timer::StepType;

/// Every state change in a session produces an Event.
/// The engine keeps them in order so callers can replay what happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    CycleStarted {
        cycle: u64,
        cycles: u64,
    },
    CountdownCompleted {
        cycle: u64,
        step_type: StepType,
        duration_secs: u64,
    },
    CountdownInterrupted {
        cycle: u64,
        step_type: StepType,
    },
    Alerted {
        cycle: u64,
        step_type: StepType,
    },
    /// The final cycle never gets a break.
    BreakSkipped {
        cycle: u64,
    },
    SessionFinished {
        cycles: u64,
    },
    SessionStopped {
        cycle: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_type_tag() {
        let event = Event::CountdownCompleted {
            cycle: 2,
            step_type: StepType::Break,
            duration_secs: 300,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "CountdownCompleted");
        assert_eq!(json["step_type"], "break");
        assert_eq!(json["duration_secs"], 300);
    }
}
