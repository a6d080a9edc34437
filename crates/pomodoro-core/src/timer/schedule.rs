use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepType {
    Work,
    Break,
}

impl StepType {
    /// Label shown in front of the countdown.
    pub fn label(self) -> &'static str {
        match self {
            StepType::Work => "Work",
            StepType::Break => "Break",
        }
    }
}

/// One countdown within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// 1-based cycle this step belongs to.
    pub cycle: u64,
    pub step_type: StepType,
    pub duration_secs: u64,
}

/// Resolved session plan, all durations in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPlan {
    pub work_secs: u64,
    pub break_secs: u64,
    pub cycles: u64,
}

impl SessionPlan {
    /// Build a plan from minute values.
    ///
    /// Uses saturating arithmetic so absurd inputs cannot overflow.
    pub fn from_minutes(work_min: u64, break_min: u64, cycles: u64) -> Self {
        Self {
            work_secs: work_min.saturating_mul(60),
            break_secs: break_min.saturating_mul(60),
            cycles,
        }
    }

    /// Whether `cycle` is followed by a break.
    pub fn has_break_after(&self, cycle: u64) -> bool {
        cycle < self.cycles
    }

    /// Lazily yields work/break steps in run order. No break follows the
    /// final cycle.
    pub fn steps(&self) -> impl Iterator<Item = Step> + '_ {
        (1..=self.cycles).flat_map(move |cycle| {
            let work = Step {
                cycle,
                step_type: StepType::Work,
                duration_secs: self.work_secs,
            };
            let rest = self.has_break_after(cycle).then_some(Step {
                cycle,
                step_type: StepType::Break,
                duration_secs: self.break_secs,
            });
            std::iter::once(work).chain(rest)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minutes_convert_to_seconds() {
        let plan = SessionPlan::from_minutes(25, 5, 4);
        assert_eq!(plan.work_secs, 1500);
        assert_eq!(plan.break_secs, 300);
    }

    #[test]
    fn huge_minutes_saturate() {
        let plan = SessionPlan::from_minutes(u64::MAX, 1, 1);
        assert_eq!(plan.work_secs, u64::MAX);
    }

    #[test]
    fn no_break_after_last_cycle() {
        let plan = SessionPlan::from_minutes(1, 1, 3);
        let kinds: Vec<_> = plan.steps().map(|s| (s.cycle, s.step_type)).collect();
        assert_eq!(
            kinds,
            vec![
                (1, StepType::Work),
                (1, StepType::Break),
                (2, StepType::Work),
                (2, StepType::Break),
                (3, StepType::Work),
            ]
        );
    }

    #[test]
    fn single_cycle_has_no_break() {
        let plan = SessionPlan::from_minutes(1, 1, 1);
        assert!(plan.steps().all(|s| s.step_type == StepType::Work));
        assert_eq!(plan.steps().count(), 1);
    }

    #[test]
    fn zero_cycles_is_empty() {
        let plan = SessionPlan::from_minutes(25, 5, 0);
        assert_eq!(plan.steps().count(), 0);
    }
}
