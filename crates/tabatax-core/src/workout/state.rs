use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Seconds of lead-in after a fresh start, before the first work phase.
pub const GET_READY_SECS: u32 = 5;

/// Current activity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    /// Lead-in before the first work interval.
    GetReady,
    Work,
    /// Rest between exercises inside one set.
    Rest,
    /// Longer rest between sets.
    SetRest,
    /// Terminal.
    Finished,
}

/// Run status, orthogonal to [`Phase`]. Ticks are delivered iff running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Idle,
    Running,
    Paused,
    Finished,
}

/// Countdown position inside one run.
///
/// Created fresh on reset and on a cold start, mutated only by the tick
/// handler, replaced wholesale on reset. `time_left` never exceeds
/// `max_time`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerState {
    /// 1-based set currently being performed.
    pub current_set: u32,
    /// Position inside the circuit. Meaningful while the phase is work
    /// or rest and the circuit is non-empty.
    pub ex_index: usize,
    pub phase: Phase,
    /// Seconds left in the current phase.
    pub time_left: u32,
    /// Full length of the current phase, for progress display.
    pub max_time: u32,
    /// `(set, exercise id)` pairs whose work interval finished during
    /// this run. Grows monotonically; cleared exactly on reset.
    pub completed: BTreeSet<(u32, String)>,
}

impl TimerState {
    /// Fresh lead-in state.
    pub fn fresh() -> Self {
        Self {
            current_set: 1,
            ex_index: 0,
            phase: Phase::GetReady,
            time_left: GET_READY_SECS,
            max_time: GET_READY_SECS,
            completed: BTreeSet::new(),
        }
    }

    /// 0.0 .. 1.0 progress within the current phase.
    pub fn progress(&self) -> f64 {
        if self.max_time == 0 {
            return 0.0;
        }
        1.0 - (self.time_left as f64 / self.max_time as f64)
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::fresh()
    }
}
