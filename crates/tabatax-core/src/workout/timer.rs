//! Run controller.
//!
//! Owns the circuit, the timing config and the countdown state, and
//! gates tick delivery on the running status. The controller is
//! clock-free like the rest of the core: whoever owns it drives `tick()`
//! at a 1 Hz cadence while the status is running. Because that cadence
//! lives on the same thread as the commands, a pause takes effect before
//! the next tick could possibly be delivered -- no second is lost or
//! counted twice.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::events::{Cue, Event};

use super::config::TimingConfig;
use super::duration::total_duration;
use super::engine::{self, Signal};
use super::exercise::{Circuit, Exercise};
use super::state::{Status, TimerState};

/// What one tick produced: cues for the sink, plus an event when the
/// tick crossed a lifecycle boundary (finish, or a forced drop to idle).
#[derive(Debug, Clone, Default)]
pub struct TickOutcome {
    pub cues: Vec<Cue>,
    pub event: Option<Event>,
}

/// Interval-workout timer: circuit, timing config, status and countdown
/// state behind the start/pause/resume/reset command set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutTimer {
    config: TimingConfig,
    circuit: Circuit,
    status: Status,
    state: TimerState,
}

impl WorkoutTimer {
    pub fn new(config: TimingConfig, circuit: Circuit) -> Self {
        Self {
            config,
            circuit,
            status: Status::Idle,
            state: TimerState::fresh(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn config(&self) -> &TimingConfig {
        &self.config
    }

    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    /// Exercise the countdown is currently positioned on, if it still
    /// exists.
    pub fn active_exercise(&self) -> Option<&Exercise> {
        self.circuit.get(self.state.ex_index)
    }

    /// Estimated total seconds for the whole workout.
    pub fn total_secs(&self) -> u32 {
        total_duration(&self.config, &self.circuit)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Idle/finished -> running with a fresh countdown; paused ->
    /// running, continuing verbatim. Starting an empty circuit stays
    /// idle rather than entering a state the first tick would abort.
    pub fn start(&mut self) -> Option<Event> {
        match self.status {
            Status::Idle | Status::Finished => {
                if self.circuit.is_empty() {
                    self.status = Status::Idle;
                    return None;
                }
                self.state = TimerState::fresh();
                self.status = Status::Running;
                Some(Event::TimerStarted {
                    total_secs: self.total_secs(),
                    at: Utc::now(),
                })
            }
            Status::Paused => self.resume(),
            Status::Running => None,
        }
    }

    /// Running -> paused. The countdown state is preserved verbatim.
    pub fn pause(&mut self) -> Option<Event> {
        match self.status {
            Status::Running => {
                self.status = Status::Paused;
                Some(Event::TimerPaused {
                    time_left: self.state.time_left,
                    at: Utc::now(),
                })
            }
            _ => None,
        }
    }

    /// Paused -> running; the next tick continues from the preserved
    /// `time_left`.
    pub fn resume(&mut self) -> Option<Event> {
        match self.status {
            Status::Paused => {
                self.status = Status::Running;
                Some(Event::TimerResumed {
                    time_left: self.state.time_left,
                    at: Utc::now(),
                })
            }
            _ => None,
        }
    }

    /// Any status -> idle with a fresh lead-in state.
    pub fn reset(&mut self) -> Option<Event> {
        self.status = Status::Idle;
        self.state = TimerState::fresh();
        Some(Event::TimerReset { at: Utc::now() })
    }

    /// Deliver one 1 Hz tick. Ignored unless running.
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != Status::Running {
            return TickOutcome::default();
        }

        let result = engine::step(&self.state, &self.config, &self.circuit);
        self.state = result.state;

        let event = match result.signal {
            Some(Signal::Finished) => {
                self.status = Status::Finished;
                Some(Event::WorkoutCompleted {
                    sets: self.config.num_sets,
                    work_units: self.state.completed.len(),
                    at: Utc::now(),
                })
            }
            Some(Signal::EmptyCircuit) => {
                self.status = Status::Idle;
                Some(Event::RunAborted { at: Utc::now() })
            }
            None => None,
        };

        TickOutcome {
            cues: result.cues,
            event,
        }
    }

    // ── Editing ──────────────────────────────────────────────────────

    /// Mutable access to the circuit, only while idle.
    pub fn edit(&mut self) -> Option<&mut Circuit> {
        (self.status == Status::Idle).then(|| &mut self.circuit)
    }

    /// Replace the timing config, only while idle.
    pub fn set_config(&mut self, config: TimingConfig) -> bool {
        if self.status != Status::Idle {
            return false;
        }
        self.config = config;
        true
    }

    /// Remove an exercise by id.
    ///
    /// While idle any exercise may go. Mid-run (running or paused) only
    /// the active exercise may be removed, and doing so forces the run
    /// back to idle -- documented policy, not an error. Everything else
    /// is rejected with `None`.
    pub fn remove_exercise(&mut self, id: &str) -> Option<Event> {
        let index = self.circuit.index_of(id)?;
        let forced_idle = match self.status {
            Status::Idle => false,
            Status::Running | Status::Paused if index == self.state.ex_index => {
                self.status = Status::Idle;
                true
            }
            _ => return None,
        };
        self.circuit.remove(id);
        Some(Event::ExerciseRemoved {
            id: id.to_string(),
            forced_idle,
            at: Utc::now(),
        })
    }
}
