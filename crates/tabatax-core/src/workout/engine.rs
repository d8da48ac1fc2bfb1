//! Phase state machine.
//!
//! `step` is a pure function from `(state, config, circuit)` to the next
//! state plus the cues that tick produced. It reads no clock and does no
//! IO; the run controller owns the cadence and hands the cues to
//! whatever sink the caller injected, so transitions are testable
//! without any audio subsystem.
//!
//! ## Phases
//!
//! ```text
//! GetReady -> Work -> Rest -> Work -> ... -> SetRest -> Work -> ... -> Finished
//! ```
//!
//! A transition fires only on the tick that exhausts `time_left`; every
//! other tick decrements it by exactly one second.

use crate::events::{Cue, CueKind, Speech, SpeechCategory};

use super::config::TimingConfig;
use super::duration::{resolve_rest, resolve_work};
use super::exercise::Circuit;
use super::state::{Phase, TimerState};

/// Seconds remaining at or below which a countdown tick emits a `Tick`
/// cue. Uniform across phases, lead-in included.
const COUNTDOWN_CUE_SECS: u32 = 3;

/// Out-of-band condition the run controller must act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// The circuit is empty; the run cannot proceed. Fail-safe, not a
    /// fault: the controller drops back to idle.
    EmptyCircuit,
    /// The final work interval ended; the workout is done.
    Finished,
}

/// Result of advancing the machine by one tick.
#[derive(Debug, Clone)]
pub struct StepResult {
    pub state: TimerState,
    pub cues: Vec<Cue>,
    pub signal: Option<Signal>,
}

/// Advance the machine by one 1 Hz tick.
pub fn step(state: &TimerState, config: &TimingConfig, circuit: &Circuit) -> StepResult {
    if circuit.is_empty() {
        return StepResult {
            state: state.clone(),
            cues: Vec::new(),
            signal: Some(Signal::EmptyCircuit),
        };
    }

    if state.time_left > 1 {
        let mut next = state.clone();
        next.time_left -= 1;
        let cues = if next.time_left <= COUNTDOWN_CUE_SECS {
            vec![Cue::sound(CueKind::Tick)]
        } else {
            Vec::new()
        };
        return StepResult {
            state: next,
            cues,
            signal: None,
        };
    }

    transition(state, config, circuit)
}

/// Fire the phase transition for an exhausted countdown.
fn transition(state: &TimerState, config: &TimingConfig, circuit: &Circuit) -> StepResult {
    let mut next = state.clone();
    let mut cues = Vec::new();
    let mut signal = None;

    match state.phase {
        Phase::GetReady => {
            enter_work(&mut next, config, circuit, 0, &mut cues, None);
        }
        Phase::Work => {
            // The exercise is re-resolved from the circuit on every
            // transition; a stale index degrades instead of faulting.
            if let Some(exercise) = circuit.get(state.ex_index) {
                next.completed
                    .insert((state.current_set, exercise.id.clone()));
            }

            if state.ex_index + 1 >= circuit.len() {
                if state.current_set >= config.num_sets {
                    next.phase = Phase::Finished;
                    next.time_left = 0;
                    next.max_time = 0;
                    cues.push(Cue::with_speech(
                        CueKind::Victory,
                        Speech::category_only(SpeechCategory::Complete),
                    ));
                    signal = Some(Signal::Finished);
                } else {
                    next.phase = Phase::SetRest;
                    next.time_left = config.set_rest_duration;
                    next.max_time = config.set_rest_duration;
                    cues.push(rest_cue());
                }
            } else {
                let rest = circuit
                    .get(state.ex_index)
                    .map(|ex| resolve_rest(ex, config))
                    .unwrap_or(config.rest_duration);
                next.phase = Phase::Rest;
                next.time_left = rest;
                next.max_time = rest;
                cues.push(rest_cue());
            }
        }
        Phase::Rest => {
            let index = state.ex_index + 1;
            enter_work(&mut next, config, circuit, index, &mut cues, None);
        }
        Phase::SetRest => {
            let set = state.current_set + 1;
            next.current_set = set;
            enter_work(&mut next, config, circuit, 0, &mut cues, Some(set));
        }
        Phase::Finished => {
            // Terminal; a stray tick changes nothing.
        }
    }

    StepResult {
        state: next,
        cues,
        signal,
    }
}

/// Move into a work phase at `index`, announcing the exercise. When the
/// index no longer resolves (removed mid-run) the duration falls back to
/// the global config and the announcement omits the name.
fn enter_work(
    next: &mut TimerState,
    config: &TimingConfig,
    circuit: &Circuit,
    index: usize,
    cues: &mut Vec<Cue>,
    set: Option<u32>,
) {
    let duration = circuit
        .get(index)
        .map(|ex| resolve_work(ex, config))
        .unwrap_or(config.work_duration);
    next.phase = Phase::Work;
    next.ex_index = index;
    next.time_left = duration;
    next.max_time = duration;

    let text = match (circuit.get(index), set) {
        (Some(ex), Some(set)) => format!("Set {set}, {}", ex.name),
        (Some(ex), None) => ex.name.clone(),
        (None, Some(set)) => format!("Set {set}"),
        (None, None) => String::new(),
    };
    cues.push(Cue::with_speech(
        CueKind::Bell,
        Speech::new(text, SpeechCategory::Start),
    ));
}

fn rest_cue() -> Cue {
    Cue::with_speech(
        CueKind::Whistle,
        Speech::new("Rest", SpeechCategory::Rest),
    )
}
