use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sound asked of the cue sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CueKind {
    /// Short countdown blip in the last seconds of a phase.
    Tick,
    /// Work interval begins.
    Bell,
    /// Rest begins.
    Whistle,
    /// Whole workout finished.
    Victory,
}

/// Phrase pool the sink draws from when voicing a cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeechCategory {
    Start,
    Rest,
    Complete,
}

impl SpeechCategory {
    /// The bare category word, used to decide whether a speech text is
    /// distinct from its category.
    pub fn word(self) -> &'static str {
        match self {
            SpeechCategory::Start => "start",
            SpeechCategory::Rest => "rest",
            SpeechCategory::Complete => "complete",
        }
    }
}

/// Spoken part of a cue. An empty `text` means the sink announces the
/// category phrase alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Speech {
    pub text: String,
    pub category: SpeechCategory,
}

impl Speech {
    pub fn new(text: impl Into<String>, category: SpeechCategory) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }

    pub fn category_only(category: SpeechCategory) -> Self {
        Self {
            text: String::new(),
            category,
        }
    }
}

/// One semantic notification produced by a phase transition or countdown.
///
/// The state machine only reports these; rendering them (tones, speech,
/// notifications) is entirely the sink's business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cue {
    pub kind: CueKind,
    pub speech: Option<Speech>,
}

impl Cue {
    /// Sound-only cue.
    pub fn sound(kind: CueKind) -> Self {
        Self { kind, speech: None }
    }

    pub fn with_speech(kind: CueKind, speech: Speech) -> Self {
        Self {
            kind,
            speech: Some(speech),
        }
    }
}

/// Every run-controller command produces an Event. Callers log or
/// forward them; events are not cues and carry no audio semantics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        /// Estimated total seconds for the whole workout.
        total_secs: u32,
        at: DateTime<Utc>,
    },
    TimerPaused {
        time_left: u32,
        at: DateTime<Utc>,
    },
    TimerResumed {
        time_left: u32,
        at: DateTime<Utc>,
    },
    TimerReset {
        at: DateTime<Utc>,
    },
    /// The circuit became empty mid-run; the controller dropped to idle.
    RunAborted {
        at: DateTime<Utc>,
    },
    WorkoutCompleted {
        sets: u32,
        /// `(set, exercise)` work intervals actually finished.
        work_units: usize,
        at: DateTime<Utc>,
    },
    ExerciseRemoved {
        id: String,
        /// True when the removed exercise was the active one and the
        /// run was forced back to idle.
        forced_idle: bool,
        at: DateTime<Utc>,
    },
}
