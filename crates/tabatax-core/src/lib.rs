//! # TabataX Core Library
//!
//! This library provides the core business logic for the TabataX
//! interval-workout timer: a configurable circuit of exercises repeated
//! for a number of sets, alternating work and rest periods with a longer
//! rest between sets. All operations are available to any frontend; the
//! CLI binary is a thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Workout engine**: a tick-driven phase state machine. The
//!   transition logic is a pure function; the caller drives `tick()` at
//!   a 1 Hz cadence while the run is active and dispatches the returned
//!   cues to an injected sink
//! - **Storage**: SQLite-based run history and TOML-based configuration,
//!   plus the JSON workout document shared by export/import and the
//!   saved-workout slot
//! - **Cues**: semantic sound/speech notifications behind the `CueSink`
//!   trait; rendering never happens inside the core
//!
//! ## Key Components
//!
//! - [`WorkoutTimer`]: run controller over the phase state machine
//! - [`Circuit`]: ordered, id-addressed exercise sequence
//! - [`WorkoutDocument`]: interchange format and persistence
//! - [`Database`]: run history and key-value storage
//! - [`AppConfig`]: application configuration

pub mod cue;
pub mod error;
pub mod events;
pub mod storage;
pub mod workout;

pub use cue::{ConsoleSink, CueSink, NullSink};
pub use error::{ConfigError, CoreError, DocumentError, StorageError};
pub use events::{Cue, CueKind, Event, Speech, SpeechCategory};
pub use storage::{AppConfig, Database, RunRecord, Stats, WorkoutDocument};
pub use workout::{
    Circuit, Exercise, Icon, Phase, Status, TimerState, TimingConfig, WorkoutTimer,
};
