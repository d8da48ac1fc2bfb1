mod config;
mod duration;
mod engine;
mod exercise;
mod state;
mod timer;

pub use config::TimingConfig;
pub use duration::{format_clock, resolve_rest, resolve_work, total_duration};
pub use engine::{step, Signal, StepResult};
pub use exercise::{Circuit, Exercise, Icon};
pub use state::{Phase, Status, TimerState, GET_READY_SECS};
pub use timer::{TickOutcome, WorkoutTimer};
