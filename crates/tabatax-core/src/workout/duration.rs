//! Work/rest duration resolution and whole-workout estimates.
//!
//! Pure functions; the engine and the editor both call through here so
//! per-exercise overrides behave identically everywhere.

use super::config::TimingConfig;
use super::exercise::{Circuit, Exercise};

/// Work length in seconds for one exercise.
pub fn resolve_work(exercise: &Exercise, config: &TimingConfig) -> u32 {
    exercise.custom_duration.unwrap_or(config.work_duration)
}

/// Rest length in seconds after one exercise. An explicit zero override
/// is honored; only an absent override falls back to the global value.
pub fn resolve_rest(exercise: &Exercise, config: &TimingConfig) -> u32 {
    exercise.custom_rest.unwrap_or(config.rest_duration)
}

/// Estimated total seconds for the full workout.
///
/// One circuit is each work interval plus the rest that follows it,
/// omitted after the last exercise. Set rest is inserted between sets
/// only. Saturating arithmetic keeps absurd configs from wrapping.
pub fn total_duration(config: &TimingConfig, circuit: &Circuit) -> u32 {
    if circuit.is_empty() {
        return 0;
    }
    let last = circuit.len() - 1;
    let mut single = 0u32;
    for (i, exercise) in circuit.iter().enumerate() {
        single = single.saturating_add(resolve_work(exercise, config));
        if i < last {
            single = single.saturating_add(resolve_rest(exercise, config));
        }
    }
    single.saturating_mul(config.num_sets).saturating_add(
        config
            .num_sets
            .saturating_sub(1)
            .saturating_mul(config.set_rest_duration),
    )
}

/// Render seconds as `m:ss`.
pub fn format_clock(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}
