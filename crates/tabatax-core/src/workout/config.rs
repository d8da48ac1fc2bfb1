//! Global timing configuration.
//!
//! All values are whole seconds (`num_sets` is a count). The interchange
//! format is permissive the way the original editor was: negative or
//! fractional numbers are coerced to non-negative integers at the
//! boundary instead of being rejected.

use std::fmt;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// Work/rest lengths and set count shared by every exercise that has no
/// override of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingConfig {
    #[serde(default = "default_work", deserialize_with = "secs")]
    pub work_duration: u32,
    #[serde(default = "default_rest", deserialize_with = "secs")]
    pub rest_duration: u32,
    /// Rest between sets. Never overridden per exercise.
    #[serde(default = "default_set_rest", deserialize_with = "secs")]
    pub set_rest_duration: u32,
    #[serde(default = "default_sets", deserialize_with = "secs")]
    pub num_sets: u32,
}

fn default_work() -> u32 {
    20
}
fn default_rest() -> u32 {
    10
}
fn default_set_rest() -> u32 {
    30
}
fn default_sets() -> u32 {
    3
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            work_duration: default_work(),
            rest_duration: default_rest(),
            set_rest_duration: default_set_rest(),
            num_sets: default_sets(),
        }
    }
}

struct SecsVisitor;

impl de::Visitor<'_> for SecsVisitor {
    type Value = u32;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a non-negative number")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<u32, E> {
        Ok(v.clamp(0, u32::MAX as i64) as u32)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<u32, E> {
        Ok(v.min(u32::MAX as u64) as u32)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<u32, E> {
        if v.is_finite() && v > 0.0 {
            Ok(v.min(u32::MAX as f64) as u32)
        } else {
            Ok(0)
        }
    }
}

/// Deserialize a seconds field, clamping invalid input to 0.
pub(crate) fn secs<'de, D: Deserializer<'de>>(de: D) -> Result<u32, D::Error> {
    de.deserialize_any(SecsVisitor)
}

/// Deserialize an optional seconds field. Absent and `null` both mean
/// "no override"; an explicit 0 survives.
pub(crate) fn opt_secs<'de, D: Deserializer<'de>>(de: D) -> Result<Option<u32>, D::Error> {
    struct OptVisitor;

    impl<'de> de::Visitor<'de> for OptVisitor {
        type Value = Option<u32>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a number of seconds or null")
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D: Deserializer<'de>>(self, de: D) -> Result<Self::Value, D::Error> {
            secs(de).map(Some)
        }
    }

    de.deserialize_option(OptVisitor)
}

/// Like [`opt_secs`] but a value of 0 normalizes to "no override", for
/// fields where only a positive override is meaningful.
pub(crate) fn opt_positive_secs<'de, D: Deserializer<'de>>(de: D) -> Result<Option<u32>, D::Error> {
    Ok(opt_secs(de)?.filter(|&s| s > 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_stock_workout() {
        let cfg = TimingConfig::default();
        assert_eq!(cfg.work_duration, 20);
        assert_eq!(cfg.rest_duration, 10);
        assert_eq!(cfg.set_rest_duration, 30);
        assert_eq!(cfg.num_sets, 3);
    }

    #[test]
    fn interchange_uses_camel_case_names() {
        let cfg = TimingConfig::default();
        let json = serde_json::to_value(&cfg).unwrap();
        assert_eq!(json["workDuration"], 20);
        assert_eq!(json["setRestDuration"], 30);
        assert_eq!(json["numSets"], 3);
    }

    #[test]
    fn negative_values_clamp_to_zero() {
        let cfg: TimingConfig = serde_json::from_str(
            r#"{"workDuration": -5, "restDuration": 10, "setRestDuration": -1, "numSets": 2}"#,
        )
        .unwrap();
        assert_eq!(cfg.work_duration, 0);
        assert_eq!(cfg.set_rest_duration, 0);
        assert_eq!(cfg.num_sets, 2);
    }

    #[test]
    fn fractional_values_truncate() {
        let cfg: TimingConfig =
            serde_json::from_str(r#"{"workDuration": 20.9, "numSets": 2.5}"#).unwrap();
        assert_eq!(cfg.work_duration, 20);
        assert_eq!(cfg.num_sets, 2);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: TimingConfig = serde_json::from_str(r#"{"numSets": 5}"#).unwrap();
        assert_eq!(cfg.num_sets, 5);
        assert_eq!(cfg.work_duration, 20);
    }
}
