//! Workout document interchange and persistence.
//!
//! The document is the one boundary format shared by file export/import
//! and the saved-workout slot in the database: a `config` object plus an
//! `exercises` sequence. Validation happens before anything is applied,
//! so a malformed document never mutates engine or config state.

use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, DocumentError};
use crate::workout::{Circuit, TimingConfig};

use super::database::Database;

/// Fixed key the saved workout lives under in the kv store.
pub const DOCUMENT_KEY: &str = "workout";

/// Persisted/interchange workout document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutDocument {
    pub config: TimingConfig,
    pub exercises: Circuit,
}

impl WorkoutDocument {
    pub fn new(config: TimingConfig, exercises: Circuit) -> Self {
        Self { config, exercises }
    }

    /// Default config over the stock starter circuit.
    pub fn starter() -> Self {
        Self {
            config: TimingConfig::default(),
            exercises: Circuit::starter(),
        }
    }

    /// Parse and validate a document.
    ///
    /// The top-level shape is checked first -- `config` must be an
    /// object, `exercises` a sequence -- so shape problems surface as
    /// [`DocumentError::InvalidShape`] rather than a field-level parse
    /// error deep inside serde.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let obj = value
            .as_object()
            .ok_or(DocumentError::InvalidShape("top level must be an object"))?;
        if !obj.get("config").is_some_and(|v| v.is_object()) {
            return Err(DocumentError::InvalidShape("`config` must be an object"));
        }
        if !obj.get("exercises").is_some_and(|v| v.is_array()) {
            return Err(DocumentError::InvalidShape(
                "`exercises` must be a sequence",
            ));
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// File name for an export, carrying the current UTC date.
    pub fn export_file_name() -> String {
        format!("tabata-workout-{}.json", Utc::now().format("%Y-%m-%d"))
    }

    /// Write the document into `dir` under the dated export name.
    pub fn export_to(&self, dir: &Path) -> Result<PathBuf, CoreError> {
        let path = dir.join(Self::export_file_name());
        std::fs::write(&path, self.to_json()?)?;
        Ok(path)
    }

    /// Read and validate a document from a file.
    pub fn import_from(path: &Path) -> Result<Self, CoreError> {
        let json = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&json)?)
    }

    /// Persist under the fixed key in the kv store.
    pub fn save(&self, db: &Database) -> Result<(), CoreError> {
        db.kv_set(DOCUMENT_KEY, &self.to_json()?)?;
        Ok(())
    }

    /// Load the saved document; `None` when nothing has been saved yet.
    pub fn load(db: &Database) -> Result<Option<Self>, CoreError> {
        match db.kv_get(DOCUMENT_KEY)? {
            Some(json) => Ok(Some(Self::from_json(&json)?)),
            None => Ok(None),
        }
    }
}
