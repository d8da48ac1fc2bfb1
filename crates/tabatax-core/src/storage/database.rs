//! SQLite-based run history and key-value store.
//!
//! Provides persistent storage for:
//! - Completed workout runs
//! - Run statistics (daily and all-time)
//! - Key-value store for the saved workout document

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};

use crate::error::StorageError;

use super::data_dir;

/// One completed workout run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    pub id: i64,
    pub sets: u32,
    pub exercises: u32,
    /// `(set, exercise)` work intervals actually finished.
    pub work_units: u32,
    pub total_secs: u32,
    pub finished_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Stats {
    pub total_runs: u64,
    pub total_work_units: u64,
    pub total_secs: u64,
    pub today_runs: u64,
}

/// SQLite database for run storage.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `~/.config/tabatax/tabatax.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, StorageError> {
        let path = data_dir()?.join("tabatax.db");
        Self::open_at(&path)
    }

    /// Open a database at an explicit path (tests use a temp dir).
    pub fn open_at(path: &std::path::Path) -> Result<Self, StorageError> {
        let conn = Connection::open(path).map_err(|source| StorageError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    #[cfg(test)]
    pub fn open_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS runs (
                id          INTEGER PRIMARY KEY AUTOINCREMENT,
                sets        INTEGER NOT NULL,
                exercises   INTEGER NOT NULL,
                work_units  INTEGER NOT NULL,
                total_secs  INTEGER NOT NULL,
                finished_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_runs_finished_at ON runs(finished_at);",
        )?;
        Ok(())
    }

    /// Record a completed run.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub fn record_run(
        &self,
        sets: u32,
        exercises: u32,
        work_units: u32,
        total_secs: u32,
        finished_at: DateTime<Utc>,
    ) -> Result<i64, StorageError> {
        self.conn.execute(
            "INSERT INTO runs (sets, exercises, work_units, total_secs, finished_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![sets, exercises, work_units, total_secs, finished_at.to_rfc3339()],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Most recent runs, newest first.
    pub fn recent_runs(&self, limit: u32) -> Result<Vec<RunRecord>, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, sets, exercises, work_units, total_secs, finished_at
             FROM runs ORDER BY finished_at DESC LIMIT ?1",
        )?;
        let rows = stmt.query_map(params![limit], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, u32>(1)?,
                row.get::<_, u32>(2)?,
                row.get::<_, u32>(3)?,
                row.get::<_, u32>(4)?,
                row.get::<_, String>(5)?,
            ))
        })?;

        let mut runs = Vec::new();
        for row in rows {
            let (id, sets, exercises, work_units, total_secs, finished_at) = row?;
            let finished_at = finished_at
                .parse::<DateTime<Utc>>()
                .map_err(|e| StorageError::QueryFailed(e.to_string()))?;
            runs.push(RunRecord {
                id,
                sets,
                exercises,
                work_units,
                total_secs,
                finished_at,
            });
        }
        Ok(runs)
    }

    /// All-time and today's statistics.
    pub fn stats_all(&self) -> Result<Stats, StorageError> {
        let mut stats = Stats::default();

        let row = self.conn.query_row(
            "SELECT COUNT(*), COALESCE(SUM(work_units), 0), COALESCE(SUM(total_secs), 0)
             FROM runs",
            [],
            |row| {
                Ok((
                    row.get::<_, u64>(0)?,
                    row.get::<_, u64>(1)?,
                    row.get::<_, u64>(2)?,
                ))
            },
        )?;
        stats.total_runs = row.0;
        stats.total_work_units = row.1;
        stats.total_secs = row.2;

        let today = Utc::now().date_naive();
        stats.today_runs = self.conn.query_row(
            "SELECT COUNT(*) FROM runs WHERE finished_at >= ?1",
            params![format!("{today}T00:00:00+00:00")],
            |row| row.get::<_, u64>(0),
        )?;

        Ok(stats)
    }

    /// Get a value from the kv store.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Set a value in the kv store.
    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }
}
