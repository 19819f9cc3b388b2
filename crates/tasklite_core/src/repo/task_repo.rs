//! Task collection repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist the whole task collection as a single JSON blob.
//! - Keep SQL and serialization details inside the persistence boundary.
//!
//! # Invariants
//! - Every `save` overwrites the entire persisted value; there is no
//!   diffing or batching.
//! - `load` distinguishes only "collection present" from "no usable data";
//!   an unparseable blob is the latter, not an error.

use crate::db::DbError;
use crate::model::task::Task;
use log::warn;
use rusqlite::{params, Connection};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed key under which the serialized collection lives in the `kv` table.
const TASKS_KEY: &str = "tasks";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for task collection persistence.
///
/// Only transport-level failures surface here; domain-level misses (unknown
/// id, absent blob) are expressed in the operation signatures instead.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    Serialize(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize task collection: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Blob-level persistence contract for the task collection.
pub trait TaskRepository {
    /// Returns the persisted collection, or `None` when nothing usable is
    /// stored (absent entry and malformed entry are equivalent).
    fn load(&self) -> RepoResult<Option<Vec<Task>>>;

    /// Overwrites the persisted collection with the full current state.
    fn save(&self, tasks: &[Task]) -> RepoResult<()>;
}

/// SQLite-backed task repository storing the collection under a fixed key.
pub struct SqliteTaskRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TaskRepository for SqliteTaskRepository<'_> {
    fn load(&self) -> RepoResult<Option<Vec<Task>>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM kv WHERE key = ?1;")?;
        let mut rows = stmt.query(params![TASKS_KEY])?;

        let Some(row) = rows.next()? else {
            return Ok(None);
        };
        let raw: String = row.get(0)?;

        match serde_json::from_str::<Vec<Task>>(&raw) {
            Ok(tasks) => Ok(Some(tasks)),
            Err(err) => {
                // Malformed blob is treated identically to "no data".
                warn!("event=tasks_load module=repo status=malformed error={err}");
                Ok(None)
            }
        }
    }

    fn save(&self, tasks: &[Task]) -> RepoResult<()> {
        let blob = serde_json::to_string(tasks)?;
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![TASKS_KEY, blob],
        )?;
        Ok(())
    }
}
