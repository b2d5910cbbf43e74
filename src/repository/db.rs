//! Local Slot Storage
//!
//! The persisted representation is a single key-value table in a SQLite
//! file; each slot holds one JSON payload under a fixed key. The recipe
//! collection uses exactly one slot.

use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult};

/// Slot key the recipe collection is stored under
pub const RECIPES_SLOT: &str = "recipes";

/// Shared handle to the storage connection
pub type SharedConnection = Arc<Mutex<Option<Connection>>>;

/// Open (or create) the storage file and ensure the slot table exists.
///
/// Pass `:memory:` for a throwaway database in tests.
pub fn init_db(path: &Path) -> DomainResult<SharedConnection> {
    let conn = Connection::open(path).map_err(|e| DomainError::Internal(e.to_string()))?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS slots (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        (),
    )
    .map_err(|e| DomainError::Internal(e.to_string()))?;

    Ok(Arc::new(Mutex::new(Some(conn))))
}

/// Read a slot's payload; None when the slot was never written
pub fn read_slot(conn: &Connection, key: &str) -> DomainResult<Option<String>> {
    conn.query_row(
        "SELECT value FROM slots WHERE key = ?",
        params![key],
        |row| row.get::<_, String>(0),
    )
    .optional()
    .map_err(|e| DomainError::Internal(e.to_string()))
}

/// Write a slot's payload, replacing prior content
pub fn write_slot(conn: &Connection, key: &str, value: &str) -> DomainResult<()> {
    conn.execute(
        "INSERT OR REPLACE INTO slots (key, value) VALUES (?, ?)",
        params![key, value],
    )
    .map_err(|e| DomainError::Internal(e.to_string()))?;

    Ok(())
}
