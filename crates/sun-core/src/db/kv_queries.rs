//! Key-value table operations.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use crate::error::{DatabaseResultExt, Result};

const SELECT_VALUE_SQL: &str = "SELECT value FROM kv WHERE key = ?1";
const UPSERT_VALUE_SQL: &str = "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";
const DELETE_VALUE_SQL: &str = "DELETE FROM kv WHERE key = ?1";

impl super::Database {
    /// Reads the value stored under `key`.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_VALUE_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to read value")
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn kv_set(&self, key: &str, value: &str) -> Result<()> {
        self.connection
            .execute(UPSERT_VALUE_SQL, params![key, value, Timestamp::now().to_string()])
            .db_context("Failed to write value")?;
        Ok(())
    }

    /// Removes `key`; succeeds when it does not exist.
    pub fn kv_remove(&self, key: &str) -> Result<()> {
        self.connection
            .execute(DELETE_VALUE_SQL, params![key])
            .db_context("Failed to delete value")?;
        Ok(())
    }
}
