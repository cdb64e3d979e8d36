//! SQLite persistence for drafts and the project portfolio.
//!
//! This module provides the low-level database operations: connection
//! handling, schema management, the key-value table backing the draft store
//! and the projects table backing the portfolio.

use std::path::{Path, PathBuf};

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result, WizardError};

pub mod kv_queries;
pub mod project_queries;
pub mod schema;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

/// Returns the default database path following XDG Base Directory
/// specification.
pub fn default_database_path() -> Result<PathBuf> {
    xdg::BaseDirectories::with_prefix("sun")
        .place_data_file("sun.db")
        .map_err(|e| WizardError::XdgDirectory(e.to_string()))
}
