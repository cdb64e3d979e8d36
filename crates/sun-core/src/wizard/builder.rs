//! Builder for creating and configuring Wizard instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

use tokio::task;

use super::{Wizard, WizardConfig};
use crate::{
    agents::{MockPlanner, PlanGenerator},
    db,
    draft::{DraftStore, KeyValueStore, SqliteStore},
    error::{Result, WizardError},
};

/// Builder for creating and configuring Wizard instances.
#[derive(Clone, Default)]
pub struct WizardBuilder {
    database_path: Option<PathBuf>,
    store: Option<Arc<dyn KeyValueStore>>,
    generator: Option<Arc<dyn PlanGenerator>>,
    config: WizardConfig,
}

impl WizardBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/sun/sun.db` or `~/.local/share/sun/sun.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses `store` for drafts instead of the SQLite database.
    pub fn with_store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Replaces the default [`MockPlanner`].
    pub fn with_generator(mut self, generator: Arc<dyn PlanGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    pub fn with_config(mut self, config: WizardConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.config.storage_key = key.into();
        self
    }

    pub fn with_autosave_quiet(mut self, quiet: Duration) -> Self {
        self.config.autosave_quiet = quiet;
        self
    }

    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.config.settle_delay = delay;
        self
    }

    /// Builds the wizard and restores any saved draft.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::XdgDirectory` if no default path can be resolved
    /// Returns `WizardError::FileSystem` if the database directory cannot be
    /// created
    /// Returns `WizardError::Database` if database initialization fails
    pub async fn build(self) -> Result<Wizard> {
        let store = match self.store {
            Some(store) => store,
            None => {
                let db_path = match self.database_path {
                    Some(path) => path,
                    None => db::default_database_path()?,
                };
                let sqlite = task::spawn_blocking(move || SqliteStore::open(db_path))
                    .await
                    .map_err(WizardError::join)??;
                Arc::new(sqlite) as Arc<dyn KeyValueStore>
            }
        };

        let generator = self
            .generator
            .unwrap_or_else(|| Arc::new(MockPlanner::new()));
        let drafts = DraftStore::new(store, self.config.storage_key.clone());

        Wizard::open(self.config, drafts, generator).await
    }
}
