//! Draft persistence for the project wizard.
//!
//! A draft is the serialized [`Blueprint`] stored as one JSON string under a
//! versioned key. Drafts written under a different key version are simply
//! invisible; there is no migration.
//!
//! Storage problems never surface as errors here. A failed save reports
//! `false`, and a missing, unreadable or malformed draft loads as `None`.
//! Every such condition is logged.
//!
//! ```text
//! ┌──────────────┐ schedule  ┌──────────────┐  save/load  ┌──────────────┐
//! │    Wizard    │──────────▶│  Autosaver   │────────────▶│  DraftStore  │
//! │  (edits)     │  cancel   │  (debounce)  │             │ (JSON + key) │
//! └──────────────┘           └──────────────┘             └──────┬───────┘
//!                                                                │
//!                                                  ┌─────────────▼─────────┐
//!                                                  │ KeyValueStore         │
//!                                                  │ (MemoryStore/SQLite)  │
//!                                                  └───────────────────────┘
//! ```

use std::{fmt, sync::Arc};

use log::{debug, error, warn};
use serde_json::Value;

use crate::models::Blueprint;

pub mod autosave;
pub mod store;

pub use autosave::Autosaver;
pub use store::{KeyValueStore, MemoryStore, SqliteStore};

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "sun_ai_wizard_draft_v1";

/// Sections that must be present for a stored value to count as a draft.
const REQUIRED_SECTIONS: [&str; 3] = ["identity", "intent", "constraints"];

/// Reads and writes the wizard draft under a single key.
#[derive(Clone)]
pub struct DraftStore {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl fmt::Debug for DraftStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DraftStore").field("key", &self.key).finish()
    }
}

impl DraftStore {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Persists the blueprint. Returns `false` if it could not be written.
    pub fn save(&self, blueprint: &Blueprint) -> bool {
        let serialized = match serde_json::to_string(blueprint) {
            Ok(s) => s,
            Err(e) => {
                error!("Failed to serialize wizard draft: {e}");
                return false;
            }
        };

        match self.store.set(&self.key, &serialized) {
            Ok(()) => {
                debug!("Saved wizard draft under '{}'", self.key);
                true
            }
            Err(e) => {
                error!("Failed to save wizard draft: {e}");
                false
            }
        }
    }

    /// Loads the stored blueprint, or `None` when there is no usable draft.
    pub fn load(&self) -> Option<Blueprint> {
        let serialized = match self.store.get(&self.key) {
            Ok(Some(s)) if !s.is_empty() => s,
            Ok(_) => return None,
            Err(e) => {
                error!("Failed to load wizard draft: {e}");
                return None;
            }
        };

        let value: Value = match serde_json::from_str(&serialized) {
            Ok(v) => v,
            Err(e) => {
                error!("Failed to parse wizard draft: {e}");
                return None;
            }
        };

        if !has_required_sections(&value) {
            warn!("Ignoring wizard draft without identity, intent and constraints");
            return None;
        }

        match serde_json::from_value(value) {
            Ok(blueprint) => Some(blueprint),
            Err(e) => {
                warn!("Ignoring malformed wizard draft: {e}");
                None
            }
        }
    }

    /// Removes the stored draft. Safe to call when nothing is stored.
    pub fn clear(&self) {
        if let Err(e) = self.store.remove(&self.key) {
            error!("Failed to clear wizard draft: {e}");
        }
    }
}

fn has_required_sections(value: &Value) -> bool {
    REQUIRED_SECTIONS
        .iter()
        .all(|section| value.get(section).is_some_and(|v| !v.is_null()))
}
