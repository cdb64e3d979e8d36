//! Wizard configuration.

use std::time::Duration;

use crate::{draft::DEFAULT_STORAGE_KEY, models::Constraints};

/// Tunables for a [`Wizard`](super::Wizard).
#[derive(Debug, Clone, PartialEq)]
pub struct WizardConfig {
    /// Key the draft is stored under
    pub storage_key: String,
    /// Constraints a fresh blueprint starts with
    pub defaults: Constraints,
    /// Edits must pause this long before the draft is written
    pub autosave_quiet: Duration,
    /// Pause between a successful generation and the proposal step
    pub settle_delay: Duration,
    /// `estimatedTimeline` recorded with a generated plan, in days
    pub estimated_timeline_days: u32,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            defaults: Constraints::default(),
            autosave_quiet: Duration::from_secs(2),
            settle_delay: Duration::from_secs(1),
            estimated_timeline_days: 30,
        }
    }
}
