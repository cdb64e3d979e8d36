use std::{sync::Arc, time::Duration};

use sun_core::{agents::MockPlanner, Wizard, WizardBuilder};
use tempfile::TempDir;

/// Builder for a wizard on a fresh SQLite file with instant agents.
pub fn test_builder(temp_dir: &TempDir) -> WizardBuilder {
    WizardBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .with_generator(Arc::new(MockPlanner::instant()))
        .with_settle_delay(Duration::ZERO)
}

/// Helper function to create a test wizard
pub async fn create_test_wizard() -> (TempDir, Wizard) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let wizard = test_builder(&temp_dir)
        .build()
        .await
        .expect("Failed to create wizard");
    (temp_dir, wizard)
}
