//! Core library for the Sun agency workbench.
//!
//! The centrepiece is a six-step project [`Wizard`] that turns a loosely
//! specified project [`Blueprint`](models::Blueprint) into an execution plan
//! and finally a portfolio [`Project`](models::Project). Around it sit:
//!
//! - [`draft`]: the versioned draft store and debounced autosave
//! - [`agents`]: mocked planner, researcher, scorer and comms agents behind
//!   async traits
//! - [`feasibility`]: live feasibility score and proposal statistics
//! - [`portfolio`]: the SQLite-backed project list
//! - [`display`]: markdown formatting for all of the above
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sun_core::{models::BlueprintEdit, WizardBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut wizard = WizardBuilder::new()
//!     .with_database_path(Some("sun.db"))
//!     .build()
//!     .await?;
//!
//! wizard.edit(BlueprintEdit::ProjectName("Acme Portal".to_string()))?;
//! wizard.next()?;
//!
//! // Persist the debounced autosave before exiting.
//! wizard.flush().await;
//! # Ok(())
//! # }
//! ```

pub mod agents;
pub mod db;
pub mod display;
pub mod draft;
pub mod error;
pub mod feasibility;
pub mod models;
pub mod portfolio;
pub mod wizard;

// Re-export commonly used types
pub use db::{default_database_path, Database};
pub use display::{Contacts, LocalDateTime, OperationStatus, Projects, WizardView};
pub use draft::{Autosaver, DraftStore, KeyValueStore, MemoryStore, SqliteStore};
pub use error::{Result, WizardError};
pub use portfolio::Portfolio;
pub use wizard::{Step, Wizard, WizardBuilder, WizardConfig};
