//! Markdown formatting for terminal output.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]).
//! Newtype wrappers add context-specific formatting on top: collections get
//! tables and empty-state messages, and [`WizardView`] lays out a whole
//! wizard screen.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Wrappers     │    │    Markdown     │
//! │ (Blueprint,...) │───▶│ (Projects,      │───▶│ (rendered by    │
//! │                 │    │  WizardView)    │    │  the CLI)       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ```rust
//! use sun_core::display::OperationStatus;
//!
//! let done = OperationStatus::success("Draft discarded".to_string());
//! assert_eq!(done.to_string(), "Success: Draft discarded\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod status;
pub mod wizard;

pub use collections::{Contacts, Projects};
pub use datetime::{LocalDateTime, LocalTime};
pub use status::OperationStatus;
pub use wizard::WizardView;
