//! Data models for the wizard, generated plans, projects and CRM contacts.
//!
//! Display implementations for these models live in
//! [`crate::display::models`] so that formatting stays separate from the data
//! structures.
//!
//! Every model serializes to the camelCase JSON shape that the draft store
//! persists, with timestamps as ISO-8601 strings.
//!
//! # Examples
//!
//! ```rust
//! use sun_core::models::{Blueprint, BlueprintEdit, ProjectType};
//! use jiff::Timestamp;
//!
//! let mut blueprint = Blueprint::initial(Timestamp::now());
//! blueprint.apply(BlueprintEdit::ProjectName("Acme Portal".to_string()));
//! blueprint.apply(BlueprintEdit::ProjectType(ProjectType::Web));
//! assert!(blueprint.add_goal("Launch MVP"));
//! assert!(!blueprint.add_goal("Launch MVP"));
//! assert_eq!(blueprint.primary_goal(), "Launch MVP");
//! ```

pub mod blueprint;
pub mod contact;
pub mod filters;
pub mod plan;
pub mod project;
pub mod status;


pub use blueprint::{Artifacts, Blueprint, BlueprintEdit, Constraints, Identity, Intent, Meta, RiskFactor};
pub use contact::{Contact, EmailDraft, EmailDraftContext, Enrichment, RelationshipMetrics};
pub use filters::ProjectFilter;
pub use plan::{Phase, Plan, Task};
pub use project::{Milestone, Project, ProjectRisk, TaskStats};
pub use status::{
    BlueprintHealth, ContactStatus, DraftStatus, Level, MilestoneStatus, ProjectStatus,
    ProjectType, Trend,
};
