//! Simulated agents behind injectable async interfaces.
//!
//! The workbench's "intelligence" is a set of deterministic mocks with
//! artificial latency. Each one sits behind a trait so callers can swap in an
//! instant fake in tests or a real service later:
//!
//! - [`PlanGenerator`] ([`MockPlanner`]): goal + deadline → phased plan, with
//!   streamed progress thoughts
//! - [`Enricher`] ([`MockEnricher`]): company name → company profile
//! - [`RelationshipScorer`] ([`MockScorer`]): contact ID → relationship score
//! - [`EmailDrafter`] ([`MockComms`]): context → follow-up email
//!
//! Lookups are fixed tables keyed the same way as the demo data, so results
//! are reproducible.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{EmailDraft, EmailDraftContext, Enrichment, Plan, RelationshipMetrics};

pub mod comms;
pub mod contacts;
pub mod enricher;
pub mod planner;
pub mod scorer;

pub use comms::MockComms;
pub use enricher::MockEnricher;
pub use planner::{classify, MockPlanner, PlanCategory, THINKING_STEPS};
pub use scorer::MockScorer;

/// Failure reported by an agent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AgentError {
    /// A required input was empty
    #[error("Missing goal or deadline")]
    MissingInput,
    /// The agent could not produce a result
    #[error("{agent} is unavailable: {reason}")]
    Unavailable { agent: String, reason: String },
}

/// Result type alias for agent calls
pub type AgentResult<T> = std::result::Result<T, AgentError>;

/// Produces a phased plan for a goal, reporting progress as it goes.
#[async_trait]
pub trait PlanGenerator: Send + Sync {
    /// Generates a plan. `on_thought` receives human-readable progress lines
    /// in order; they are advisory only.
    async fn generate(
        &self,
        goal: &str,
        deadline: &str,
        on_thought: &mut (dyn FnMut(&str) + Send),
    ) -> AgentResult<Plan>;
}

/// Looks up public information about a company.
#[async_trait]
pub trait Enricher: Send + Sync {
    async fn enrich(&self, company_name: &str) -> AgentResult<Enrichment>;
}

/// Judges the health of the relationship with a contact.
#[async_trait]
pub trait RelationshipScorer: Send + Sync {
    async fn score(&self, contact_id: &str) -> AgentResult<RelationshipMetrics>;
}

/// Drafts follow-up emails.
#[async_trait]
pub trait EmailDrafter: Send + Sync {
    async fn draft(&self, context: &EmailDraftContext) -> AgentResult<EmailDraft>;
}
