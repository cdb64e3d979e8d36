//! Blueprint model: the wizard's in-progress project definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{DraftStatus, Level, Phase, ProjectType};

/// Who the project is for (step 1).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Required to leave step 1
    pub project_name: String,
    pub client_name: String,
    pub website: String,
}

/// What is being built (step 2).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Intent {
    /// Required to leave step 2
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    pub industry: String,
    /// Ordered, duplicate-free goal tags
    pub goals: Vec<String>,
    pub integrations: Vec<String>,
}

/// Budget and timeline (step 3).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Constraints {
    pub budget: u64,
    pub currency: String,
    /// Calendar date (`YYYY-MM-DD`) or empty when unset
    pub deadline: String,
    pub urgency: Level,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            budget: 15_000,
            currency: "USD".to_string(),
            deadline: String::new(),
            urgency: Level::Medium,
        }
    }
}

/// One entry of a risk analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RiskFactor {
    pub id: String,
    pub category: String,
    pub probability: Level,
    pub impact: Level,
    pub mitigation: String,
}

/// Output of plan generation, persisted with the draft.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Artifacts {
    /// Work breakdown structure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wbs: Option<Vec<Phase>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_analysis: Option<Vec<RiskFactor>>,
    /// Estimated duration in days
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_timeline: Option<u32>,
}

/// Bookkeeping for the draft.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    /// Wizard step the draft was saved on (1-6)
    #[serde(default)]
    pub step: u8,
    #[serde(default = "Timestamp::now")]
    pub last_updated: Timestamp,
    #[serde(default)]
    pub status: DraftStatus,
}

impl Default for Meta {
    fn default() -> Self {
        Self {
            step: 1,
            last_updated: Timestamp::now(),
            status: DraftStatus::Draft,
        }
    }
}

/// The complete in-progress project-definition record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Blueprint {
    pub identity: Identity,
    pub intent: Intent,
    pub constraints: Constraints,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifacts: Option<Artifacts>,
    #[serde(default)]
    pub meta: Meta,
}

/// A single field-level change to a [`Blueprint`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlueprintEdit {
    ProjectName(String),
    ClientName(String),
    Website(String),
    ProjectType(ProjectType),
    Industry(String),
    AddGoal(String),
    RemoveGoal(String),
    AddIntegration(String),
    RemoveIntegration(String),
    Budget(u64),
    Currency(String),
    Deadline(String),
    Urgency(Level),
}

/// Appends a trimmed tag unless it is blank or already present.
fn push_unique(list: &mut Vec<String>, tag: &str) -> bool {
    let tag = tag.trim();
    if tag.is_empty() || list.iter().any(|t| t == tag) {
        return false;
    }
    list.push(tag.to_string());
    true
}

fn remove_all(list: &mut Vec<String>, tag: &str) -> bool {
    let before = list.len();
    list.retain(|t| t != tag);
    list.len() != before
}

impl Blueprint {
    /// A fresh blueprint whose `lastUpdated` is `now`.
    pub fn initial(now: Timestamp) -> Self {
        Self {
            meta: Meta {
                last_updated: now,
                ..Meta::default()
            },
            ..Self::default()
        }
    }

    /// Adds a goal tag; returns false when it was blank or a duplicate.
    pub fn add_goal(&mut self, tag: &str) -> bool {
        push_unique(&mut self.intent.goals, tag)
    }

    pub fn remove_goal(&mut self, tag: &str) -> bool {
        remove_all(&mut self.intent.goals, tag)
    }

    /// The goal handed to the plan generator: first goal tag, else the
    /// project name.
    pub fn primary_goal(&self) -> &str {
        self.intent
            .goals
            .first()
            .map(String::as_str)
            .unwrap_or(&self.identity.project_name)
    }

    /// Generated work breakdown, if a plan has been produced.
    pub fn wbs(&self) -> Option<&[Phase]> {
        self.artifacts.as_ref()?.wbs.as_deref()
    }

    /// Applies an edit and reports whether anything changed.
    pub fn apply(&mut self, edit: BlueprintEdit) -> bool {
        fn set<T: PartialEq>(slot: &mut T, value: T) -> bool {
            if *slot == value {
                return false;
            }
            *slot = value;
            true
        }

        match edit {
            BlueprintEdit::ProjectName(v) => set(&mut self.identity.project_name, v),
            BlueprintEdit::ClientName(v) => set(&mut self.identity.client_name, v),
            BlueprintEdit::Website(v) => set(&mut self.identity.website, v),
            BlueprintEdit::ProjectType(v) => set(&mut self.intent.project_type, v),
            BlueprintEdit::Industry(v) => set(&mut self.intent.industry, v),
            BlueprintEdit::AddGoal(v) => self.add_goal(&v),
            BlueprintEdit::RemoveGoal(v) => self.remove_goal(&v),
            BlueprintEdit::AddIntegration(v) => push_unique(&mut self.intent.integrations, &v),
            BlueprintEdit::RemoveIntegration(v) => remove_all(&mut self.intent.integrations, &v),
            BlueprintEdit::Budget(v) => set(&mut self.constraints.budget, v),
            BlueprintEdit::Currency(v) => set(&mut self.constraints.currency, v),
            BlueprintEdit::Deadline(v) => set(&mut self.constraints.deadline, v),
            BlueprintEdit::Urgency(v) => set(&mut self.constraints.urgency, v),
        }
    }
}
