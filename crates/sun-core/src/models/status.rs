//! Status and category enumerations shared by the wizard, projects and CRM.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lowercases and strips separators so `"On Track"`, `"on-track"` and
/// `"ontrack"` parse to the same variant.
fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Kind of project chosen on the intent step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ProjectType {
    /// Nothing chosen yet (serialized as the empty string)
    #[default]
    #[serde(rename = "")]
    Unset,
    Web,
    Mobile,
    Marketing,
    Integration,
}

impl FromStr for ProjectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "" => Ok(ProjectType::Unset),
            "web" => Ok(ProjectType::Web),
            "mobile" => Ok(ProjectType::Mobile),
            "marketing" => Ok(ProjectType::Marketing),
            "integration" => Ok(ProjectType::Integration),
            _ => Err(format!("Invalid project type: {s}")),
        }
    }
}

impl ProjectType {
    /// Serialized representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Unset => "",
            ProjectType::Web => "Web",
            ProjectType::Mobile => "Mobile",
            ProjectType::Marketing => "Marketing",
            ProjectType::Integration => "Integration",
        }
    }

    /// Card label shown on the intent step.
    pub fn label(&self) -> &'static str {
        match self {
            ProjectType::Unset => "Not selected",
            ProjectType::Web => "Web Platform",
            ProjectType::Mobile => "Mobile App",
            ProjectType::Marketing => "Campaign",
            ProjectType::Integration => "Integration",
        }
    }

    pub fn is_set(&self) -> bool {
        *self != ProjectType::Unset
    }
}

/// Three-point scale used for urgency, risk probability/impact and risk level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Level {
    Low,
    #[default]
    Medium,
    High,
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "low" => Ok(Level::Low),
            "medium" => Ok(Level::Medium),
            "high" => Ok(Level::High),
            _ => Err(format!("Invalid level: {s}")),
        }
    }
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Low => "Low",
            Level::Medium => "Medium",
            Level::High => "High",
        }
    }
}

/// Lifecycle of a wizard draft.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DraftStatus {
    /// Being edited
    #[default]
    Draft,
    /// Plan generation in flight
    Processing,
    /// Plan generated and awaiting approval
    Ready,
    /// Handed off as a project
    Committed,
}

impl FromStr for DraftStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "draft" => Ok(DraftStatus::Draft),
            "processing" => Ok(DraftStatus::Processing),
            "ready" => Ok(DraftStatus::Ready),
            "committed" => Ok(DraftStatus::Committed),
            _ => Err(format!("Invalid draft status: {s}")),
        }
    }
}

impl DraftStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftStatus::Draft => "draft",
            DraftStatus::Processing => "processing",
            DraftStatus::Ready => "ready",
            DraftStatus::Committed => "committed",
        }
    }
}

/// Delivery health of a project.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ProjectStatus {
    #[default]
    #[serde(rename = "On Track")]
    OnTrack,
    #[serde(rename = "At Risk")]
    AtRisk,
    Delayed,
    Completed,
}

impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "ontrack" => Ok(ProjectStatus::OnTrack),
            "atrisk" => Ok(ProjectStatus::AtRisk),
            "delayed" => Ok(ProjectStatus::Delayed),
            "completed" => Ok(ProjectStatus::Completed),
            _ => Err(format!("Invalid project status: {s}")),
        }
    }
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::OnTrack => "On Track",
            ProjectStatus::AtRisk => "At Risk",
            ProjectStatus::Delayed => "Delayed",
            ProjectStatus::Completed => "Completed",
        }
    }

    /// At Risk and Delayed projects show up under the risk filter.
    pub fn is_at_risk(&self) -> bool {
        matches!(self, ProjectStatus::AtRisk | ProjectStatus::Delayed)
    }
}

/// State of a project milestone.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MilestoneStatus {
    #[default]
    Pending,
    Completed,
    Blocked,
}

impl MilestoneStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MilestoneStatus::Pending => "pending",
            MilestoneStatus::Completed => "completed",
            MilestoneStatus::Blocked => "blocked",
        }
    }
}

/// CRM status of a contact.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ContactStatus {
    Active,
    #[serde(rename = "In Review")]
    InReview,
    Archived,
}

impl ContactStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactStatus::Active => "Active",
            ContactStatus::InReview => "In Review",
            ContactStatus::Archived => "Archived",
        }
    }
}

/// Health of the blueprint a contact is attached to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BlueprintHealth {
    Healthy,
    #[serde(rename = "At Risk")]
    AtRisk,
    #[serde(rename = "On Track")]
    OnTrack,
}

impl BlueprintHealth {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlueprintHealth::Healthy => "Healthy",
            BlueprintHealth::AtRisk => "At Risk",
            BlueprintHealth::OnTrack => "On Track",
        }
    }
}

/// Direction of a relationship score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Neutral => "neutral",
        }
    }

    /// Arrow used when rendering scores.
    pub fn with_icon(&self) -> &'static str {
        match self {
            Trend::Up => "↑ up",
            Trend::Down => "↓ down",
            Trend::Neutral => "→ neutral",
        }
    }
}
