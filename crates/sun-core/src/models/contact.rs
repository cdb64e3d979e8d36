//! CRM contact records and agent outputs about them.

use serde::{Deserialize, Serialize};

use super::{BlueprintHealth, ContactStatus, Trend};

/// Company profile returned by the researcher agent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Enrichment {
    pub industry: String,
    pub recent_news: String,
    pub location: String,
    pub source: String,
}

/// A person in the CRM.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub role: String,
    pub company: String,
    pub blueprint_id: String,
    pub blueprint_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blueprint_health: Option<BlueprintHealth>,
    pub status: ContactStatus,
    /// Human-readable recency, e.g. "2 days ago"
    pub last_contact: String,
    pub email: String,
    pub avatar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment_score: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enriched_data: Option<Enrichment>,
}

impl Contact {
    /// First word of the contact's name.
    pub fn first_name(&self) -> &str {
        self.name.split(' ').next().unwrap_or(&self.name)
    }
}

/// Relationship health as judged by the scorer agent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RelationshipMetrics {
    /// 0-100
    pub score: u8,
    pub reason: String,
    pub trend: Trend,
}

/// Input for the comms agent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmailDraftContext {
    pub recipient_name: String,
    /// Usually the blueprint name
    pub project_context: String,
    pub last_interaction_tone: String,
    pub goal: String,
}

/// A drafted follow-up email.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailDraft {
    pub subject: String,
    pub body: String,
}
