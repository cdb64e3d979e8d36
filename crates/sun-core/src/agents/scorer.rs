//! The scorer agent: relationship health per contact.

use std::time::Duration;

use async_trait::async_trait;

use super::{AgentResult, RelationshipScorer};
use crate::models::{RelationshipMetrics, Trend};

/// Scores a contact without latency.
pub fn metrics_for(contact_id: &str) -> RelationshipMetrics {
    let (score, reason, trend) = match contact_id {
        "2" => (
            45,
            "Client expressed concern about timeline in last email (2 days ago). Engagement frequency dropped by 40% compared to last month.",
            Trend::Down,
        ),
        "4" => (
            10,
            "No interaction recorded in >30 days. Project status is Archived.",
            Trend::Neutral,
        ),
        _ => (
            82,
            "Strong engagement patterns. Recent meeting notes indicate high satisfaction with Phase 1 deliverables.",
            Trend::Up,
        ),
    };

    RelationshipMetrics {
        score,
        reason: reason.to_string(),
        trend,
    }
}

/// Scoring mock with simulated thinking time (1.5 s by default).
#[derive(Debug, Clone)]
pub struct MockScorer {
    latency: Duration,
}

impl MockScorer {
    pub fn new() -> Self {
        Self {
            latency: Duration::from_millis(1500),
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

impl Default for MockScorer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RelationshipScorer for MockScorer {
    async fn score(&self, contact_id: &str) -> AgentResult<RelationshipMetrics> {
        tokio::time::sleep(self.latency).await;
        Ok(metrics_for(contact_id))
    }
}
