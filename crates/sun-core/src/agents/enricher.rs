//! The researcher agent: company enrichment from a fixed lookup table.

use std::time::Duration;

use async_trait::async_trait;

use super::{AgentResult, Enricher};
use crate::models::Enrichment;

const SOURCE: &str = "Google Search";

/// Profiles keyed by a lowercase substring of the company name, first match
/// wins: (needle, industry, recent news, location).
const PROFILES: [(&str, &str, &str, &str); 3] = [
    (
        "startup",
        "SaaS / B2B Infrastructure",
        "StartupCo recently closed a $5M Seed round led by Index Ventures to expand their developer platform.",
        "New York, NY",
    ),
    (
        "tech",
        "Enterprise Software",
        "TechFlow announces strategic partnership with Microsoft Azure to accelerate cloud migration services.",
        "Austin, TX",
    ),
    (
        "creative",
        "Digital Design Agency",
        "Creative Inc won the 'Agency of the Year' award at the 2024 Digital Design Awards.",
        "Los Angeles, CA",
    ),
];

/// Looks up a company profile without latency.
pub fn profile_for(company_name: &str) -> Enrichment {
    let needle = company_name.to_lowercase();
    let found = PROFILES
        .iter()
        .find(|(key, ..)| needle.contains(key))
        .map(|&(_, industry, news, location)| (industry.to_string(), news.to_string(), location));

    let (industry, recent_news, location) = found.unwrap_or_else(|| {
        (
            "Technology Services".to_string(),
            format!("{company_name} featured in TechCrunch for innovative AI adoption strategies in Q3."),
            "San Francisco, CA",
        )
    });

    Enrichment {
        industry,
        recent_news,
        location: location.to_string(),
        source: SOURCE.to_string(),
    }
}

/// Enrichment mock with simulated search latency (2 s by default).
#[derive(Debug, Clone)]
pub struct MockEnricher {
    latency: Duration,
}

impl MockEnricher {
    pub fn new() -> Self {
        Self {
            latency: Duration::from_secs(2),
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

impl Default for MockEnricher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Enricher for MockEnricher {
    async fn enrich(&self, company_name: &str) -> AgentResult<Enrichment> {
        tokio::time::sleep(self.latency).await;
        Ok(profile_for(company_name))
    }
}
