//! The comms agent: follow-up email drafts.

use std::time::Duration;

use async_trait::async_trait;

use super::{AgentResult, EmailDrafter};
use crate::models::{Contact, EmailDraft, EmailDraftContext};

/// Drafts the email without latency.
pub fn draft_for(ctx: &EmailDraftContext) -> EmailDraft {
    let first_name = ctx.recipient_name.split(' ').next().unwrap_or_default();

    EmailDraft {
        subject: format!("Re: Timeline updates for {}", ctx.project_context),
        body: format!(
            "Hi {first_name},\n\n\
             I wanted to quickly circle back on our last conversation regarding the integration timeline. \n\n\
             I've reviewed the latest velocity metrics from {}, and I'm confident we can address the goal: \"{}\" effectively.\n\n\
             Let me know if you have 10 mins to review the updated Gantt chart this week.\n\n\
             Best,\n\
             [Your Name]",
            ctx.project_context, ctx.goal
        ),
    }
}

impl EmailDraftContext {
    /// Context for following up with `contact` about their blueprint.
    pub fn for_contact(contact: &Contact, goal: impl Into<String>) -> Self {
        Self {
            recipient_name: contact.name.clone(),
            project_context: contact.blueprint_name.clone(),
            last_interaction_tone: "Professional".to_string(),
            goal: goal.into(),
        }
    }
}

/// Email mock with simulated generation time (2.5 s by default).
#[derive(Debug, Clone)]
pub struct MockComms {
    latency: Duration,
}

impl MockComms {
    pub fn new() -> Self {
        Self {
            latency: Duration::from_millis(2500),
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

impl Default for MockComms {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailDrafter for MockComms {
    async fn draft(&self, context: &EmailDraftContext) -> AgentResult<EmailDraft> {
        tokio::time::sleep(self.latency).await;
        Ok(draft_for(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::contacts;

    fn context() -> EmailDraftContext {
        EmailDraftContext {
            recipient_name: "Sarah Kim".to_string(),
            project_context: "Blueprint #097".to_string(),
            last_interaction_tone: "Concerned".to_string(),
            goal: "Reassure on timeline".to_string(),
        }
    }

    #[test]
    fn test_draft_addresses_first_name() {
        let draft = draft_for(&context());
        assert_eq!(draft.subject, "Re: Timeline updates for Blueprint #097");
        assert!(draft.body.starts_with("Hi Sarah,\n\n"));
        assert!(draft.body.contains("metrics from Blueprint #097"));
        assert!(draft.body.contains("the goal: \"Reassure on timeline\" effectively."));
        assert!(draft.body.ends_with("Best,\n[Your Name]"));
    }

    #[test]
    fn test_context_for_contact() {
        let contact = contacts::find("3").unwrap();
        let ctx = EmailDraftContext::for_contact(&contact, "Schedule demo");
        assert_eq!(ctx.recipient_name, "Michael Chen");
        assert_eq!(ctx.project_context, "Blueprint #105");
        assert_eq!(ctx.goal, "Schedule demo");
    }

    #[tokio::test(start_paused = true)]
    async fn test_draft_waits_for_latency() {
        let comms = MockComms::new();
        let started = tokio::time::Instant::now();
        comms.draft(&context()).await.unwrap();
        assert_eq!(started.elapsed(), Duration::from_millis(2500));
    }
}
