//! Display implementations for domain models.
//!
//! Everything renders as markdown so the CLI can hand it straight to the
//! terminal renderer.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{
    feasibility::{format_currency, ProposalStats},
    models::{
        Blueprint, BlueprintHealth, Contact, ContactStatus, DraftStatus, EmailDraft, Enrichment,
        Level, MilestoneStatus, Phase, Plan, Project, ProjectStatus, ProjectType,
        RelationshipMetrics, Trend,
    },
};

macro_rules! display_as_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(
    Level,
    DraftStatus,
    ProjectStatus,
    MilestoneStatus,
    ContactStatus,
    BlueprintHealth,
    Trend,
);

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Writes `value`, or "Not set" when it is empty.
fn or_unset(value: &str) -> &str {
    if value.is_empty() {
        "Not set"
    } else {
        value
    }
}

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "None".to_string()
    } else {
        items.join(", ")
    }
}

impl fmt::Display for Blueprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.identity.project_name.is_empty() {
            "Untitled project"
        } else {
            self.identity.project_name.as_str()
        };
        writeln!(f, "# {name}")?;
        writeln!(f)?;

        writeln!(f, "## Basics")?;
        writeln!(f)?;
        writeln!(f, "- Client: {}", or_unset(&self.identity.client_name))?;
        writeln!(f, "- Website: {}", or_unset(&self.identity.website))?;
        writeln!(f)?;

        writeln!(f, "## Overview")?;
        writeln!(f)?;
        writeln!(f, "- Type: {}", self.intent.project_type)?;
        writeln!(f, "- Industry: {}", or_unset(&self.intent.industry))?;
        writeln!(f, "- Goals: {}", list_or_none(&self.intent.goals))?;
        writeln!(f, "- Integrations: {}", list_or_none(&self.intent.integrations))?;
        writeln!(f)?;

        let c = &self.constraints;
        writeln!(f, "## Constraints")?;
        writeln!(f)?;
        writeln!(f, "- Budget: {} {}", format_currency(c.budget), c.currency)?;
        writeln!(f, "- Deadline: {}", or_unset(&c.deadline))?;
        writeln!(f, "- Urgency: {}", c.urgency)?;
        writeln!(f)?;

        writeln!(
            f,
            "_Draft {} · updated {}_",
            self.meta.status,
            LocalDateTime(&self.meta.last_updated)
        )
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}", self.title)?;
        writeln!(f)?;
        for task in &self.tasks {
            writeln!(f, "- **{}** ({}, {})", task.title, task.duration, task.role)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Execution plan: {}", self.goal)?;
        writeln!(f)?;
        writeln!(f, "- Deadline: {}", self.deadline)?;
        writeln!(
            f,
            "- {} phases, {} tasks",
            self.phases.len(),
            self.task_count()
        )?;
        writeln!(f)?;
        for phase in &self.phases {
            write!(f, "{phase}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ProposalStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- Tasks: {}", self.tasks)?;
        writeln!(f, "- Team: {} roles", self.team_size)?;
        writeln!(f, "- Duration: {} weeks", self.duration_weeks)?;
        writeln!(f, "- Budget: {}", format_currency(self.budget))
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} ({})", self.title, self.status)?;
        writeln!(f)?;
        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Client: {}", self.client)?;
        writeln!(
            f,
            "- Progress: {}% ({}/{} tasks)",
            self.progress, self.task_stats.completed, self.task_stats.total
        )?;
        writeln!(f, "- Due: {}", self.due_date)?;
        writeln!(f, "- Team: {}", self.team.join(", "))?;
        let m = &self.next_milestone;
        writeln!(f, "- Next milestone: {} (due {}, {})", m.title, m.due_date, m.status)?;
        if let Some(risk) = &self.risk_factor {
            match &risk.reason {
                Some(reason) => writeln!(f, "- Risk: {} ({reason})", risk.level)?,
                None => writeln!(f, "- Risk: {}", risk.level)?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for Enrichment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- Industry: {}", self.industry)?;
        writeln!(f, "- Location: {}", self.location)?;
        writeln!(f, "- News: {}", self.recent_news)?;
        writeln!(f, "- Source: {}", self.source)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} ({})", self.name, self.status)?;
        writeln!(f)?;
        writeln!(f, "- {} at {}", self.role, self.company)?;
        writeln!(f, "- Email: {}", self.email)?;
        match self.blueprint_health {
            Some(health) => writeln!(f, "- {}: {health}", self.blueprint_name)?,
            None => writeln!(f, "- {}", self.blueprint_name)?,
        }
        writeln!(f, "- Last contact: {}", self.last_contact)?;
        if let Some(score) = self.sentiment_score {
            writeln!(f, "- Sentiment: {score}/100")?;
        }
        if let Some(enriched) = &self.enriched_data {
            writeln!(f)?;
            write!(f, "{enriched}")?;
        }
        Ok(())
    }
}

impl fmt::Display for RelationshipMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "**Relationship score: {}/100** ({})", self.score, self.trend.with_icon())?;
        writeln!(f)?;
        writeln!(f, "{}", self.reason)
    }
}

impl fmt::Display for EmailDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "**Subject:** {}", self.subject)?;
        writeln!(f)?;
        for line in self.body.lines() {
            writeln!(f, "> {line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use crate::{
        agents::{contacts, planner::plan_for},
        models::{Blueprint, BlueprintEdit, ProjectType},
        portfolio::sample_projects,
    };

    #[test]
    fn test_blueprint_summary() {
        let mut blueprint = Blueprint::initial(Timestamp::now());
        blueprint.apply(BlueprintEdit::ProjectName("Acme Portal".to_string()));
        blueprint.apply(BlueprintEdit::ProjectType(ProjectType::Mobile));
        blueprint.apply(BlueprintEdit::AddGoal("Launch MVP".to_string()));

        let output = blueprint.to_string();
        assert!(output.starts_with("# Acme Portal\n"));
        assert!(output.contains("- Client: Not set"));
        assert!(output.contains("- Type: Mobile App"));
        assert!(output.contains("- Goals: Launch MVP"));
        assert!(output.contains("- Integrations: None"));
        assert!(output.contains("- Budget: $15,000 USD"));
        assert!(output.contains("- Urgency: Medium"));
    }

    #[test]
    fn test_plan_lists_phases_and_tasks() {
        let output = plan_for("Brand refresh", "2026-01-01").to_string();
        assert!(output.contains("## Execution plan: Brand refresh"));
        assert!(output.contains("- 3 phases, 8 tasks"));
        assert!(output.contains("### Strategy & Concept"));
        assert!(output.contains("- **Campaign Key Messaging** (3 days, Copywriter)"));
    }

    #[test]
    fn test_project_shows_risk() {
        let projects = sample_projects();
        let output = projects[0].to_string();
        assert!(output.starts_with("### Alpha CRM Integration (At Risk)"));
        assert!(output.contains("- Progress: 45% (10/24 tasks)"));
        assert!(output.contains("- Risk: High (Scope Creep)"));
        assert!(!projects[1].to_string().contains("Risk:"));
    }

    #[test]
    fn test_contact_card() {
        let sarah = contacts::find("2").unwrap();
        let output = sarah.to_string();
        assert!(output.starts_with("### Sarah Kim (In Review)"));
        assert!(output.contains("- Blueprint #097: At Risk"));
    }
}
