//! Full-screen rendering of a wizard session.

use std::fmt;

use super::datetime::LocalTime;
use crate::{
    feasibility::format_currency,
    wizard::{Step, Wizard},
};

/// Sidebar, current step and live preview of a [`Wizard`].
pub struct WizardView<'a>(pub &'a Wizard);

impl WizardView<'_> {
    fn sidebar(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let current = self.0.step();
        writeln!(f, "## Steps")?;
        writeln!(f)?;
        for step in Step::ALL {
            let marker = if step < current {
                "✓"
            } else if step == current {
                "▶"
            } else {
                " "
            };
            writeln!(
                f,
                "- {marker} {}. **{}**: {}",
                step.number(),
                step.label(),
                step.description()
            )?;
        }
        writeln!(f)
    }

    fn current_step(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let wizard = self.0;
        let blueprint = wizard.blueprint();
        let step = wizard.step();
        writeln!(f, "## Step {}: {}", step.number(), step.label())?;
        writeln!(f)?;

        match step {
            Step::Identity => {
                let id = &blueprint.identity;
                writeln!(f, "- Project name: {}", id.project_name)?;
                writeln!(f, "- Client: {}", id.client_name)?;
                writeln!(f, "- Website: {}", id.website)?;
            }
            Step::Intent => {
                let intent = &blueprint.intent;
                writeln!(f, "- Type: {}", intent.project_type)?;
                writeln!(f, "- Industry: {}", intent.industry)?;
                writeln!(f, "- Goals: {}", intent.goals.join(", "))?;
                writeln!(f, "- Integrations: {}", intent.integrations.join(", "))?;
            }
            Step::Constraints => {
                let c = &blueprint.constraints;
                writeln!(f, "- Budget: {} {}", format_currency(c.budget), c.currency)?;
                writeln!(f, "- Deadline: {}", c.deadline)?;
                writeln!(f, "- Urgency: {}", c.urgency)?;
            }
            Step::Review => write!(f, "{blueprint}")?,
            Step::Architecting => {
                for thought in wizard.thoughts() {
                    writeln!(f, "- {thought}")?;
                }
            }
            Step::Proposal => {
                if let Some(plan) = wizard.plan() {
                    write!(f, "{plan}")?;
                }
            }
        }
        writeln!(f)
    }

    fn preview(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let wizard = self.0;
        writeln!(f, "## Preview")?;
        writeln!(f)?;

        match wizard.proposal_stats() {
            Some(stats) if wizard.step() == Step::Proposal => {
                writeln!(f, "**Execution snapshot**")?;
                writeln!(f)?;
                write!(f, "{stats}")?;
            }
            _ => {
                writeln!(f, "- Feasibility: {}/100", wizard.feasibility())?;
                if wizard.step() <= Step::Review {
                    let next = if wizard.can_proceed() { "ready" } else { "incomplete" };
                    writeln!(f, "- This step: {next}")?;
                }
            }
        }

        match wizard.last_saved() {
            _ if wizard.has_unsaved_changes() => writeln!(f, "- Draft: unsaved changes"),
            Some(saved) => writeln!(f, "- Draft: saved at {}", LocalTime(&saved)),
            None => writeln!(f, "- Draft: not saved in this session"),
        }
    }
}

impl fmt::Display for WizardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Project Wizard")?;
        writeln!(f)?;
        self.sidebar(f)?;
        self.current_step(f)?;
        self.preview(f)
    }
}
