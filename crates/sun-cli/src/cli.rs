//! Subcommand definitions.
//!
//! Argument structs stay free of core types where clap needs its own
//! representation and convert into core edits with `From`:
//!
//! ```text
//! User Input → CLI Args (clap) → BlueprintEdit / ProjectFilter → Wizard
//! ```

use clap::{Args, Subcommand, ValueEnum};
use jiff::civil::Date;
use sun_core::models::{BlueprintEdit, Level, ProjectFilter, ProjectType};

/// Set the basics (step 1)
#[derive(Args)]
pub struct IdentityArgs {
    /// Name of the project
    #[arg(long)]
    pub project_name: Option<String>,
    /// Client the project is for
    #[arg(long)]
    pub client: Option<String>,
    /// Client website
    #[arg(long)]
    pub website: Option<String>,
}

impl From<IdentityArgs> for Vec<BlueprintEdit> {
    fn from(val: IdentityArgs) -> Self {
        let mut edits = Vec::new();
        edits.extend(val.project_name.map(BlueprintEdit::ProjectName));
        edits.extend(val.client.map(BlueprintEdit::ClientName));
        edits.extend(val.website.map(BlueprintEdit::Website));
        edits
    }
}

/// Set the overview (step 2)
#[derive(Args)]
pub struct IntentArgs {
    /// Project type: web, mobile, marketing or integration
    #[arg(long = "type")]
    pub project_type: Option<ProjectType>,
    /// Client industry
    #[arg(long)]
    pub industry: Option<String>,
    /// Goal to add (repeatable)
    #[arg(long = "goal")]
    pub goals: Vec<String>,
    /// Goal to remove (repeatable)
    #[arg(long = "remove-goal")]
    pub remove_goals: Vec<String>,
    /// Integration to add (repeatable)
    #[arg(long = "integration")]
    pub integrations: Vec<String>,
    /// Integration to remove (repeatable)
    #[arg(long = "remove-integration")]
    pub remove_integrations: Vec<String>,
}

impl From<IntentArgs> for Vec<BlueprintEdit> {
    fn from(val: IntentArgs) -> Self {
        let mut edits = Vec::new();
        edits.extend(val.project_type.map(BlueprintEdit::ProjectType));
        edits.extend(val.industry.map(BlueprintEdit::Industry));
        edits.extend(val.remove_goals.into_iter().map(BlueprintEdit::RemoveGoal));
        edits.extend(val.goals.into_iter().map(BlueprintEdit::AddGoal));
        edits.extend(
            val.remove_integrations
                .into_iter()
                .map(BlueprintEdit::RemoveIntegration),
        );
        edits.extend(val.integrations.into_iter().map(BlueprintEdit::AddIntegration));
        edits
    }
}

/// Set budget and timeline (step 3)
#[derive(Args)]
pub struct ConstraintsArgs {
    /// Budget in whole currency units
    #[arg(long)]
    pub budget: Option<u64>,
    /// Currency code
    #[arg(long)]
    pub currency: Option<String>,
    /// Deadline as YYYY-MM-DD
    #[arg(long)]
    pub deadline: Option<Date>,
    /// Urgency: low, medium or high
    #[arg(long)]
    pub urgency: Option<Level>,
}

impl From<ConstraintsArgs> for Vec<BlueprintEdit> {
    fn from(val: ConstraintsArgs) -> Self {
        let mut edits = Vec::new();
        edits.extend(val.budget.map(BlueprintEdit::Budget));
        edits.extend(val.currency.map(BlueprintEdit::Currency));
        edits.extend(val.deadline.map(|d| BlueprintEdit::Deadline(d.to_string())));
        edits.extend(val.urgency.map(BlueprintEdit::Urgency));
        edits
    }
}

#[derive(Subcommand)]
pub enum WizardCommands {
    /// Show the current step
    Show,
    /// Continue to the next step
    Next,
    /// Return to the previous step
    Back,
    /// Jump from review to step 1-3
    Goto {
        #[arg(value_parser = clap::value_parser!(u8).range(1..=6))]
        step: u8,
    },
    /// Edit the basics
    Identity(IdentityArgs),
    /// Edit the overview
    Intent(IntentArgs),
    /// Edit budget and timeline
    Constraints(ConstraintsArgs),
    /// Generate the execution plan from review
    Generate,
    /// Go back from the proposal to adjust the overview
    Refine,
    /// Approve the proposal and add it to the portfolio
    Approve,
    /// Throw the draft away
    Discard {
        /// Confirm discarding all wizard data
        #[arg(long)]
        confirm: bool,
    },
}

/// Tab of the project list
#[derive(Clone, Copy, ValueEnum)]
pub enum FilterArg {
    All,
    Active,
    Risk,
}

impl From<FilterArg> for ProjectFilter {
    fn from(val: FilterArg) -> Self {
        match val {
            FilterArg::All => ProjectFilter::All,
            FilterArg::Active => ProjectFilter::Active,
            FilterArg::Risk => ProjectFilter::Risk,
        }
    }
}

/// Plan a project without the wizard
#[derive(Args)]
pub struct QuickPlanArgs {
    /// What the project should achieve
    pub goal: String,
    /// Deadline as YYYY-MM-DD
    #[arg(long)]
    pub deadline: Date,
    /// Add the planned project to the portfolio
    #[arg(long)]
    pub approve: bool,
}

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// List projects, newest first
    List {
        #[arg(long, value_enum, default_value = "all")]
        filter: FilterArg,
    },
    /// Show one project
    Show { id: String },
    /// Generate a plan for a goal
    Plan(QuickPlanArgs),
}

#[derive(Subcommand)]
pub enum ContactCommands {
    /// List all contacts
    List,
    /// Research the contact's company
    Enrich { id: String },
    /// Score the relationship with a contact
    Score { id: String },
    /// Draft a follow-up email
    Email {
        id: String,
        /// What the email should achieve
        #[arg(long)]
        goal: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_removals_come_first() {
        let edits: Vec<BlueprintEdit> = IntentArgs {
            project_type: Some(ProjectType::Web),
            industry: None,
            goals: vec!["New".to_string()],
            remove_goals: vec!["Old".to_string()],
            integrations: vec![],
            remove_integrations: vec![],
        }
        .into();

        assert_eq!(
            edits,
            vec![
                BlueprintEdit::ProjectType(ProjectType::Web),
                BlueprintEdit::RemoveGoal("Old".to_string()),
                BlueprintEdit::AddGoal("New".to_string()),
            ]
        );
    }

    #[test]
    fn test_deadline_is_formatted_as_date() {
        let edits: Vec<BlueprintEdit> = ConstraintsArgs {
            budget: None,
            currency: None,
            deadline: Some(jiff::civil::date(2030, 1, 5)),
            urgency: Some(Level::High),
        }
        .into();

        assert_eq!(
            edits,
            vec![
                BlueprintEdit::Deadline("2030-01-05".to_string()),
                BlueprintEdit::Urgency(Level::High),
            ]
        );
    }
}
