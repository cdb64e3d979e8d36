//! Command handlers: open the core services, run one action, render the
//! result.

use std::{path::PathBuf, sync::Arc, time::Duration};

use anyhow::{Context, Result};
use log::debug;
use sun_core::{
    agents::{
        contacts, EmailDrafter, Enricher, MockComms, MockEnricher, MockPlanner, MockScorer,
        PlanGenerator, RelationshipScorer,
    },
    display::{Contacts, OperationStatus, Projects, WizardView},
    models::{BlueprintEdit, Contact, EmailDraftContext, Project, ProjectFilter},
    portfolio::quick_project_id,
    Portfolio, Step, Wizard, WizardBuilder, WizardError,
};

use crate::{
    cli::{ContactCommands, ProjectCommands, QuickPlanArgs, WizardCommands},
    renderer::TerminalRenderer,
};

/// Runs CLI commands against the wizard, the portfolio and the agents.
pub struct Cli {
    database_file: Option<PathBuf>,
    instant: bool,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(database_file: Option<PathBuf>, instant: bool, renderer: TerminalRenderer) -> Self {
        Self {
            database_file,
            instant,
            renderer,
        }
    }

    fn latency(&self, default: Duration) -> Duration {
        if self.instant {
            Duration::ZERO
        } else {
            default
        }
    }

    fn planner(&self) -> MockPlanner {
        if self.instant {
            MockPlanner::instant()
        } else {
            MockPlanner::new()
        }
    }

    async fn open_wizard(&self) -> Result<Wizard> {
        let mut builder = WizardBuilder::new()
            .with_database_path(self.database_file.as_ref())
            .with_generator(Arc::new(self.planner()));
        if self.instant {
            builder = builder.with_settle_delay(Duration::ZERO);
        }
        builder.build().await.context("Failed to open the wizard")
    }

    async fn open_portfolio(&self) -> Result<Portfolio> {
        Portfolio::open(self.database_file.as_ref())
            .await
            .context("Failed to open the portfolio")
    }

    fn success(&self, message: String) {
        self.renderer
            .render(&OperationStatus::success(message).to_string());
    }

    fn find_contact(id: &str) -> Result<Contact> {
        contacts::find(id).ok_or_else(|| {
            WizardError::NotFound {
                kind: "Contact",
                id: id.to_string(),
            }
            .into()
        })
    }

    // ------------------------------------------------------------------
    // Wizard
    // ------------------------------------------------------------------

    pub async fn handle_wizard_command(&self, command: WizardCommands) -> Result<()> {
        let mut wizard = self.open_wizard().await?;

        if let WizardCommands::Approve = command {
            return self.approve(wizard).await;
        }

        let outcome = self.run_wizard_action(&mut wizard, command).await;
        // keep whatever was changed before a failure
        if wizard.flush().await {
            debug!("Flushed wizard draft");
        }
        let message = outcome?;

        if let Some(message) = message {
            self.success(message);
        }
        self.renderer.render(&WizardView(&wizard).to_string());
        Ok(())
    }

    async fn run_wizard_action(
        &self,
        wizard: &mut Wizard,
        command: WizardCommands,
    ) -> Result<Option<String>> {
        let moved = |step: Step| Some(format!("Moved to step {step}"));

        let message = match command {
            WizardCommands::Show => None,
            WizardCommands::Next => moved(wizard.next()?),
            WizardCommands::Back => moved(wizard.back()?),
            WizardCommands::Goto { step } => moved(wizard.jump_to(Step::try_from(step)?)?),
            WizardCommands::Identity(args) => Self::apply(wizard, args.into())?,
            WizardCommands::Intent(args) => Self::apply(wizard, args.into())?,
            WizardCommands::Constraints(args) => Self::apply(wizard, args.into())?,
            WizardCommands::Generate => {
                let renderer = &self.renderer;
                let plan = wizard
                    .generate(&mut |thought: &str| renderer.progress(thought))
                    .await?;
                Some(format!(
                    "Generated {} phases for '{}'",
                    plan.phases.len(),
                    plan.goal
                ))
            }
            WizardCommands::Refine => moved(wizard.refine()?),
            WizardCommands::Discard { confirm } => {
                wizard.discard(confirm).await?;
                Some("Draft discarded".to_string())
            }
            // consumes the wizard, see approve()
            WizardCommands::Approve => None,
        };
        Ok(message)
    }

    fn apply(wizard: &mut Wizard, edits: Vec<BlueprintEdit>) -> Result<Option<String>> {
        let mut changed = 0;
        for edit in edits {
            if wizard.edit(edit)? {
                changed += 1;
            }
        }
        Ok(Some(format!("{changed} field(s) updated")))
    }

    /// Files the project before dropping the draft, so a portfolio failure
    /// leaves the proposal resumable.
    async fn approve(&self, wizard: Wizard) -> Result<()> {
        let project = wizard.proposal_project()?;
        let portfolio = self.open_portfolio().await?;
        portfolio
            .add(project.clone())
            .await
            .context("Failed to add project to the portfolio")?;
        wizard.complete().await?;

        self.success(format!(
            "Approved '{}' as project {}",
            project.title, project.id
        ));
        self.renderer.render(&project.to_string());
        Ok(())
    }

    // ------------------------------------------------------------------
    // Projects
    // ------------------------------------------------------------------

    pub async fn handle_project_command(&self, command: ProjectCommands) -> Result<()> {
        let portfolio = self.open_portfolio().await?;

        match command {
            ProjectCommands::List { filter } => {
                let filter: ProjectFilter = filter.into();
                let projects = Projects(portfolio.list(filter).await?);
                self.renderer
                    .render(&format!("# Projects ({})\n\n{projects}", filter.as_str()));
            }
            ProjectCommands::Show { id } => {
                let project = portfolio.get(&id).await?;
                self.renderer.render(&project.to_string());
            }
            ProjectCommands::Plan(args) => self.quick_plan(&portfolio, args).await?,
        }
        Ok(())
    }

    async fn quick_plan(&self, portfolio: &Portfolio, args: QuickPlanArgs) -> Result<()> {
        let deadline = args.deadline.to_string();
        let renderer = &self.renderer;
        let plan = self
            .planner()
            .generate(&args.goal, &deadline, &mut |thought: &str| {
                renderer.progress(thought)
            })
            .await
            .map_err(WizardError::from)?;

        self.renderer.render(&plan.to_string());

        if args.approve {
            let project = Project::from_plan(&plan, quick_project_id());
            portfolio.add(project.clone()).await?;
            self.success(format!("Added '{}' as project {}", project.title, project.id));
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Contacts
    // ------------------------------------------------------------------

    pub async fn handle_contact_command(&self, command: ContactCommands) -> Result<()> {
        match command {
            ContactCommands::List => {
                let contacts = Contacts(contacts::directory());
                self.renderer.render(&format!("# Contacts\n\n{contacts}"));
            }
            ContactCommands::Enrich { id } => {
                let mut contact = Self::find_contact(&id)?;
                let enricher = MockEnricher::new().with_latency(self.latency(Duration::from_secs(2)));
                self.renderer
                    .progress(&format!("Researching {}...", contact.company));
                let enrichment = enricher
                    .enrich(&contact.company)
                    .await
                    .map_err(WizardError::from)?;
                contact.enriched_data = Some(enrichment);
                self.renderer.render(&contact.to_string());
            }
            ContactCommands::Score { id } => {
                let mut contact = Self::find_contact(&id)?;
                let scorer = MockScorer::new().with_latency(self.latency(Duration::from_millis(1500)));
                let metrics = scorer.score(&contact.id).await.map_err(WizardError::from)?;
                contact.sentiment_score = Some(metrics.score);
                self.renderer
                    .render(&format!("{contact}\n{metrics}"));
            }
            ContactCommands::Email { id, goal } => {
                let contact = Self::find_contact(&id)?;
                let comms = MockComms::new().with_latency(self.latency(Duration::from_millis(2500)));
                let draft = comms
                    .draft(&EmailDraftContext::for_contact(&contact, goal))
                    .await
                    .map_err(WizardError::from)?;
                self.renderer.render(&draft.to_string());
            }
        }
        Ok(())
    }
}
