//! Plan generation and the ways out of the wizard.

use std::sync::Arc;

use jiff::Timestamp;
use log::{info, warn};

use super::{Step, Wizard};
use crate::{
    error::{Result, WizardError},
    models::{Artifacts, DraftStatus, Plan, Project},
};

impl Wizard {
    /// Generates the execution plan from Review.
    ///
    /// Enters Architecting, streams the generator's thoughts to `on_thought`
    /// (and into [`Wizard::thoughts`]) and, once the plan arrives, records it
    /// as the blueprint's work breakdown and moves to Proposal after the
    /// configured settle delay. If generation fails the wizard returns to
    /// Review with the draft status reset.
    pub async fn generate(&mut self, on_thought: &mut (dyn FnMut(&str) + Send)) -> Result<&Plan> {
        if self.step != Step::Review {
            return Err(WizardError::transition(self.step, "generate a plan"));
        }
        if !self.can_proceed() {
            return Err(WizardError::PreconditionFailed {
                step: self.step,
                reason: "the blueprint is incomplete".to_string(),
            });
        }

        self.thoughts.clear();
        self.blueprint.meta.status = DraftStatus::Processing;
        self.enter(Step::Architecting);

        let goal = self.blueprint.primary_goal().to_string();
        let deadline = self.blueprint.constraints.deadline.clone();
        let generator = Arc::clone(&self.generator);
        let thoughts = &mut self.thoughts;

        let outcome = generator
            .generate(&goal, &deadline, &mut |thought: &str| {
                thoughts.push(thought.to_string());
                on_thought(thought);
            })
            .await;

        let plan = match outcome {
            Ok(plan) => plan,
            Err(e) => {
                warn!("Plan generation failed: {e}");
                self.blueprint.meta.status = DraftStatus::Draft;
                self.enter(Step::Review);
                return Err(e.into());
            }
        };

        info!(
            "Generated plan for '{goal}': {} phases, {} tasks",
            plan.phases.len(),
            plan.task_count()
        );
        let artifacts = self.blueprint.artifacts.get_or_insert_with(Artifacts::default);
        artifacts.wbs = Some(plan.phases.clone());
        artifacts.estimated_timeline = Some(self.config.estimated_timeline_days);
        self.blueprint.meta.status = DraftStatus::Ready;
        self.plan = Some(plan);
        self.touch();

        tokio::time::sleep(self.config.settle_delay).await;
        self.enter(Step::Proposal);

        self.plan
            .as_ref()
            .ok_or_else(|| WizardError::transition(Step::Architecting, "show the proposal"))
    }

    /// Goes back from the proposal to the overview to adjust the inputs.
    ///
    /// The plan view is dropped but the stored artifacts are kept until the
    /// next generation replaces them.
    pub fn refine(&mut self) -> Result<Step> {
        if self.step != Step::Proposal {
            return Err(WizardError::transition(self.step, "refine the plan"));
        }
        self.plan = None;
        self.enter(Step::Intent);
        Ok(Step::Intent)
    }

    /// Builds the [`Project`] the current proposal would become, without
    /// ending the session.
    ///
    /// Callers that persist the project elsewhere should do so before
    /// [`Wizard::complete`], so a failed write leaves the draft in place.
    pub fn proposal_project(&self) -> Result<Project> {
        match (&self.plan, self.step) {
            (Some(plan), Step::Proposal) => {
                Ok(Project::from_proposal(&self.blueprint, plan, Timestamp::now()))
            }
            _ => Err(WizardError::transition(self.step, "approve")),
        }
    }

    /// Ends an approved session: pending autosave is cancelled and the
    /// stored draft is removed.
    pub async fn complete(mut self) -> Result<()> {
        if self.step != Step::Proposal || self.plan.is_none() {
            return Err(WizardError::transition(self.step, "complete the approval"));
        }
        self.clear_draft().await
    }

    /// Approves the proposal, turning it into a [`Project`] and ending the
    /// session.
    pub async fn approve(self) -> Result<Project> {
        let project = self.proposal_project()?;
        self.complete().await?;

        info!("Approved '{}' as project {}", project.title, project.id);
        Ok(project)
    }

    /// Throws the draft away and starts over on step 1.
    ///
    /// Only offered once past the first step, and only with explicit
    /// confirmation.
    pub async fn discard(&mut self, confirmed: bool) -> Result<()> {
        if self.step == Step::Identity {
            return Err(WizardError::transition(self.step, "discard the draft"));
        }
        if !confirmed {
            return Err(WizardError::ConfirmationRequired {
                action: "discard the draft".to_string(),
            });
        }

        self.clear_draft().await?;
        self.blueprint = Self::fresh_blueprint(&self.config);
        self.step = Step::Identity;
        self.plan = None;
        self.thoughts.clear();

        info!("Discarded wizard draft");
        Ok(())
    }
}
