//! The project wizard: a six-step state machine over a [`Blueprint`].
//!
//! ```text
//!  1 Basics ─▶ 2 Overview ─▶ 3 Constraints ─▶ 4 Review ─generate─▶ 5 Architecting
//!     ▲           ▲  ◀─back──    ◀─back──        │   ▲                  │
//!     └───────────┴──────── jump_to ─────────────┘   └──── failure ─────┤
//!                 ▲                                                     ▼ success
//!                 └──────────────── refine ─────────────────────── 6 Proposal ─approve─▶ Project
//! ```
//!
//! Every edit and step change schedules a debounced autosave of the
//! blueprint (with the current step recorded in `meta.step`). Opening a
//! wizard restores the saved draft before autosave is armed, so a fresh
//! default blueprint can never overwrite a draft that has not been read yet.

use std::sync::Arc;

use jiff::Timestamp;
use log::{debug, info};
use tokio::task;

use crate::{
    agents::PlanGenerator,
    draft::{Autosaver, DraftStore},
    error::{Result, WizardError},
    feasibility::{self, ProposalStats},
    models::{Blueprint, Plan},
};

mod builder;
mod config;
mod lifecycle;
mod navigation;
mod step;


pub use builder::WizardBuilder;
pub use config::WizardConfig;
pub use step::Step;

/// Step to resume on for a saved draft.
///
/// A draft with a generated plan resumes on the proposal if it was saved
/// there; anything else resumes no later than Review. A saved step of 0 is
/// treated as 1.
///
/// ```rust
/// use sun_core::wizard::{restore_step, Step};
///
/// assert_eq!(restore_step(6, true), Step::Proposal);
/// assert_eq!(restore_step(5, true), Step::Review);
/// assert_eq!(restore_step(6, false), Step::Review);
/// assert_eq!(restore_step(0, false), Step::Identity);
/// ```
pub fn restore_step(saved: u8, has_plan: bool) -> Step {
    let step = match saved {
        6 if has_plan => 6,
        s => s.clamp(1, 4),
    };
    Step::try_from(step).unwrap_or(Step::Identity)
}

/// Wizard session: the blueprint being edited, where the user is, and the
/// generated plan once there is one.
pub struct Wizard {
    config: WizardConfig,
    blueprint: Blueprint,
    step: Step,
    plan: Option<Plan>,
    thoughts: Vec<String>,
    drafts: DraftStore,
    autosaver: Autosaver,
    generator: Arc<dyn PlanGenerator>,
}

impl Wizard {
    /// Loads the saved draft (if any) and arms autosave.
    pub(crate) async fn open(
        config: WizardConfig,
        drafts: DraftStore,
        generator: Arc<dyn PlanGenerator>,
    ) -> Result<Self> {
        let loader = drafts.clone();
        let saved = task::spawn_blocking(move || loader.load())
            .await
            .map_err(WizardError::join)?;

        let mut wizard = Self {
            blueprint: Self::fresh_blueprint(&config),
            step: Step::Identity,
            plan: None,
            thoughts: Vec::new(),
            autosaver: Autosaver::new(drafts.clone(), config.autosave_quiet),
            drafts,
            generator,
            config,
        };

        if let Some(blueprint) = saved {
            wizard.restore(blueprint);
        }
        wizard.autosaver.arm();
        Ok(wizard)
    }

    fn fresh_blueprint(config: &WizardConfig) -> Blueprint {
        let mut blueprint = Blueprint::initial(Timestamp::now());
        blueprint.constraints = config.defaults.clone();
        blueprint
    }

    fn restore(&mut self, blueprint: Blueprint) {
        self.step = restore_step(blueprint.meta.step, blueprint.wbs().is_some());
        self.plan = blueprint.wbs().map(|phases| Plan {
            goal: blueprint.primary_goal().to_string(),
            deadline: blueprint.constraints.deadline.clone(),
            phases: phases.to_vec(),
        });
        info!(
            "Restored draft '{}' on step {}",
            blueprint.identity.project_name, self.step
        );
        self.blueprint = blueprint;
    }

    /// Carries the time of the last landed autosave onto the blueprint.
    fn sync_last_saved(&mut self) {
        if let Some(saved) = self.autosaver.last_saved() {
            if saved > self.blueprint.meta.last_updated {
                self.blueprint.meta.last_updated = saved;
            }
        }
    }

    /// Records the current step on the blueprint and schedules an autosave.
    fn touch(&mut self) {
        self.sync_last_saved();
        self.blueprint.meta.step = self.step.number();
        self.autosaver.schedule(self.blueprint.clone());
    }

    fn enter(&mut self, step: Step) {
        debug!("Wizard step {} -> {}", self.step, step);
        self.step = step;
        self.touch();
    }

    /// Removes the stored draft off the async executor.
    async fn clear_draft(&mut self) -> Result<()> {
        self.autosaver.cancel();
        let drafts = self.drafts.clone();
        task::spawn_blocking(move || drafts.clear())
            .await
            .map_err(WizardError::join)
    }

    pub fn blueprint(&self) -> &Blueprint {
        &self.blueprint
    }

    pub fn step(&self) -> Step {
        self.step
    }

    /// The plan shown on the proposal step.
    pub fn plan(&self) -> Option<&Plan> {
        self.plan.as_ref()
    }

    /// Progress lines from the most recent generation.
    pub fn thoughts(&self) -> &[String] {
        &self.thoughts
    }

    pub fn config(&self) -> &WizardConfig {
        &self.config
    }

    /// Live feasibility score of the current constraints.
    pub fn feasibility(&self) -> u8 {
        let c = &self.blueprint.constraints;
        feasibility::score(c.budget, &c.deadline, c.urgency)
    }

    /// Headline numbers for the proposal, once a plan exists.
    pub fn proposal_stats(&self) -> Option<ProposalStats> {
        self.plan
            .as_ref()
            .map(|plan| ProposalStats::new(plan, self.blueprint.constraints.budget))
    }

    /// Whether an autosave is scheduled but not written yet.
    pub fn has_unsaved_changes(&self) -> bool {
        self.autosaver.is_pending()
    }

    /// When the draft was last autosaved in this session.
    pub fn last_saved(&self) -> Option<Timestamp> {
        self.autosaver.last_saved()
    }

    /// Writes any pending autosave now. Returns whether a write happened.
    pub async fn flush(&mut self) -> bool {
        let flushed = self.autosaver.flush().await;
        self.sync_last_saved();
        flushed
    }
}
