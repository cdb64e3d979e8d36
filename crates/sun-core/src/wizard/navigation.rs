//! Field edits and step-to-step movement.

use super::{Step, Wizard};
use crate::{
    error::{Result, WizardError},
    models::BlueprintEdit,
};

impl Wizard {
    /// Applies an edit. Returns whether the blueprint changed.
    ///
    /// Edits are rejected while a plan is being generated.
    pub fn edit(&mut self, edit: BlueprintEdit) -> Result<bool> {
        if self.step == Step::Architecting {
            return Err(WizardError::transition(self.step, "edit the blueprint"));
        }
        let changed = self.blueprint.apply(edit);
        if changed {
            self.touch();
        }
        Ok(changed)
    }

    /// Why the current step cannot be left, or `None` if it can.
    fn blocker(&self) -> Option<&'static str> {
        let b = &self.blueprint;
        match self.step {
            Step::Identity if b.identity.project_name.is_empty() => Some("project name is required"),
            Step::Intent if !b.intent.project_type.is_set() => Some("choose a project type"),
            Step::Constraints if b.constraints.deadline.is_empty() => Some("deadline is required"),
            Step::Constraints if b.constraints.budget == 0 => Some("budget must be greater than zero"),
            Step::Identity | Step::Intent | Step::Constraints | Step::Review => None,
            Step::Architecting | Step::Proposal => Some("the wizard is past review"),
        }
    }

    /// Whether the advance condition of the current step holds.
    pub fn can_proceed(&self) -> bool {
        self.blocker().is_none()
    }

    /// Moves from steps 1-3 to the next step.
    ///
    /// Review is left with [`Wizard::generate`] instead.
    pub fn next(&mut self) -> Result<Step> {
        match self.step {
            Step::Identity | Step::Intent | Step::Constraints => {
                if let Some(reason) = self.blocker() {
                    return Err(WizardError::PreconditionFailed {
                        step: self.step,
                        reason: reason.to_string(),
                    });
                }
            }
            Step::Review => {
                return Err(WizardError::PreconditionFailed {
                    step: self.step,
                    reason: "generate a plan to continue".to_string(),
                });
            }
            Step::Architecting | Step::Proposal => {
                return Err(WizardError::transition(self.step, "advance"));
            }
        }

        let next = self
            .step
            .following()
            .ok_or_else(|| WizardError::transition(self.step, "advance"))?;
        self.enter(next);
        Ok(next)
    }

    /// Moves from steps 2-4 to the previous step.
    ///
    /// Step 1 has no previous step: the caller is expected to leave the
    /// wizard instead.
    pub fn back(&mut self) -> Result<Step> {
        match self.step {
            Step::Intent | Step::Constraints | Step::Review => {
                let previous = self
                    .step
                    .previous()
                    .ok_or_else(|| WizardError::transition(self.step, "go back"))?;
                self.enter(previous);
                Ok(previous)
            }
            Step::Identity | Step::Architecting | Step::Proposal => {
                Err(WizardError::transition(self.step, "go back"))
            }
        }
    }

    /// Jumps from Review back to one of the input steps to edit it.
    pub fn jump_to(&mut self, target: Step) -> Result<Step> {
        let allowed = self.step == Step::Review && target < Step::Review;
        if !allowed {
            return Err(WizardError::transition(
                self.step,
                format!("jump to step {target}"),
            ));
        }
        self.enter(target);
        Ok(target)
    }
}
