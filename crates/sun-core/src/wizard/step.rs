//! The six wizard steps.

use std::fmt;

use crate::error::WizardError;

/// A position in the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    /// Project and client names
    Identity = 1,
    /// Project type, industry, goals and integrations
    Intent = 2,
    /// Budget, deadline and urgency
    Constraints = 3,
    /// Summary before generation
    Review = 4,
    /// Plan generation in flight
    Architecting = 5,
    /// Generated plan awaiting approval
    Proposal = 6,
}

impl Step {
    /// All steps in order.
    pub const ALL: [Step; 6] = [
        Step::Identity,
        Step::Intent,
        Step::Constraints,
        Step::Review,
        Step::Architecting,
        Step::Proposal,
    ];

    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Sidebar label.
    pub fn label(&self) -> &'static str {
        match self {
            Step::Identity => "Basics",
            Step::Intent => "Overview",
            Step::Constraints => "Constraints",
            Step::Review => "Review",
            Step::Architecting => "Architecting",
            Step::Proposal => "Proposal",
        }
    }

    /// One-line description shown under the label.
    pub fn description(&self) -> &'static str {
        match self {
            Step::Identity => "Project & client details",
            Step::Intent => "Type, goals and integrations",
            Step::Constraints => "Budget & timeline",
            Step::Review => "Confirm before generating",
            Step::Architecting => "Agents at work",
            Step::Proposal => "Execution plan",
        }
    }

    /// The step before this one, for steps that have one.
    pub(crate) fn previous(&self) -> Option<Step> {
        Step::try_from(self.number().checked_sub(1)?).ok()
    }

    /// The step after this one, for steps that have one.
    pub(crate) fn following(&self) -> Option<Step> {
        Step::try_from(self.number() + 1).ok()
    }
}

impl TryFrom<u8> for Step {
    type Error = WizardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Step::ALL
            .get(usize::from(value).wrapping_sub(1))
            .copied()
            .ok_or_else(|| {
                WizardError::invalid_input("step").with_reason(format!("{value} is not between 1 and 6"))
            })
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.number(), self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbering() {
        for (i, step) in Step::ALL.iter().enumerate() {
            assert_eq!(usize::from(step.number()), i + 1);
            assert_eq!(Step::try_from(step.number()).unwrap(), *step);
        }
        assert!(Step::try_from(0).is_err());
        assert!(Step::try_from(7).is_err());
    }

    #[test]
    fn test_neighbours() {
        assert_eq!(Step::Identity.previous(), None);
        assert_eq!(Step::Review.previous(), Some(Step::Constraints));
        assert_eq!(Step::Review.following(), Some(Step::Architecting));
        assert_eq!(Step::Proposal.following(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Step::Intent.to_string(), "2 (Overview)");
    }
}
