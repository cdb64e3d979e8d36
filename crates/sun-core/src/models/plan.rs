//! Execution plan produced by the planner agent.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A unit of planned work.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub title: String,
    /// Free text, e.g. "3 days" or "1 week"
    pub duration: String,
    /// Role expected to carry the task
    pub role: String,
}

/// An ordered group of tasks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Phase {
    pub id: String,
    pub title: String,
    pub tasks: Vec<Task>,
}

/// A phase/task breakdown for a goal and deadline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Plan {
    pub goal: String,
    pub deadline: String,
    pub phases: Vec<Phase>,
}

impl Task {
    pub(crate) fn new(id: &str, title: &str, duration: &str, role: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            duration: duration.to_string(),
            role: role.to_string(),
        }
    }
}

impl Phase {
    pub(crate) fn new(id: &str, title: &str, tasks: Vec<Task>) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            tasks,
        }
    }
}

impl Plan {
    /// Total number of tasks across all phases.
    pub fn task_count(&self) -> usize {
        self.phases.iter().map(|p| p.tasks.len()).sum()
    }

    /// Distinct roles named by the tasks, sorted.
    pub fn roles(&self) -> BTreeSet<&str> {
        self.phases
            .iter()
            .flat_map(|p| p.tasks.iter().map(|t| t.role.as_str()))
            .collect()
    }
}
