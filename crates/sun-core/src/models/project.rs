//! Project model: what an approved plan turns into.

use jiff::{tz::TimeZone, Timestamp};
use serde::{Deserialize, Serialize};

use super::{Blueprint, Level, MilestoneStatus, Plan, ProjectStatus};

/// Next checkpoint of a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: String,
    pub title: String,
    pub due_date: String,
    pub status: MilestoneStatus,
}

/// Task completion counters.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskStats {
    pub total: u32,
    pub completed: u32,
}

/// Flagged delivery risk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectRisk {
    pub level: Level,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// A project in the delivery portfolio.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub client: String,
    pub status: ProjectStatus,
    /// Percent complete, 0-100
    pub progress: u8,
    pub due_date: String,
    /// Avatar initials
    pub team: Vec<String>,
    pub task_stats: TaskStats,
    pub next_milestone: Milestone,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_factor: Option<ProjectRisk>,
}

const QUICK_TITLE_LIMIT: usize = 30;

impl Project {
    /// Converts an approved wizard proposal into a project.
    pub fn from_proposal(blueprint: &Blueprint, plan: &Plan, now: Timestamp) -> Self {
        let first = plan.phases.first();
        let client = if blueprint.identity.client_name.is_empty() {
            "Internal".to_string()
        } else {
            blueprint.identity.client_name.clone()
        };

        Self {
            id: format!("proj-{}", now.as_millisecond()),
            title: blueprint.identity.project_name.clone(),
            client,
            status: ProjectStatus::OnTrack,
            progress: 0,
            due_date: blueprint.constraints.deadline.clone(),
            team: vec!["AI".to_string(), "ME".to_string()],
            task_stats: TaskStats {
                total: plan.task_count() as u32,
                completed: 0,
            },
            next_milestone: Milestone {
                id: first.map_or_else(|| "m-init".to_string(), |p| p.id.clone()),
                title: first.map_or_else(|| "Project Kickoff".to_string(), |p| p.title.clone()),
                due_date: now.to_zoned(TimeZone::UTC).date().to_string(),
                status: MilestoneStatus::Pending,
            },
            risk_factor: None,
        }
    }

    /// Converts a plan from the portfolio's quick planner into a project.
    pub fn from_plan(plan: &Plan, id: impl Into<String>) -> Self {
        let title = if plan.goal.chars().count() > QUICK_TITLE_LIMIT {
            let head: String = plan.goal.chars().take(QUICK_TITLE_LIMIT).collect();
            format!("{head}...")
        } else {
            plan.goal.clone()
        };

        Self {
            id: id.into(),
            title,
            client: "New Client".to_string(),
            status: ProjectStatus::OnTrack,
            progress: 0,
            due_date: plan.deadline.clone(),
            team: vec!["ME".to_string()],
            task_stats: TaskStats {
                total: plan.task_count() as u32,
                completed: 0,
            },
            next_milestone: Milestone {
                id: "m-new".to_string(),
                title: "Phase 1: Kickoff".to_string(),
                due_date: "Tomorrow".to_string(),
                status: MilestoneStatus::Pending,
            },
            risk_factor: None,
        }
    }
}
