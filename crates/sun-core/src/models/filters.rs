//! Filter types for listing projects.

use std::str::FromStr;

use super::Project;

/// Tabs of the project list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    /// Every project
    #[default]
    All,

    /// Everything that is not completed
    Active,

    /// Projects that are at risk or delayed
    Risk,
}

impl ProjectFilter {
    /// Whether `project` belongs under this tab.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sun_core::models::{ProjectFilter, ProjectStatus};
    /// # use sun_core::portfolio::sample_projects;
    ///
    /// let delayed = sample_projects()
    ///     .into_iter()
    ///     .find(|p| p.status == ProjectStatus::Delayed)
    ///     .unwrap();
    /// assert!(ProjectFilter::Risk.matches(&delayed));
    /// assert!(ProjectFilter::Active.matches(&delayed));
    /// ```
    pub fn matches(&self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Active => project.status != super::ProjectStatus::Completed,
            ProjectFilter::Risk => project.status.is_at_risk(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectFilter::All => "All",
            ProjectFilter::Active => "Active",
            ProjectFilter::Risk => "Risk",
        }
    }
}

impl FromStr for ProjectFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(ProjectFilter::All),
            "active" => Ok(ProjectFilter::Active),
            "risk" => Ok(ProjectFilter::Risk),
            _ => Err(format!("Invalid project filter: {s}")),
        }
    }
}
