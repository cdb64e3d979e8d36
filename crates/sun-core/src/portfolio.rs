//! The delivery portfolio: projects approved from the wizard or the quick
//! planner, stored in the same SQLite file as the wizard draft.

use std::path::{Path, PathBuf};

use log::{debug, info};
use rand::Rng;
use tokio::task;

use crate::{
    db::{self, Database},
    error::{Result, WizardError},
    models::{
        Level, Milestone, MilestoneStatus, Project, ProjectFilter, ProjectRisk, ProjectStatus,
        TaskStats,
    },
};

/// Flag recording that the sample projects have been inserted once.
const SEEDED_KEY: &str = "sun_portfolio_seeded_v1";

const QUICK_ID_LEN: usize = 9;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[allow(clippy::too_many_arguments)]
fn sample(
    id: &str,
    title: &str,
    client: &str,
    status: ProjectStatus,
    progress: u8,
    due_date: &str,
    team: &[&str],
    (total, completed): (u32, u32),
    (milestone, milestone_due, milestone_status): (&str, &str, MilestoneStatus),
) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        client: client.to_string(),
        status,
        progress,
        due_date: due_date.to_string(),
        team: team.iter().map(|t| t.to_string()).collect(),
        task_stats: TaskStats { total, completed },
        next_milestone: Milestone {
            id: format!("m{id}"),
            title: milestone.to_string(),
            due_date: milestone_due.to_string(),
            status: milestone_status,
        },
        risk_factor: None,
    }
}

/// The projects a new portfolio starts with, in display order.
pub fn sample_projects() -> Vec<Project> {
    let mut alpha = sample(
        "1",
        "Alpha CRM Integration",
        "StartupCo",
        ProjectStatus::AtRisk,
        45,
        "2025-10-24",
        &["SK", "JL"],
        (24, 10),
        ("Database Migration", "2025-10-10", MilestoneStatus::Pending),
    );
    alpha.risk_factor = Some(ProjectRisk {
        level: Level::High,
        reason: Some("Scope Creep".to_string()),
    });

    vec![
        alpha,
        sample(
            "2",
            "Mobile App V2",
            "TechFlow",
            ProjectStatus::OnTrack,
            72,
            "2025-11-12",
            &["MC", "ED", "JL"],
            (40, 29),
            ("User Testing", "2025-10-15", MilestoneStatus::Pending),
        ),
        sample(
            "3",
            "Website Redesign",
            "Creative Inc",
            ProjectStatus::Delayed,
            20,
            "2025-12-01",
            &["ED"],
            (15, 3),
            ("Wireframe Approval", "2025-09-30", MilestoneStatus::Blocked),
        ),
        sample(
            "4",
            "Internal Analytics",
            "Sun AI",
            ProjectStatus::OnTrack,
            90,
            "2025-10-05",
            &["JL"],
            (10, 9),
            ("Final Deployment", "2025-10-05", MilestoneStatus::Pending),
        ),
    ]
}

/// Random 9-character base-36 ID for projects created by the quick planner.
pub fn quick_project_id() -> String {
    let mut rng = rand::thread_rng();
    (0..QUICK_ID_LEN)
        .map(|_| char::from(BASE36[rng.gen_range(0..BASE36.len())]))
        .collect()
}

/// Newest-first list of projects.
#[derive(Debug, Clone)]
pub struct Portfolio {
    db_path: PathBuf,
}

impl Portfolio {
    /// Opens the portfolio at `path` (or the default XDG location), seeding
    /// it with [`sample_projects`] the first time.
    pub async fn open<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let db_path = match path {
            Some(path) => path.as_ref().to_path_buf(),
            None => db::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| WizardError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let seed_path = db_path.clone();
        task::spawn_blocking(move || {
            let mut db = Database::new(&seed_path)?;
            Self::seed(&mut db)
        })
        .await
        .map_err(WizardError::join)??;

        Ok(Self { db_path })
    }

    fn seed(db: &mut Database) -> Result<()> {
        if db.kv_get(SEEDED_KEY)?.is_some() {
            return Ok(());
        }
        for project in sample_projects().iter().rev() {
            db.prepend_project(project)?;
        }
        db.kv_set(SEEDED_KEY, "1")?;
        info!("Seeded portfolio with sample projects");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Puts `project` at the front of the list.
    ///
    /// Returns `false` if a project with the same ID is already listed; the
    /// existing entry is left untouched.
    pub async fn add(&self, project: Project) -> Result<bool> {
        let db_path = self.db_path.clone();

        let added = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.prepend_project(&project)
        })
        .await
        .map_err(WizardError::join)??;

        debug!("Portfolio add: inserted={added}");
        Ok(added)
    }

    /// Retrieves a project by its ID.
    pub async fn get(&self, id: &str) -> Result<Project> {
        let db_path = self.db_path.clone();
        let project_id = id.to_string();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_project(&project_id)?.ok_or(WizardError::NotFound {
                kind: "Project",
                id: project_id,
            })
        })
        .await
        .map_err(WizardError::join)?
    }

    /// Lists the projects under `filter`, newest first.
    pub async fn list(&self, filter: ProjectFilter) -> Result<Vec<Project>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_projects(filter)
        })
        .await
        .map_err(WizardError::join)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_projects() {
        let samples = sample_projects();
        let ids: Vec<_> = samples.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4"]);
        assert_eq!(samples[0].risk_factor.as_ref().unwrap().level, Level::High);
        assert_eq!(samples[2].next_milestone.status, MilestoneStatus::Blocked);
        assert_eq!(samples[1].next_milestone.id, "m2");
    }

    #[test]
    fn test_quick_project_id_shape() {
        let id = quick_project_id();
        assert_eq!(id.len(), 9);
        assert!(id.bytes().all(|b| BASE36.contains(&b)));
    }
}
