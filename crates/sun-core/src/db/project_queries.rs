//! Project table operations.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result},
    models::{Project, ProjectFilter, ProjectStatus},
};

const CHECK_PROJECT_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM projects WHERE id = ?1)";
const FRONT_POSITION_SQL: &str = "SELECT COALESCE(MIN(position), 0) - 1 FROM projects";
const INSERT_PROJECT_SQL: &str =
    "INSERT INTO projects (id, position, status, data, created_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_PROJECT_SQL: &str = "SELECT data FROM projects WHERE id = ?1";
const COUNT_PROJECTS_SQL: &str = "SELECT COUNT(*) FROM projects";

const LIST_ALL_SQL: &str = "SELECT data FROM projects ORDER BY position";
const LIST_ACTIVE_SQL: &str = "SELECT data FROM projects WHERE status != ?1 ORDER BY position";
const LIST_RISK_SQL: &str =
    "SELECT data FROM projects WHERE status IN (?1, ?2) ORDER BY position";

impl super::Database {
    /// Inserts `project` ahead of every existing project.
    ///
    /// Returns `false` without touching the table when a project with the
    /// same ID already exists.
    pub fn prepend_project(&mut self, project: &Project) -> Result<bool> {
        let data = serde_json::to_string(project)?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_PROJECT_EXISTS_SQL, params![project.id], |row| row.get(0))
            .db_context("Failed to check project existence")?;
        if exists {
            return Ok(false);
        }

        let position: i64 = tx
            .query_row(FRONT_POSITION_SQL, [], |row| row.get(0))
            .db_context("Failed to compute project position")?;

        tx.execute(
            INSERT_PROJECT_SQL,
            params![
                project.id,
                position,
                project.status.as_str(),
                data,
                Timestamp::now().to_string()
            ],
        )
        .db_context("Failed to insert project")?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(true)
    }

    /// Retrieves a project by its ID.
    pub fn get_project(&self, id: &str) -> Result<Option<Project>> {
        let data: Option<String> = self
            .connection
            .query_row(SELECT_PROJECT_SQL, params![id], |row| row.get(0))
            .optional()
            .db_context("Failed to query project")?;

        data.map(|d| serde_json::from_str(&d).map_err(Into::into))
            .transpose()
    }

    /// Number of stored projects.
    pub fn project_count(&self) -> Result<u64> {
        let count: i64 = self
            .connection
            .query_row(COUNT_PROJECTS_SQL, [], |row| row.get(0))
            .db_context("Failed to count projects")?;
        Ok(count as u64)
    }

    /// Lists projects matching `filter`, newest first.
    pub fn list_projects(&self, filter: ProjectFilter) -> Result<Vec<Project>> {
        let (sql, statuses): (&str, Vec<&str>) = match filter {
            ProjectFilter::All => (LIST_ALL_SQL, vec![]),
            ProjectFilter::Active => (LIST_ACTIVE_SQL, vec![ProjectStatus::Completed.as_str()]),
            ProjectFilter::Risk => (
                LIST_RISK_SQL,
                vec![
                    ProjectStatus::AtRisk.as_str(),
                    ProjectStatus::Delayed.as_str(),
                ],
            ),
        };

        let mut stmt = self
            .connection
            .prepare(sql)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map(rusqlite::params_from_iter(statuses), |row| {
                row.get::<_, String>(0)
            })
            .db_context("Failed to query projects")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to read project row")?;

        rows.iter()
            .map(|data| serde_json::from_str(data).map_err(Into::into))
            .collect()
    }
}
