use sun_core::{
    draft::KeyValueStore,
    models::{ProjectFilter, ProjectStatus},
    portfolio::sample_projects,
    Database, SqliteStore,
};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

#[test]
fn test_kv_round_trip() {
    let (_temp_file, db) = create_test_db();

    assert_eq!(db.kv_get("draft").unwrap(), None);
    db.kv_set("draft", "{}").unwrap();
    assert_eq!(db.kv_get("draft").unwrap().as_deref(), Some("{}"));

    db.kv_set("draft", "{\"a\":1}").unwrap();
    assert_eq!(db.kv_get("draft").unwrap().as_deref(), Some("{\"a\":1}"));

    db.kv_remove("draft").unwrap();
    db.kv_remove("draft").unwrap();
    assert_eq!(db.kv_get("draft").unwrap(), None);
}

#[test]
fn test_prepend_orders_newest_first() {
    let (_temp_file, mut db) = create_test_db();
    let projects = sample_projects();

    for project in &projects {
        assert!(db.prepend_project(project).unwrap());
    }

    let ids: Vec<_> = db
        .list_projects(ProjectFilter::All)
        .unwrap()
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, ["4", "3", "2", "1"]);
}

#[test]
fn test_prepend_ignores_duplicate_id() {
    let (_temp_file, mut db) = create_test_db();
    let mut project = sample_projects().remove(0);

    assert!(db.prepend_project(&project).unwrap());
    project.title = "Renamed".to_string();
    assert!(!db.prepend_project(&project).unwrap());

    assert_eq!(db.project_count().unwrap(), 1);
    let stored = db.get_project("1").unwrap().unwrap();
    assert_eq!(stored.title, "Alpha CRM Integration");
}

#[test]
fn test_list_filters_by_status() {
    let (_temp_file, mut db) = create_test_db();
    let mut projects = sample_projects();
    projects[3].status = ProjectStatus::Completed;
    for project in &projects {
        db.prepend_project(project).unwrap();
    }

    let active = db.list_projects(ProjectFilter::Active).unwrap();
    assert_eq!(active.len(), 3);
    assert!(active.iter().all(|p| p.status != ProjectStatus::Completed));

    let risk: Vec<_> = db
        .list_projects(ProjectFilter::Risk)
        .unwrap()
        .into_iter()
        .map(|p| p.title)
        .collect();
    assert_eq!(risk, ["Website Redesign", "Alpha CRM Integration"]);
}

#[test]
fn test_get_missing_project() {
    let (_temp_file, db) = create_test_db();
    assert_eq!(db.get_project("nope").unwrap(), None);
}

#[test]
fn test_sqlite_store_creates_parent_directories() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("dir").join("sun.db");

    let store = SqliteStore::open(&path).expect("Failed to open store");
    assert!(path.exists());
    assert_eq!(store.path(), path.as_path());

    store.set("k", "v").unwrap();
    let reopened = SqliteStore::open(&path).unwrap();
    assert_eq!(reopened.get("k").unwrap().as_deref(), Some("v"));
}
