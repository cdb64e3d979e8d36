use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Command with plain output, no agent latency and its own database
fn sun_cmd(db_path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("sun").expect("Failed to find sun binary");
    cmd.args(["--no-color", "--instant", "--database-file"])
        .arg(db_path);
    cmd
}

fn run(db_path: &Path, args: &[&str]) {
    sun_cmd(db_path).args(args).assert().success();
}

#[test]
fn test_cli_defaults_to_wizard_view() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    sun_cmd(&db_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Project Wizard"))
        .stdout(predicate::str::contains("## Step 1: Basics"))
        .stdout(predicate::str::contains("- Feasibility: 0/100"));
}

#[test]
fn test_cli_next_requires_project_name() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    sun_cmd(&db_path)
        .args(["wizard", "next"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("project name is required"));
}

#[test]
fn test_cli_full_wizard_flow() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    run(&db_path, &["wizard", "identity", "--project-name", "Acme Portal", "--client", "StartupCo"]);
    run(&db_path, &["wizard", "next"]);
    run(&db_path, &["wizard", "intent", "--type", "web", "--goal", "Launch a SaaS platform"]);
    run(&db_path, &["wizard", "next"]);
    run(&db_path, &["wizard", "constraints", "--budget", "20000", "--deadline", "2031-01-01"]);

    sun_cmd(&db_path)
        .args(["wizard", "next"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Moved to step 4 (Review)"))
        .stdout(predicate::str::contains("- Budget: $20,000 USD"));

    sun_cmd(&db_path)
        .args(["wizard", "generate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("... Analyzing semantic intent..."))
        .stdout(predicate::str::contains("### Discovery & Architecture"))
        .stdout(predicate::str::contains("**Execution snapshot**"));

    // the proposal is restored on the next invocation
    sun_cmd(&db_path)
        .args(["wizard", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Step 6: Proposal"));

    sun_cmd(&db_path)
        .args(["wizard", "approve"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Approved 'Acme Portal' as project proj-"))
        .stdout(predicate::str::contains("- Client: StartupCo"));

    sun_cmd(&db_path)
        .args(["project", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("| Acme Portal | StartupCo | On Track | 0% |"));

    sun_cmd(&db_path)
        .args(["wizard", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Step 1: Basics"));
}

#[test]
fn test_cli_failed_approval_keeps_proposal() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    run(&db_path, &["wizard", "identity", "--project-name", "Fragile"]);
    run(&db_path, &["wizard", "next"]);
    run(&db_path, &["wizard", "intent", "--type", "web"]);
    run(&db_path, &["wizard", "next"]);
    run(&db_path, &["wizard", "constraints", "--budget", "20000", "--deadline", "2031-01-01"]);
    run(&db_path, &["wizard", "next"]);
    run(&db_path, &["wizard", "generate"]);
    run(&db_path, &["project", "list"]);

    let conn = rusqlite::Connection::open(&db_path).expect("Failed to open database");
    conn.execute_batch(
        "CREATE TRIGGER reject_projects BEFORE INSERT ON projects
         BEGIN SELECT RAISE(ABORT, 'portfolio is read-only'); END;",
    )
    .expect("Failed to install trigger");
    drop(conn);

    sun_cmd(&db_path)
        .args(["wizard", "approve"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to add project to the portfolio"));

    sun_cmd(&db_path)
        .args(["wizard", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Step 6: Proposal"))
        .stdout(predicate::str::contains("Fragile"));
}

#[test]
fn test_cli_goto_only_from_review() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    sun_cmd(&db_path)
        .args(["wizard", "goto", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot jump to step 2 (Overview) from step 1 (Basics)"));

    sun_cmd(&db_path)
        .args(["wizard", "goto", "9"])
        .assert()
        .failure();
}

#[test]
fn test_cli_discard_requires_confirmation() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    run(&db_path, &["wizard", "identity", "--project-name", "Throwaway"]);
    run(&db_path, &["wizard", "next"]);

    sun_cmd(&db_path)
        .args(["wizard", "discard"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Confirmation required"));

    sun_cmd(&db_path)
        .args(["wizard", "discard", "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Draft discarded"))
        .stdout(predicate::str::contains("## Step 1: Basics"));
}

#[test]
fn test_cli_project_list_filters() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    sun_cmd(&db_path)
        .args(["project", "list", "--filter", "risk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Projects (Risk)"))
        .stdout(predicate::str::contains("Alpha CRM Integration"))
        .stdout(predicate::str::contains("Website Redesign"))
        .stdout(predicate::str::contains("Mobile App V2").not());
}

#[test]
fn test_cli_quick_planner_adds_project() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    sun_cmd(&db_path)
        .args(["project", "plan", "Brand refresh", "--deadline", "2031-01-01", "--approve"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### Strategy & Concept"))
        .stdout(predicate::str::contains("Added 'Brand refresh' as project"));

    sun_cmd(&db_path)
        .args(["project", "list", "--filter", "active"])
        .assert()
        .success()
        .stdout(predicate::str::contains("| Brand refresh | New Client | On Track |"));
}

#[test]
fn test_cli_contact_agents() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    sun_cmd(&db_path)
        .args(["contact", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sarah Kim"));

    sun_cmd(&db_path)
        .args(["contact", "score", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Relationship score: 45/100"));

    sun_cmd(&db_path)
        .args(["contact", "enrich", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Location: Austin, TX"));

    sun_cmd(&db_path)
        .args(["contact", "email", "2", "--goal", "Reassure on timeline"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Re: Timeline updates for Blueprint #097"))
        .stdout(predicate::str::contains("> Hi Sarah,"));

    sun_cmd(&db_path)
        .args(["contact", "score", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Contact with ID 9 not found"));
}
