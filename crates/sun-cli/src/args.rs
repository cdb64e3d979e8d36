use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ContactCommands, ProjectCommands, WizardCommands};

/// Project wizard, CRM agents and delivery portfolio for the Sun AI agency
///
/// The wizard walks a project from a name to an approved execution plan in
/// six steps. Progress is saved as a draft between invocations, so each
/// command picks up where the last one left off.
#[derive(Parser)]
#[command(version, about, name = "sun")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/sun/sun.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Skip the simulated agent latency
    #[arg(long, global = true)]
    pub instant: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Sun CLI
///
/// - `wizard`: step through the project wizard (the default)
/// - `project`: browse the portfolio and run the quick planner
/// - `contact`: CRM contacts and their agents
#[derive(Subcommand)]
pub enum Commands {
    /// Step through the project wizard
    #[command(alias = "w")]
    Wizard {
        #[command(subcommand)]
        command: WizardCommands,
    },
    /// Browse the project portfolio
    #[command(alias = "p")]
    Project {
        #[command(subcommand)]
        command: ProjectCommands,
    },
    /// Work with CRM contacts
    #[command(alias = "c")]
    Contact {
        #[command(subcommand)]
        command: ContactCommands,
    },
}
