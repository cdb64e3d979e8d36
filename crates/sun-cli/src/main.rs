//! Sun CLI Application
//!
//! Command-line front end for the project wizard, the delivery portfolio and
//! the CRM agents.

mod args;
mod cli;
mod handlers;
mod renderer;

use anyhow::Result;
use args::{Args, Commands};
use clap::Parser;
use cli::WizardCommands;
use handlers::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        instant,
        command,
    } = Args::parse();

    let cli = Cli::new(database_file, instant, TerminalRenderer::new(!no_color));

    info!("Sun started");

    match command {
        Some(Wizard { command }) => cli.handle_wizard_command(command).await,
        Some(Project { command }) => cli.handle_project_command(command).await,
        Some(Contact { command }) => cli.handle_contact_command(command).await,
        None => cli.handle_wizard_command(WizardCommands::Show).await,
    }
}
