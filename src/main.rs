//! src/main.rs

use anyhow::{Context, Result};
use clap::Parser;

mod checks;
mod cli;
mod config;
mod dispatcher;
mod git;
mod hook;
mod language;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            config::create_default_config()
                .await
                .context("Failed to initialize configuration.")?;
        }
        Commands::Install { force } => {
            hook::install_hooks(force)
                .await
                .context("Failed to install hooks.")?;
        }
        Commands::Uninstall => {
            hook::uninstall_hooks()
                .await
                .context("Failed to uninstall hooks.")?;
        }
        Commands::Status => {
            hook::print_status().await?;
        }
        Commands::Check { name } => {
            checks::run_check(&name).await?;
        }
        Commands::Run { hook } => {
            dispatcher::run_hook(&hook).await?;
        }
    }

    Ok(())
}
