//! src/dispatcher.rs
// Runs the installed hook scripts the way git would, one after another.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use log::debug;
use std::path::Path;
use tokio::fs;
use tokio::process::Command;

use crate::git;

/// Runs every script in `.git/hooks/<hook>.d` whose name starts with the hook
/// name, in lexical filename order. The first non-zero exit aborts the run;
/// scripts ordered after it are not executed.
pub async fn run_hook(hook: &str) -> Result<()> {
    let dir = git::get_git_dir().await?.join("hooks").join(format!("{hook}.d"));
    run_scripts_in(&dir, hook).await
}

async fn run_scripts_in(dir: &Path, prefix: &str) -> Result<()> {
    if !dir.exists() {
        debug!("no hook directory at {}, nothing to run", dir.display());
        return Ok(());
    }

    let mut scripts = Vec::new();
    let mut entries = fs::read_dir(dir)
        .await
        .with_context(|| format!("Failed to read hook directory {}", dir.display()))?;
    while let Some(entry) = entries.next_entry().await? {
        let name = entry.file_name().to_string_lossy().to_string();
        if entry.file_type().await?.is_file() && name.starts_with(prefix) {
            scripts.push((name, entry.path()));
        }
    }
    scripts.sort();

    for (name, path) in scripts {
        debug!("running hook script {}", path.display());
        let status = Command::new(&path)
            .status()
            .await
            .with_context(|| format!("Failed to execute hook script {}", path.display()))?;

        if !status.success() {
            println!("{}", format!("✗ {name} failed").red());
            bail!("hook script {} exited with {}", name, status);
        }
    }

    Ok(())
}
