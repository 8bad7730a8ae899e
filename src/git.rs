//! src/git.rs

use anyhow::{anyhow, Context, Result};
use log::debug;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;

pub async fn run_git_command(args: &[&str]) -> Result<String> {
    debug!("running git {}", args.join(" "));
    let output = Command::new("git")
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .context("Failed to execute git command")?;

    if output.status.success() {
        Ok(String::from_utf8(output.stdout).context("Failed to parse git command output")?)
    } else {
        let stderr = String::from_utf8(output.stderr)
            .unwrap_or_else(|_| "Could not read stderr".to_string());
        Err(anyhow!(
            "Git command failed with status {}:\n{}",
            output.status,
            stderr
        ))
    }
}

/// Returns the repository's git directory (usually `.git`), relative to the
/// current working directory the way git reports it.
pub async fn get_git_dir() -> Result<PathBuf> {
    let output = run_git_command(&["rev-parse", "--git-dir"]).await?;
    Ok(PathBuf::from(output.trim()))
}

pub async fn get_repo_root() -> Result<PathBuf> {
    let output = run_git_command(&["rev-parse", "--show-toplevel"]).await?;
    Ok(PathBuf::from(output.trim()))
}

/// Paths of all files currently staged for commit, relative to the repo root.
pub async fn get_staged_files() -> Result<Vec<String>> {
    let output = run_git_command(&["diff", "--staged", "--name-only"]).await?;
    Ok(output.lines().map(String::from).collect())
}
