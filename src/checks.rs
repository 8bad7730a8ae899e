//! src/checks.rs
// Runs a single configured check against the staged files.

use anyhow::{bail, Result};
use colored::Colorize;
use std::fmt;
use std::path::Path;
use std::process::ExitStatus;
use tokio::process::Command;

use crate::config;
use crate::git;
use crate::language;

/// Represents a command to be executed, abstracting away its source.
#[derive(Debug, Clone)]
pub struct CheckCommand {
    program: String,
    args: Vec<String>,
}

impl CheckCommand {
    /// Splits a configured command line on whitespace. Returns `None` for an
    /// empty or comment-only line.
    pub fn parse(command: &str) -> Option<Self> {
        if command.trim_start().starts_with('#') {
            return None;
        }
        let mut parts = command.split_whitespace().map(String::from);
        let program = parts.next()?;
        Some(CheckCommand {
            program,
            args: parts.collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Runs the command with inherited stdio so the underlying tool reports
    /// straight to the user's terminal.
    pub async fn status(&self) -> Result<ExitStatus> {
        Command::new(&self.program)
            .args(&self.args)
            .status()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn command '{}': {}", self, e))
    }
}

impl fmt::Display for CheckCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.args.is_empty() {
            write!(f, "{}", self.program)
        } else {
            write!(f, "{} {}", self.program, self.args.join(" "))
        }
    }
}

/// Runs the named check from the configuration. Prints the remedy command and
/// fails when the underlying tool reports issues.
pub async fn run_check(name: &str) -> Result<()> {
    let cfg = config::load_config().await?;
    let Some(check) = cfg.checks.get(name) else {
        bail!(
            "No check named '{}' is configured. Run `hookmate init` to create a default {}.",
            name,
            config::CONFIG_FILE
        );
    };

    if !check.types.is_empty() {
        let staged = git::get_staged_files().await?;
        let applies = staged
            .iter()
            .any(|f| language::file_matches_types(Path::new(f), &check.types));
        if !applies {
            println!(
                "{}",
                format!("⏭  {name}: no staged files match its file types, skipping.").dimmed()
            );
            return Ok(());
        }
    }

    let Some(cmd) = CheckCommand::parse(&check.command) else {
        bail!("Check '{}' has an empty command.", name);
    };
    if which::which(cmd.program()).is_err() {
        bail!(
            "Check '{}' needs '{}', which was not found in PATH.",
            name,
            cmd.program()
        );
    }

    println!("🔍 {name}: running {}", cmd.to_string().cyan());

    let status = cmd.status().await?;
    if !status.success() {
        let remedy = check.remedy.as_deref().unwrap_or(&check.command);
        println!(
            "{}",
            format!("✗ {name} found issues, run `{remedy}` to fix them.").red()
        );
        bail!("check '{}' failed", name);
    }

    println!("{}", format!("✅ {name} passed.").green());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_program_and_args() {
        let cmd = CheckCommand::parse("cargo fmt -- --check").unwrap();
        assert_eq!(cmd.program(), "cargo");
        assert_eq!(cmd.to_string(), "cargo fmt -- --check");
    }

    #[test]
    fn parse_rejects_empty_and_commented_lines() {
        assert!(CheckCommand::parse("").is_none());
        assert!(CheckCommand::parse("   ").is_none());
        assert!(CheckCommand::parse("# cargo fmt").is_none());
    }

    #[test]
    fn display_of_bare_program_has_no_trailing_space() {
        let cmd = CheckCommand::parse("true").unwrap();
        assert_eq!(cmd.to_string(), "true");
    }
}
