//! src/config.rs

use anyhow::{Context, Result};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tokio::fs;

use crate::git;

pub const CONFIG_FILE: &str = ".hookmate.toml";

/// Represents the main configuration for the application.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// The set of checks the pre-commit hook runs, keyed by check name.
    #[serde(default)]
    pub checks: BTreeMap<String, CheckConfig>,
}

/// Defines a single check: the command to run and how to report failures.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CheckConfig {
    /// The command line to execute, split on whitespace.
    pub command: String,
    /// The command the user should run to fix reported issues.
    #[serde(default)]
    pub remedy: Option<String>,
    /// File types the check applies to (e.g. "rust"). When non-empty, the
    /// check is skipped unless a staged file matches one of the types.
    #[serde(default)]
    pub types: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        let mut checks = BTreeMap::new();
        checks.insert(
            "fmt".to_string(),
            CheckConfig {
                command: "cargo fmt -- --check".to_string(),
                remedy: Some("cargo fmt".to_string()),
                types: vec!["rust".to_string()],
            },
        );
        checks.insert(
            "clippy".to_string(),
            CheckConfig {
                command: "cargo clippy --all-targets -- -D warnings".to_string(),
                remedy: Some("cargo clippy --fix".to_string()),
                types: vec!["rust".to_string()],
            },
        );
        Config { checks }
    }
}

/// Returns the path of the configuration file at the repository root.
pub async fn get_config_path() -> Result<PathBuf> {
    let repo_root = git::get_repo_root().await?;
    Ok(repo_root.join(CONFIG_FILE))
}

/// Creates a default configuration file at the repository root, unless one
/// already exists.
pub async fn create_default_config() -> Result<()> {
    let config_path = get_config_path().await?;
    if config_path.exists() {
        println!(
            "{}",
            format!("Config file already exists at {}", config_path.display()).yellow()
        );
        return Ok(());
    }

    let config_content = toml::to_string(&Config::default())?;
    fs::write(&config_path, config_content)
        .await
        .context("Could not write config file")?;

    println!("✅ Created default config file at {}", config_path.display());
    Ok(())
}

/// Loads the configuration from the repository root, falling back to the
/// built-in defaults when no config file is present.
pub async fn load_config() -> Result<Config> {
    let config_path = get_config_path().await?;
    if !config_path.exists() {
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(&config_path)
        .await
        .context("Could not read config file")?;
    let config: Config =
        toml::from_str(&config_content).context("Could not parse config file")?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_declares_fmt_and_clippy() {
        let config = Config::default();
        assert!(config.checks.contains_key("fmt"));
        assert!(config.checks.contains_key("clippy"));
        assert_eq!(config.checks["fmt"].remedy.as_deref(), Some("cargo fmt"));
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let serialized = toml::to_string(&Config::default()).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.checks.len(), Config::default().checks.len());
    }

    #[test]
    fn missing_optional_fields_default() {
        let parsed: Config = toml::from_str(
            r#"
            [checks.fmt]
            command = "cargo fmt -- --check"
            "#,
        )
        .unwrap();
        let check = &parsed.checks["fmt"];
        assert!(check.remedy.is_none());
        assert!(check.types.is_empty());
    }
}
