//! src/hook.rs

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::config;
use crate::git;

/// Marker comment embedded in every installed file so we can tell our hooks
/// apart from user-written ones.
const MARKER: &str = "# installed by hookmate";

const DISPATCHER_CONTENT: &str = r#"#!/bin/sh
# installed by hookmate -- re-run 'hookmate install' to refresh
exec hookmate run pre-commit "$@"
"#;

#[derive(Debug, PartialEq)]
pub enum HookStatus {
    NotInstalled,
    InstalledByUs,
    InstalledByOther,
}

fn check_script(name: &str) -> String {
    format!("#!/bin/sh\n{MARKER}\nexec hookmate check {name} \"$@\"\n")
}

async fn get_hooks_dir() -> Result<PathBuf> {
    let git_dir = git::get_git_dir().await?;
    Ok(git_dir.join("hooks"))
}

pub async fn check_hook_status() -> Result<HookStatus> {
    let hook_path = get_hooks_dir().await?.join("pre-commit");
    if !hook_path.exists() {
        return Ok(HookStatus::NotInstalled);
    }

    let content = fs::read_to_string(&hook_path).await?;
    if content.contains(MARKER) {
        Ok(HookStatus::InstalledByUs)
    } else {
        Ok(HookStatus::InstalledByOther)
    }
}

/// Writes a hook file and marks it executable. Overwrites whatever is there.
async fn write_hook_file(path: &Path, content: &str) -> Result<()> {
    let script = content.replace("\r\n", "\n");
    fs::write(path, script)
        .await
        .with_context(|| format!("Failed to write hook file {}", path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(path).await?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(path, perms)
            .await
            .context("Failed to set hook permissions")?;
    }

    Ok(())
}

/// Installs the pre-commit dispatcher and one check script per configured
/// check. Re-running overwrites every hookmate-managed file, so a partial
/// install from an earlier failure is repaired by running it again.
pub async fn install_hooks(force: bool) -> Result<()> {
    let cfg = config::load_config().await?;
    let hooks_dir = get_hooks_dir().await?;
    let hook_path = hooks_dir.join("pre-commit");
    let checks_dir = hooks_dir.join("pre-commit.d");

    if check_hook_status().await? == HookStatus::InstalledByOther && !force {
        bail!(
            "A pre-commit hook from another tool already exists at {}. \
             Re-run with --force to replace it.",
            hook_path.display()
        );
    }

    fs::create_dir_all(&checks_dir)
        .await
        .context("Failed to create hooks directory")?;

    write_hook_file(&hook_path, DISPATCHER_CONTENT).await?;
    println!(
        "✅ Installed pre-commit dispatcher at {}",
        hook_path.display()
    );

    for name in cfg.checks.keys() {
        let script_path = checks_dir.join(format!("pre-commit-{name}.sh"));
        write_hook_file(&script_path, &check_script(name)).await?;
        println!("✅ Installed check script {}", script_path.display());
    }

    Ok(())
}

/// Removes every hookmate-managed file from the hooks directory. Files we do
/// not own are left in place.
pub async fn uninstall_hooks() -> Result<()> {
    let hooks_dir = get_hooks_dir().await?;
    let hook_path = hooks_dir.join("pre-commit");
    let checks_dir = hooks_dir.join("pre-commit.d");

    match check_hook_status().await? {
        HookStatus::NotInstalled => {
            println!("{}", "No pre-commit hook is installed.".yellow());
        }
        HookStatus::InstalledByOther => {
            println!(
                "{}",
                "The pre-commit hook belongs to another tool, leaving it in place.".yellow()
            );
        }
        HookStatus::InstalledByUs => {
            fs::remove_file(&hook_path)
                .await
                .context("Failed to remove pre-commit hook")?;
            println!("🗑️  Removed pre-commit dispatcher.");
        }
    }

    if checks_dir.exists() {
        let mut removed = 0usize;
        let mut entries = fs::read_dir(&checks_dir)
            .await
            .context("Failed to read pre-commit.d")?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if !entry.file_type().await?.is_file() {
                continue;
            }
            let content = fs::read_to_string(&path).await.unwrap_or_default();
            if content.contains(MARKER) {
                fs::remove_file(&path)
                    .await
                    .with_context(|| format!("Failed to remove {}", path.display()))?;
                removed += 1;
            }
        }
        if removed > 0 {
            println!("🗑️  Removed {removed} check script(s) from pre-commit.d.");
        }
        // Only succeeds when nothing foreign is left behind.
        let _ = fs::remove_dir(&checks_dir).await;
    }

    Ok(())
}

pub async fn print_status() -> Result<()> {
    match check_hook_status().await? {
        HookStatus::NotInstalled => {
            println!("{}", "Pre-commit hook is not installed.".yellow());
        }
        HookStatus::InstalledByUs => {
            println!(
                "{}",
                "Pre-commit hook is installed and managed by hookmate.".green()
            );
        }
        HookStatus::InstalledByOther => {
            println!(
                "{}",
                "Pre-commit hook is installed by another tool.".red()
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn check_script_wraps_the_named_check() {
        let script = check_script("fmt");
        assert!(script.starts_with("#!/bin/sh\n"));
        assert!(script.contains(MARKER));
        assert!(script.contains("hookmate check fmt"));
    }

    #[test]
    fn dispatcher_content_carries_the_marker() {
        assert!(DISPATCHER_CONTENT.contains(MARKER));
        assert!(DISPATCHER_CONTENT.contains("hookmate run pre-commit"));
    }

    #[tokio::test]
    async fn write_hook_file_sets_executable_bit() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("pre-commit");

        write_hook_file(&path, DISPATCHER_CONTENT).await.unwrap();

        assert!(path.exists());
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&path).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o755);
        }
    }

    #[tokio::test]
    async fn write_hook_file_overwrite_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("pre-commit");

        write_hook_file(&path, DISPATCHER_CONTENT).await.unwrap();
        let first = std::fs::read_to_string(&path).unwrap();
        write_hook_file(&path, DISPATCHER_CONTENT).await.unwrap();
        let second = std::fs::read_to_string(&path).unwrap();

        assert_eq!(first, second);
    }
}
