//! src/cli.rs
use clap::{Parser, Subcommand};

/// 一个用来安装和运行 Git pre-commit 检查钩子的 CLI 工具
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize the .hookmate.toml configuration file.
    #[command(alias = "i")]
    Init,
    /// Install the pre-commit dispatcher and check scripts into .git/hooks.
    Install {
        /// Replace a pre-commit hook that was installed by another tool.
        #[arg(short, long)]
        force: bool,
    },
    /// Remove every hookmate-managed file from .git/hooks.
    Uninstall,
    /// Show whether the pre-commit hook is installed and who owns it.
    Status,
    /// Run a single configured check against the staged files.
    Check {
        /// Name of a check from .hookmate.toml, e.g. "fmt" or "clippy".
        name: String,
    },
    /// [Internal] Run every script in .git/hooks/<hook>.d, used by git hooks.
    #[command(hide = true)]
    Run {
        /// The hook being dispatched, e.g. "pre-commit".
        hook: String,
    },
}
