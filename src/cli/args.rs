//! CLI argument definitions.
//!
//! Running `autonode` without a subcommand detects and switches the
//! project's Node.js version.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// AutoNode - Automatically detect and switch Node.js versions.
#[derive(Debug, Parser)]
#[command(name = "autonode")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Only check and display the detected version without switching
    #[arg(short, long)]
    pub check: bool,

    /// Force reinstall the version even if already installed
    #[arg(short, long)]
    pub force: bool,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Disable the automatic update check
    #[arg(long, global = true, env = "AUTONODE_NO_UPDATE_CHECK")]
    pub no_update_check: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

const CONFIG_EXAMPLES: &str = "\
Examples:
  autonode config --node 20                 Pin Node.js 20
  autonode config --profile work            Pin the npm profile
  autonode config --node 20 --profile work  Pin both
  autonode config --show                    Show current configuration
  autonode config --remove                  Delete .autonode.yml
  autonode config --node \"\"                Unset only nodeVersion";

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print activation commands for `eval` (silent on failure)
    Shell,

    /// Manage the project's .autonode.yml
    #[command(after_help = CONFIG_EXAMPLES)]
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Set the Node.js version (empty value removes it)
    #[arg(long, value_name = "VERSION")]
    pub node: Option<String>,

    /// Set the npm profile (empty value removes it)
    #[arg(long, value_name = "NAME")]
    pub profile: Option<String>,

    /// Show the current configuration
    #[arg(long, conflicts_with_all = ["node", "profile", "remove"])]
    pub show: bool,

    /// Delete .autonode.yml
    #[arg(long, conflicts_with_all = ["node", "profile"])]
    pub remove: bool,
}

impl Cli {
    /// Whether this run should check for a newer release.
    ///
    /// The banner is only shown with normal output outside shell mode, so
    /// any other run skips the check and never waits on the network.
    pub fn wants_update_check(&self) -> bool {
        !self.no_update_check && !self.quiet && !matches!(self.command, Some(Commands::Shell))
    }
}

impl ConfigArgs {
    /// True when no action was requested.
    pub fn is_empty(&self) -> bool {
        self.node.is_none() && self.profile.is_none() && !self.show && !self.remove
    }
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
