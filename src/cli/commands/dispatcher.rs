//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::cache::CacheStore;
use crate::cli::args::{Cli, Commands};
use crate::detection::{default_profile_detectors, default_version_detectors};
use crate::error::Result;
use crate::managers::default_managers;
use crate::releases::NodeReleasesClient;
use crate::service::AutonodeService;
use crate::shell::{ShellExecutor, SystemShell};
use crate::switchers::default_switchers;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Build the service with every built-in detector, manager and switcher.
pub fn default_service() -> AutonodeService {
    let shell: Arc<dyn ShellExecutor> = Arc::new(SystemShell::new());
    let releases = NodeReleasesClient::new(CacheStore::default_location());

    AutonodeService::new(
        default_version_detectors(Box::new(releases)),
        default_profile_detectors(),
        default_managers(Arc::clone(&shell)),
        default_switchers(shell),
    )
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Shell) => {
                let cmd = super::shell::ShellCommand::new(&self.project_root, default_service());
                cmd.execute(ui)
            }
            Some(Commands::Config(args)) => {
                let cmd = super::config::ConfigCommand::new(&self.project_root, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                let cmd = super::run::RunCommand::new(
                    &self.project_root,
                    default_service(),
                    cli.check,
                    cli.force,
                );
                cmd.execute(ui)
            }
        }
    }
}
