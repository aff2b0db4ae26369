//! Run command implementation.
//!
//! `autonode` with no subcommand detects the project's Node.js version and
//! activates it.

use std::path::{Path, PathBuf};

use crate::error::{AutonodeError, Result};
use crate::service::{AutonodeService, RunOptions};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    project_root: PathBuf,
    service: AutonodeService,
    check_only: bool,
    force: bool,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(project_root: &Path, service: AutonodeService, check_only: bool, force: bool) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            service,
            check_only,
            force,
        }
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let options = RunOptions {
            project_path: self.project_root.clone(),
            check_only: self.check_only,
            force: self.force,
        };

        match self.service.run(&options, ui) {
            Ok(outcome) => {
                tracing::debug!(?outcome, "Run finished");
                Ok(CommandResult::success())
            }
            // Install and switch failures are reported by the service itself
            Err(AutonodeError::CommandFailed { .. }) => Ok(CommandResult::failure(1)),
            Err(e @ AutonodeError::NoVersionFound { .. }) => {
                ui.error(&e.to_string());
                ui.message(
                    "Add a .nvmrc, .node-version, .autonode.yml, package.json engines.node \
                     or Dockerfile FROM node:<version>",
                );
                Ok(CommandResult::failure(1))
            }
            Err(e) => {
                ui.error(&e.to_string());
                Ok(CommandResult::failure(1))
            }
        }
    }
}
