//! Shell command implementation.
//!
//! `autonode shell` prints activation lines for `eval "$(autonode shell)"`.
//! Any failure prints nothing and still exits zero, so the calling shell
//! never evaluates an error message.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::service::AutonodeService;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The shell command implementation.
pub struct ShellCommand {
    project_root: PathBuf,
    service: AutonodeService,
}

impl ShellCommand {
    /// Create a new shell command.
    pub fn new(project_root: &Path, service: AutonodeService) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            service,
        }
    }

    /// Activation script for the project, if any.
    pub fn script(&self) -> Option<String> {
        self.service.shell_script(&self.project_root)
    }
}

impl Command for ShellCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if let Some(script) = self.script() {
            let mut stdout = std::io::stdout().lock();
            if let Err(e) = writeln!(stdout, "{}", script) {
                tracing::debug!("Could not write activation script: {}", e);
            }
        }

        Ok(CommandResult::success())
    }
}
