//! Executable discovery for profile tools.
//!
//! Profile tools are usually installed globally under one nvm-managed Node
//! version, so they may be missing from PATH whenever another version is
//! active. Discovery checks PATH first, then every
//! `<nvm home>/versions/node/*/bin/<tool>`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{AutonodeError, Result};
use crate::shell::{tool_home, ShellExecutor};

/// Finds a profile tool on PATH or inside nvm's Node installations.
pub struct ExecutableLocator {
    tool: &'static str,
    shell: Arc<dyn ShellExecutor>,
    nvm_home: Option<PathBuf>,
}

impl ExecutableLocator {
    /// Locator using `NVM_DIR` or `~/.nvm` as the fallback tree.
    pub fn new(tool: &'static str, shell: Arc<dyn ShellExecutor>) -> Self {
        let nvm_home = tool_home("NVM_DIR", ".nvm", |k| std::env::var(k));
        Self::with_nvm_home(tool, shell, nvm_home)
    }

    /// Locator with an explicit nvm home.
    pub fn with_nvm_home(
        tool: &'static str,
        shell: Arc<dyn ShellExecutor>,
        nvm_home: Option<PathBuf>,
    ) -> Self {
        Self {
            tool,
            shell,
            nvm_home,
        }
    }

    /// Return an invocable program: the bare name when on PATH, otherwise
    /// the first nvm-tree match in glob order.
    pub fn locate(&self) -> Result<String> {
        if self.shell.command_exists(self.tool) {
            return Ok(self.tool.to_string());
        }

        if let Some(path) = self
            .nvm_home
            .as_deref()
            .and_then(|home| find_in_nvm_tree(home, self.tool))
        {
            tracing::debug!(tool = self.tool, path = %path.display(), "Found tool in nvm tree");
            return Ok(path.display().to_string());
        }

        Err(AutonodeError::ToolNotFound {
            tool: self.tool.to_string(),
        })
    }

    /// Run the located tool with `args`.
    pub fn run(&self, args: &[&str]) -> Result<String> {
        let program = self.locate()?;
        self.shell.execute(&program, args)
    }
}

fn find_in_nvm_tree(nvm_home: &Path, tool: &str) -> Option<PathBuf> {
    let base = nvm_home.join("versions").join("node");
    let pattern = format!(
        "{}/*/bin/{}",
        glob::Pattern::escape(&base.to_string_lossy()),
        tool
    );

    match glob::glob(&pattern) {
        Ok(paths) => paths.filter_map(|entry| entry.ok()).next(),
        Err(e) => {
            tracing::debug!(%pattern, "Invalid glob pattern: {}", e);
            None
        }
    }
}
