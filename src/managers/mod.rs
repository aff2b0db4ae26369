//! Node.js version managers.
//!
//! A [`VersionManager`] wraps one external tool. The service picks the first
//! manager in its list that reports itself installed, so list order is the
//! precedence.

pub mod sourced;
pub mod volta;

pub use sourced::SourcedManager;
pub use volta::VoltaManager;

use std::sync::Arc;

use crate::error::Result;
use crate::shell::ShellExecutor;

/// Trait for Node.js version managers.
pub trait VersionManager {
    /// Tool name, used for output only.
    fn name(&self) -> &str;

    /// Whether the tool is available on this machine.
    fn is_installed(&self) -> bool;

    /// Whether `version` already appears in the tool's installed list.
    fn is_version_installed(&self, version: &str) -> Result<bool>;

    /// Download and install `version`.
    fn install_version(&self, version: &str) -> Result<()>;

    /// Activate `version` for the project.
    fn use_version(&self, version: &str) -> Result<()>;

    /// Shell lines that activate `version` when evaluated by the caller's shell.
    fn activation_script(&self, version: &str) -> String;
}

/// Strip a single leading `v` (`v18.17.0` becomes `18.17.0`).
pub fn normalize_version(version: &str) -> &str {
    version.strip_prefix('v').unwrap_or(version)
}

/// Built-in managers in precedence order: nvm, nvs, volta.
pub fn default_managers(shell: Arc<dyn ShellExecutor>) -> Vec<Box<dyn VersionManager>> {
    vec![
        Box::new(SourcedManager::nvm(Arc::clone(&shell))),
        Box::new(SourcedManager::nvs(Arc::clone(&shell))),
        Box::new(VoltaManager::new(shell)),
    ]
}
