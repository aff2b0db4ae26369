//! Volta version manager.

use std::sync::Arc;

use crate::error::Result;
use crate::shell::{quote, ShellExecutor};

use super::{normalize_version, VersionManager};

/// Volta ships a real binary, so commands run directly without a shell.
///
/// Activation pins the version into the project's `package.json`.
pub struct VoltaManager {
    shell: Arc<dyn ShellExecutor>,
}

impl VoltaManager {
    pub fn new(shell: Arc<dyn ShellExecutor>) -> Self {
        Self { shell }
    }
}

impl VersionManager for VoltaManager {
    fn name(&self) -> &str {
        "volta"
    }

    fn is_installed(&self) -> bool {
        self.shell.command_exists("volta")
    }

    fn is_version_installed(&self, version: &str) -> Result<bool> {
        let output = self.shell.execute("volta", &["list", "node"])?;
        Ok(output.contains(normalize_version(version)))
    }

    fn install_version(&self, version: &str) -> Result<()> {
        let spec = format!("node@{}", normalize_version(version));
        self.shell.execute("volta", &["install", &spec])?;
        Ok(())
    }

    fn use_version(&self, version: &str) -> Result<()> {
        let spec = format!("node@{}", normalize_version(version));
        self.shell.execute("volta", &["pin", &spec])?;
        Ok(())
    }

    fn activation_script(&self, version: &str) -> String {
        let spec = format!("node@{}", normalize_version(version));
        format!("volta pin {} 2>/dev/null", quote(&spec))
    }
}
