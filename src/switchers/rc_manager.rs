//! `rc-manager` profile switcher.

use crate::error::Result;

use super::{ExecutableLocator, ProfileSwitcher};

/// Switches profiles with `rc-manager load <name>`.
pub struct RcManagerSwitcher {
    locator: ExecutableLocator,
}

impl RcManagerSwitcher {
    pub fn new(locator: ExecutableLocator) -> Self {
        Self { locator }
    }
}

impl ProfileSwitcher for RcManagerSwitcher {
    fn name(&self) -> &str {
        "rc-manager"
    }

    fn is_installed(&self) -> bool {
        self.locator.locate().is_ok()
    }

    fn profile_exists(&self, profile: &str) -> Result<bool> {
        let output = self.locator.run(&["list"])?;
        Ok(output.lines().any(|line| line.trim() == profile))
    }

    fn switch_profile(&self, profile: &str) -> Result<()> {
        self.locator.run(&["load", profile])?;
        Ok(())
    }
}
