//! `ts-npmrc` profile switcher.

use crate::error::Result;

use super::{ExecutableLocator, ProfileSwitcher};

/// Switches profiles with `ts-npmrc link -p <name>`.
///
/// `ts-npmrc list` decorates profile names with markers, so a profile exists
/// when any line contains its name.
pub struct TsNpmrcSwitcher {
    locator: ExecutableLocator,
}

impl TsNpmrcSwitcher {
    pub fn new(locator: ExecutableLocator) -> Self {
        Self { locator }
    }
}

impl ProfileSwitcher for TsNpmrcSwitcher {
    fn name(&self) -> &str {
        "ts-npmrc"
    }

    fn is_installed(&self) -> bool {
        self.locator.locate().is_ok()
    }

    fn profile_exists(&self, profile: &str) -> Result<bool> {
        let output = self.locator.run(&["list"])?;
        Ok(output.lines().any(|line| line.trim().contains(profile)))
    }

    fn switch_profile(&self, profile: &str) -> Result<()> {
        self.locator.run(&["link", "-p", profile])?;
        Ok(())
    }
}
