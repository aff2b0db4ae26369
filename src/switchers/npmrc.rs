//! `npmrc` profile switcher.

use crate::error::Result;

use super::{ExecutableLocator, ProfileSwitcher};

/// Switches profiles with `npmrc <name>`.
///
/// Running `npmrc` without arguments lists profiles, one per line, with the
/// active one marked by a leading `*`.
pub struct NpmrcSwitcher {
    locator: ExecutableLocator,
}

impl NpmrcSwitcher {
    pub fn new(locator: ExecutableLocator) -> Self {
        Self { locator }
    }
}

impl ProfileSwitcher for NpmrcSwitcher {
    fn name(&self) -> &str {
        "npmrc"
    }

    fn is_installed(&self) -> bool {
        self.locator.locate().is_ok()
    }

    fn profile_exists(&self, profile: &str) -> Result<bool> {
        let output = self.locator.run(&[])?;

        Ok(output.lines().any(|line| {
            let line = line.trim();
            line.strip_prefix('*').unwrap_or(line).trim() == profile
        }))
    }

    fn switch_profile(&self, profile: &str) -> Result<()> {
        self.locator.run(&[profile])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::MockShell;
    use std::sync::Arc;

    const LISTING: &str = "Available npmrcs:\n\n* default\n  work\n  personal-2";

    fn switcher(shell: MockShell) -> (NpmrcSwitcher, Arc<MockShell>) {
        let shell = Arc::new(shell.with_command("npmrc"));
        let locator = ExecutableLocator::with_nvm_home("npmrc", shell.clone(), None);
        (NpmrcSwitcher::new(locator), shell)
    }

    #[test]
    fn matches_exact_names() {
        let (switcher, shell) = switcher(MockShell::new().on("npmrc", LISTING));

        assert!(switcher.profile_exists("work").unwrap());
        assert!(!switcher.profile_exists("personal").unwrap());
        assert_eq!(shell.calls()[0], "npmrc");
    }

    #[test]
    fn matches_active_marker() {
        let (switcher, _) = switcher(MockShell::new().on("npmrc", LISTING));
        assert!(switcher.profile_exists("default").unwrap());
    }

    #[test]
    fn switch_passes_name() {
        let (switcher, shell) = switcher(MockShell::new());
        switcher.switch_profile("work").unwrap();
        assert_eq!(shell.calls(), vec!["npmrc work".to_string()]);
    }

    #[test]
    fn list_failure_errors() {
        let (switcher, _) = switcher(MockShell::new().fail_on("npmrc", "broken"));
        assert!(switcher.profile_exists("work").is_err());
    }

    #[test]
    fn not_installed_when_missing() {
        let locator = ExecutableLocator::with_nvm_home("npmrc", Arc::new(MockShell::new()), None);
        let switcher = NpmrcSwitcher::new(locator);

        assert!(!switcher.is_installed());
        assert!(switcher.switch_profile("work").is_err());
    }
}
