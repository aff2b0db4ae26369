//! npm profile switchers.
//!
//! Each [`ProfileSwitcher`] wraps one profile tool. Like managers, the
//! service uses the first installed switcher in list order.

pub mod locator;
pub mod npmrc;
pub mod rc_manager;
pub mod ts_npmrc;

pub use locator::ExecutableLocator;
pub use npmrc::NpmrcSwitcher;
pub use rc_manager::RcManagerSwitcher;
pub use ts_npmrc::TsNpmrcSwitcher;

use std::sync::Arc;

use crate::error::Result;
use crate::shell::ShellExecutor;

/// Trait for npm profile switchers.
pub trait ProfileSwitcher {
    /// Tool name, used for output only.
    fn name(&self) -> &str;

    /// Whether the tool can be located.
    fn is_installed(&self) -> bool;

    /// Whether the tool knows a profile called `profile`.
    fn profile_exists(&self, profile: &str) -> Result<bool>;

    /// Make `profile` the active npm configuration.
    fn switch_profile(&self, profile: &str) -> Result<()>;
}

/// Built-in switchers in precedence order: npmrc, ts-npmrc, rc-manager.
pub fn default_switchers(shell: Arc<dyn ShellExecutor>) -> Vec<Box<dyn ProfileSwitcher>> {
    vec![
        Box::new(NpmrcSwitcher::new(ExecutableLocator::new(
            "npmrc",
            Arc::clone(&shell),
        ))),
        Box::new(TsNpmrcSwitcher::new(ExecutableLocator::new(
            "ts-npmrc",
            Arc::clone(&shell),
        ))),
        Box::new(RcManagerSwitcher::new(ExecutableLocator::new(
            "rc-manager",
            shell,
        ))),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::MockShell;

    #[test]
    fn default_order() {
        let switchers = default_switchers(Arc::new(MockShell::new()));
        let names: Vec<&str> = switchers.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["npmrc", "ts-npmrc", "rc-manager"]);
    }
}
