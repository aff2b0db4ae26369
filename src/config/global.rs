//! Global settings stored in `~/.autonode/config.json`.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::cache::CacheStore;

/// Cache key of the global settings file.
pub const GLOBAL_CONFIG_FILE: &str = "config.json";

/// Default number of days between update checks.
pub const DEFAULT_UPDATE_CHECK_INTERVAL_DAYS: u32 = 7;

/// User-wide AutoNode settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalConfig {
    /// Disable the background update check.
    #[serde(default)]
    pub disable_update_check: bool,

    /// Days between update checks.
    #[serde(default = "default_interval_days")]
    pub update_check_interval_days: u32,
}

fn default_interval_days() -> u32 {
    DEFAULT_UPDATE_CHECK_INTERVAL_DAYS
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            disable_update_check: false,
            update_check_interval_days: DEFAULT_UPDATE_CHECK_INTERVAL_DAYS,
        }
    }
}

impl GlobalConfig {
    /// Load settings, falling back to defaults when the file is missing or malformed.
    pub fn load(store: &CacheStore) -> Self {
        match store.read::<GlobalConfig>(GLOBAL_CONFIG_FILE) {
            Ok(Some(config)) => config,
            Ok(None) => Self::default(),
            Err(e) => {
                tracing::debug!("Ignoring unreadable global config: {:#}", e);
                Self::default()
            }
        }
    }

    /// Persist settings.
    pub fn save(&self, store: &CacheStore) -> anyhow::Result<()> {
        store.write(GLOBAL_CONFIG_FILE, self)
    }

    /// Interval between update checks. A zero setting falls back to the default.
    pub fn update_check_interval(&self) -> Duration {
        let days = if self.update_check_interval_days == 0 {
            DEFAULT_UPDATE_CHECK_INTERVAL_DAYS
        } else {
            self.update_check_interval_days
        };
        Duration::from_secs(u64::from(days) * 24 * 60 * 60)
    }
}
