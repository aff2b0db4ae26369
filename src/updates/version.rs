//! Version checking against the latest release.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::cache::CacheStore;

/// Current version of autonode.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// GitHub API URL for the latest release.
pub const GITHUB_RELEASES_URL: &str =
    "https://api.github.com/repos/matutetandil/autonode/releases/latest";

/// Cache key for the last check.
const CACHE_KEY: &str = "update-check.json";

/// HTTP timeout for the release lookup.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(3);

/// Information about an available update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateInfo {
    /// Running version.
    pub current: String,
    /// Latest published version.
    pub latest: String,
    /// Whether `latest` is newer than `current`.
    pub update_available: bool,
}

/// Cached update check result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateCache {
    last_check: DateTime<Utc>,
    latest_version: String,
    current_version: String,
    update_available: bool,
}

/// Checks GitHub for a newer autonode release, caching the answer.
pub struct UpdateChecker {
    store: CacheStore,
    current_version: String,
    interval: Duration,
    releases_url: String,
}

impl UpdateChecker {
    /// Checker for the running binary against the official repository.
    pub fn new(store: CacheStore, interval: Duration) -> Self {
        Self {
            store,
            current_version: VERSION.to_string(),
            interval,
            releases_url: GITHUB_RELEASES_URL.to_string(),
        }
    }

    /// Override the release endpoint.
    pub fn with_releases_url(mut self, url: impl Into<String>) -> Self {
        self.releases_url = url.into();
        self
    }

    /// Override the version being compared.
    pub fn with_current_version(mut self, version: impl Into<String>) -> Self {
        self.current_version = version.into();
        self
    }

    /// Check for an update.
    ///
    /// A cached answer younger than the interval is reused. When the fetch
    /// fails, a stale cached answer is still reported. Never errors.
    pub fn check(&self) -> Option<UpdateInfo> {
        let cached = match self.store.read::<UpdateCache>(CACHE_KEY) {
            Ok(cached) => cached,
            Err(e) => {
                tracing::debug!("Ignoring unreadable update cache: {:#}", e);
                None
            }
        };

        if let Some(cache) = &cached {
            if self.is_fresh(cache) {
                return Some(self.info(&cache.latest_version));
            }
        }

        match self.fetch_latest_version() {
            Ok(latest) => {
                let info = self.info(&latest);
                self.save(&info);
                Some(info)
            }
            Err(e) => {
                tracing::debug!("Update check failed: {:#}", e);
                cached.map(|c| self.info(&c.latest_version))
            }
        }
    }

    fn is_fresh(&self, cache: &UpdateCache) -> bool {
        let age = Utc::now().signed_duration_since(cache.last_check);
        age.to_std().map(|age| age < self.interval).unwrap_or(true)
    }

    fn info(&self, latest: &str) -> UpdateInfo {
        let latest = latest.trim_start_matches('v');
        UpdateInfo {
            current: self.current_version.clone(),
            latest: latest.to_string(),
            update_available: is_newer_version(latest, &self.current_version),
        }
    }

    fn save(&self, info: &UpdateInfo) {
        let cache = UpdateCache {
            last_check: Utc::now(),
            latest_version: info.latest.clone(),
            current_version: info.current.clone(),
            update_available: info.update_available,
        };

        if let Err(e) = self.store.write(CACHE_KEY, &cache) {
            tracing::debug!("Failed to write update cache: {:#}", e);
        }
    }

    fn fetch_latest_version(&self) -> Result<String> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(format!("autonode/{}", self.current_version))
            .timeout(FETCH_TIMEOUT)
            .build()?;

        let response: serde_json::Value = client
            .get(&self.releases_url)
            .send()?
            .error_for_status()?
            .json()
            .context("Failed to parse GitHub API response")?;

        let tag = response["tag_name"]
            .as_str()
            .context("No tag_name in response")?;

        Ok(tag.trim_start_matches('v').to_string())
    }
}

/// Compare versions to check if `latest` is newer than `current`.
///
/// Components are compared numerically, so `0.10.0` is newer than `0.9.0`.
pub fn is_newer_version(latest: &str, current: &str) -> bool {
    let parse_version = |v: &str| -> Vec<u32> {
        v.trim_start_matches('v')
            .split('.')
            .take(3)
            .filter_map(|s| s.parse().ok())
            .collect()
    };

    let latest_parts = parse_version(latest);
    let current_parts = parse_version(current);

    for (l, c) in latest_parts.iter().zip(current_parts.iter()) {
        if l > c {
            return true;
        }
        if l < c {
            return false;
        }
    }

    latest_parts.len() > current_parts.len()
}
