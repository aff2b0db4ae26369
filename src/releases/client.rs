//! Release index client with a local cache.

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

use crate::cache::CacheStore;

use super::CodenameResolver;

/// Official Node.js release index.
pub const NODE_RELEASES_URL: &str = "https://nodejs.org/dist/index.json";

/// Cache key for the codename map.
const CACHE_KEY: &str = "node-releases.json";

/// How long the cached codename map stays fresh (1 day).
const CACHE_MAX_AGE_SECS: i64 = 86400;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// One entry of the release index.
///
/// `lts` is `false` for non-LTS releases and the codename string otherwise.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeRelease {
    pub version: String,
    #[serde(default)]
    pub lts: serde_json::Value,
}

/// Cached codename map.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ReleasesCache {
    codename_to_version: HashMap<String, String>,
    last_updated: DateTime<Utc>,
}

impl ReleasesCache {
    fn is_fresh(&self) -> bool {
        Utc::now()
            .signed_duration_since(self.last_updated)
            .num_seconds()
            < CACHE_MAX_AGE_SECS
    }
}

/// Build a lowercased codename → major version map.
///
/// The index lists newest releases first, so the first release seen for a
/// codename wins.
pub fn codename_map(releases: &[NodeRelease]) -> HashMap<String, String> {
    let mut map = HashMap::new();

    for release in releases {
        let Some(codename) = release.lts.as_str() else {
            continue;
        };

        let version = release.version.trim_start_matches('v');
        let major = version.split('.').next().unwrap_or(version);
        if major.is_empty() {
            continue;
        }

        map.entry(codename.to_lowercase())
            .or_insert_with(|| major.to_string());
    }

    map
}

/// Fetches the release index and caches the codename map in `~/.autonode`.
pub struct NodeReleasesClient {
    store: CacheStore,
    index_url: String,
}

impl NodeReleasesClient {
    /// Create a client for the official release index.
    pub fn new(store: CacheStore) -> Self {
        Self::with_index_url(store, NODE_RELEASES_URL)
    }

    /// Create a client for a custom index URL.
    pub fn with_index_url(store: CacheStore, index_url: impl Into<String>) -> Self {
        Self {
            store,
            index_url: index_url.into(),
        }
    }

    /// Load the cached map if it is still fresh.
    fn load_fresh_cache(&self) -> Option<ReleasesCache> {
        match self.store.read::<ReleasesCache>(CACHE_KEY) {
            Ok(Some(cache)) if cache.is_fresh() => Some(cache),
            Ok(_) => None,
            Err(e) => {
                tracing::debug!("Ignoring unreadable releases cache: {:#}", e);
                None
            }
        }
    }

    /// Fetch the index and rewrite the cache.
    fn refresh(&self) -> Result<ReleasesCache> {
        tracing::debug!(url = %self.index_url, "Fetching Node.js releases");

        let releases = self.fetch_releases()?;
        let cache = ReleasesCache {
            codename_to_version: codename_map(&releases),
            last_updated: Utc::now(),
        };

        if let Err(e) = self.store.write(CACHE_KEY, &cache) {
            tracing::debug!("Failed to write releases cache: {:#}", e);
        }

        tracing::debug!(
            codenames = cache.codename_to_version.len(),
            "Node.js releases cache updated"
        );
        Ok(cache)
    }

    fn fetch_releases(&self) -> Result<Vec<NodeRelease>> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("autonode/", env!("CARGO_PKG_VERSION")))
            .timeout(FETCH_TIMEOUT)
            .build()?;

        let releases = client
            .get(&self.index_url)
            .send()
            .context("HTTP request failed")?
            .error_for_status()?
            .json()
            .context("Failed to parse release index")?;

        Ok(releases)
    }
}

impl CodenameResolver for NodeReleasesClient {
    fn major_for_codename(&self, codename: &str) -> Result<String> {
        let codename = codename.to_lowercase();

        if let Some(version) = self
            .load_fresh_cache()
            .and_then(|c| c.codename_to_version.get(&codename).cloned())
        {
            return Ok(version);
        }

        let cache = self
            .refresh()
            .context("Failed to fetch Node.js releases")?;

        cache
            .codename_to_version
            .get(&codename)
            .cloned()
            .ok_or_else(|| anyhow!("codename '{}' not found", codename))
    }
}
