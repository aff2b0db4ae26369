//! Node.js release metadata.
//!
//! Resolves LTS codenames (`iron`, `jod`, ...) to major versions for the
//! Dockerfile detector.

pub mod client;

pub use client::{codename_map, NodeRelease, NodeReleasesClient, NODE_RELEASES_URL};

/// Resolves an LTS codename to a major Node.js version.
///
/// Implementations may hit the network; any failure means "unresolvable"
/// to callers, never a hard error.
pub trait CodenameResolver {
    /// Return the major version (e.g. `"20"`) for `codename` (e.g. `"iron"`).
    fn major_for_codename(&self, codename: &str) -> anyhow::Result<String>;
}
