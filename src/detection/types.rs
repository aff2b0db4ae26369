//! Detector traits and result types.

use std::path::Path;

use crate::error::Result;

/// Trait for Node.js version detectors.
///
/// Each detector inspects one artifact in the project root. Detectors are
/// tried in ascending [`priority`](VersionDetector::priority) order and the
/// first one reporting a version wins.
pub trait VersionDetector {
    /// Inspect the project and report the requested version, if any.
    ///
    /// A missing artifact is `Ok(DetectionResult::not_found())`, not an error.
    fn detect(&self, project_root: &Path) -> Result<DetectionResult>;

    /// Position in the detection chain (lower is checked first).
    fn priority(&self) -> u32;

    /// Human-readable name of the inspected artifact.
    fn source_name(&self) -> &str;
}

/// Trait for npm profile detectors.
pub trait ProfileDetector {
    /// Inspect the project and report the requested npm profile, if any.
    fn detect(&self, project_root: &Path) -> Result<ProfileDetectionResult>;

    /// Position in the detection chain (lower is checked first).
    fn priority(&self) -> u32;

    /// Human-readable name of the inspected artifact.
    fn source_name(&self) -> &str;
}

/// Outcome of one version detection attempt.
///
/// `version` is the raw requested string: a bare major, a full semver
/// (optionally `v`-prefixed) or whatever alias the file contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionResult {
    /// Whether a version was found.
    pub found: bool,

    /// The requested version.
    pub version: String,

    /// Where the version came from.
    pub source: String,
}

impl DetectionResult {
    /// Create a positive detection result.
    pub fn found(version: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            found: true,
            version: version.into(),
            source: source.into(),
        }
    }

    /// Create a negative detection result.
    pub fn not_found() -> Self {
        Self {
            found: false,
            version: String::new(),
            source: String::new(),
        }
    }
}

/// Outcome of one npm profile detection attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDetectionResult {
    /// Whether a profile was found.
    pub found: bool,

    /// The requested profile name.
    pub profile_name: String,

    /// Where the profile came from.
    pub source: String,
}

impl ProfileDetectionResult {
    /// Create a positive detection result.
    pub fn found(profile_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            found: true,
            profile_name: profile_name.into(),
            source: source.into(),
        }
    }

    /// Create a negative detection result.
    pub fn not_found() -> Self {
        Self {
            found: false,
            profile_name: String::new(),
            source: String::new(),
        }
    }
}
