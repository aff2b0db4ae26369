//! `.autonode.yml` detectors.

use std::path::Path;

use crate::config::{ProjectConfig, PROJECT_CONFIG_FILE};
use crate::error::Result;

use super::types::{DetectionResult, ProfileDetectionResult, ProfileDetector, VersionDetector};

/// Reads `nodeVersion` from `.autonode.yml`. Checked before every other source.
pub struct AutonodeYmlVersionDetector;

impl VersionDetector for AutonodeYmlVersionDetector {
    fn detect(&self, project_root: &Path) -> Result<DetectionResult> {
        let Some(config) = ProjectConfig::load(project_root)? else {
            return Ok(DetectionResult::not_found());
        };

        match config.node_version {
            Some(version) if !version.is_empty() => {
                Ok(DetectionResult::found(version, PROJECT_CONFIG_FILE))
            }
            _ => Ok(DetectionResult::not_found()),
        }
    }

    fn priority(&self) -> u32 {
        0
    }

    fn source_name(&self) -> &str {
        PROJECT_CONFIG_FILE
    }
}

/// Reads `npmProfile` from `.autonode.yml`.
pub struct AutonodeYmlProfileDetector;

impl ProfileDetector for AutonodeYmlProfileDetector {
    fn detect(&self, project_root: &Path) -> Result<ProfileDetectionResult> {
        let Some(config) = ProjectConfig::load(project_root)? else {
            return Ok(ProfileDetectionResult::not_found());
        };

        match config.npm_profile {
            Some(profile) if !profile.is_empty() => {
                Ok(ProfileDetectionResult::found(profile, PROJECT_CONFIG_FILE))
            }
            _ => Ok(ProfileDetectionResult::not_found()),
        }
    }

    fn priority(&self) -> u32 {
        1
    }

    fn source_name(&self) -> &str {
        PROJECT_CONFIG_FILE
    }
}
