//! Single-line version pin files (`.nvmrc`, `.node-version`).

use std::fs;
use std::path::Path;

use crate::error::Result;

use super::types::{DetectionResult, VersionDetector};

/// Reads a version pin file whose whole trimmed content is the version.
///
/// Content is accepted verbatim, so aliases such as `lts/*` or `node`
/// are passed through to the version manager untouched.
pub struct VersionFileDetector {
    file_name: &'static str,
    priority: u32,
}

impl VersionFileDetector {
    /// Detector for nvm's `.nvmrc`.
    pub fn nvmrc() -> Self {
        Self {
            file_name: ".nvmrc",
            priority: 1,
        }
    }

    /// Detector for the cross-tool `.node-version`.
    pub fn node_version() -> Self {
        Self {
            file_name: ".node-version",
            priority: 2,
        }
    }
}

impl VersionDetector for VersionFileDetector {
    fn detect(&self, project_root: &Path) -> Result<DetectionResult> {
        let path = project_root.join(self.file_name);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(DetectionResult::not_found())
            }
            Err(e) => return Err(e.into()),
        };

        let version = content.trim();
        if version.is_empty() {
            return Ok(DetectionResult::not_found());
        }

        Ok(DetectionResult::found(version, self.file_name))
    }

    fn priority(&self) -> u32 {
        self.priority
    }

    fn source_name(&self) -> &str {
        self.file_name
    }
}
