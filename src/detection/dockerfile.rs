//! `Dockerfile` base image detector.

use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use crate::error::Result;
use crate::releases::CodenameResolver;

use super::types::{DetectionResult, VersionDetector};

const DOCKERFILE: &str = "Dockerfile";

/// Codename backing the `lts` tag.
const LTS_CODENAME: &str = "jod";

/// Major used for `lts` when the codename cannot be resolved.
const LTS_FALLBACK_MAJOR: &str = "22";

/// Major used for `latest` and `current`.
const CURRENT_FALLBACK_MAJOR: &str = "24";

/// `FROM [--flag ...] node:<tag>`, tag captured up to a `-variant` suffix.
static FROM_NODE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^FROM\s+(?:--\S+\s+)*node:([A-Za-z0-9._]+)")
        .expect("FROM_NODE_REGEX must compile")
});

static NUMERIC_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+(?:\.\d+){0,2}$").expect("NUMERIC_TAG_REGEX must compile")
});

/// Reads the Node.js version from the first `FROM node:<tag>` instruction.
///
/// Only the first matching instruction is considered. When its tag cannot be
/// resolved the detector reports not found instead of scanning later stages.
pub struct DockerfileDetector {
    resolver: Box<dyn CodenameResolver>,
}

impl DockerfileDetector {
    pub fn new(resolver: Box<dyn CodenameResolver>) -> Self {
        Self { resolver }
    }

    /// Turn an image tag into a version, if possible.
    fn resolve_tag(&self, tag: &str) -> Option<String> {
        if NUMERIC_TAG_REGEX.is_match(tag) {
            return Some(tag.to_string());
        }

        match tag.to_lowercase().as_str() {
            "lts" => Some(
                self.lookup(LTS_CODENAME)
                    .unwrap_or_else(|| LTS_FALLBACK_MAJOR.to_string()),
            ),
            "latest" | "current" => Some(CURRENT_FALLBACK_MAJOR.to_string()),
            codename => self.lookup(codename),
        }
    }

    fn lookup(&self, codename: &str) -> Option<String> {
        match self.resolver.major_for_codename(codename) {
            Ok(major) => Some(major),
            Err(e) => {
                tracing::debug!(codename, "Could not resolve codename: {:#}", e);
                None
            }
        }
    }
}

/// Find the tag of the first `FROM node:<tag>` line, skipping comments.
fn first_node_tag(content: &str) -> Option<&str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .find_map(|line| {
            FROM_NODE_REGEX
                .captures(line)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str())
        })
}

impl VersionDetector for DockerfileDetector {
    fn detect(&self, project_root: &Path) -> Result<DetectionResult> {
        let path = project_root.join(DOCKERFILE);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(DetectionResult::not_found())
            }
            Err(e) => return Err(e.into()),
        };

        let Some(tag) = first_node_tag(&content) else {
            return Ok(DetectionResult::not_found());
        };

        match self.resolve_tag(tag) {
            Some(version) => Ok(DetectionResult::found(version, DOCKERFILE)),
            None => {
                tracing::debug!(tag, "Unresolvable node image tag in Dockerfile");
                Ok(DetectionResult::not_found())
            }
        }
    }

    fn priority(&self) -> u32 {
        4
    }

    fn source_name(&self) -> &str {
        DOCKERFILE
    }
}
