//! `package.json` detectors.
//!
//! The version comes from `engines.node`, the profile from
//! `autonode.npmProfile`.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{AutonodeError, Result};

use super::types::{DetectionResult, ProfileDetectionResult, ProfileDetector, VersionDetector};

const PACKAGE_JSON: &str = "package.json";

/// Range operators stripped from `engines.node`, checked in this order.
const RANGE_OPERATORS: &[&str] = &[">=", "<=", ">", "<", "^", "~", "="];

/// The parts of `package.json` AutoNode reads.
#[derive(Debug, Default, Deserialize)]
struct PackageManifest {
    #[serde(default)]
    engines: Option<Engines>,
    #[serde(default)]
    autonode: Option<AutonodeSection>,
}

#[derive(Debug, Default, Deserialize)]
struct Engines {
    #[serde(default)]
    node: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AutonodeSection {
    #[serde(default)]
    npm_profile: Option<String>,
}

/// Read and parse `package.json`. `Ok(None)` when the file is absent.
fn load_manifest(project_root: &Path) -> Result<Option<PackageManifest>> {
    let path = project_root.join(PACKAGE_JSON);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    serde_json::from_str(&content)
        .map(Some)
        .map_err(|e| AutonodeError::ConfigParseError {
            path,
            message: e.to_string(),
        })
}

/// Reduce an npm semver range to a single installable version.
///
/// - one leading operator is stripped (`>=16.0.0` becomes `16.0.0`)
/// - a hyphen range keeps its lower bound (`16 - 18` becomes `16`)
/// - alternatives keep the first one, itself normalized (`^16 || ^18` becomes `16`)
///
/// # Example
///
/// ```
/// use autonode::detection::normalize_version_spec;
///
/// assert_eq!(normalize_version_spec(">=16.0.0"), "16.0.0");
/// assert_eq!(normalize_version_spec("16.0.0 || 18.0.0"), "16.0.0");
/// ```
pub fn normalize_version_spec(spec: &str) -> String {
    let mut version = spec.trim();

    if let Some(stripped) = RANGE_OPERATORS
        .iter()
        .find_map(|op| version.strip_prefix(*op))
    {
        version = stripped.trim();
    }

    if let Some((lower, _)) = version.split_once(" - ") {
        version = lower.trim();
    }

    if let Some((first, _)) = version.split_once("||") {
        return normalize_version_spec(first);
    }

    version.to_string()
}

/// Reads `engines.node` from `package.json`.
pub struct PackageJsonDetector;

impl VersionDetector for PackageJsonDetector {
    fn detect(&self, project_root: &Path) -> Result<DetectionResult> {
        let Some(manifest) = load_manifest(project_root)? else {
            return Ok(DetectionResult::not_found());
        };

        let spec = manifest
            .engines
            .and_then(|e| e.node)
            .unwrap_or_default();
        if spec.trim().is_empty() {
            return Ok(DetectionResult::not_found());
        }

        Ok(DetectionResult::found(
            normalize_version_spec(&spec),
            "package.json (engines.node)",
        ))
    }

    fn priority(&self) -> u32 {
        3
    }

    fn source_name(&self) -> &str {
        PACKAGE_JSON
    }
}

/// Reads `autonode.npmProfile` from `package.json`.
pub struct PackageJsonProfileDetector;

impl ProfileDetector for PackageJsonProfileDetector {
    fn detect(&self, project_root: &Path) -> Result<ProfileDetectionResult> {
        let Some(manifest) = load_manifest(project_root)? else {
            return Ok(ProfileDetectionResult::not_found());
        };

        match manifest.autonode.and_then(|a| a.npm_profile) {
            Some(profile) if !profile.is_empty() => {
                Ok(ProfileDetectionResult::found(profile, PACKAGE_JSON))
            }
            _ => Ok(ProfileDetectionResult::not_found()),
        }
    }

    fn priority(&self) -> u32 {
        2
    }

    fn source_name(&self) -> &str {
        PACKAGE_JSON
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn project_with(content: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(PACKAGE_JSON), content).unwrap();
        temp
    }

    #[test]
    fn normalize_strips_single_operator() {
        assert_eq!(normalize_version_spec(">=16.0.0"), "16.0.0");
        assert_eq!(normalize_version_spec("<=20"), "20");
        assert_eq!(normalize_version_spec(">18"), "18");
        assert_eq!(normalize_version_spec("<21"), "21");
        assert_eq!(normalize_version_spec("^18.17.0"), "18.17.0");
        assert_eq!(normalize_version_spec("~16.20"), "16.20");
        assert_eq!(normalize_version_spec("=20.1.0"), "20.1.0");
    }

    #[test]
    fn normalize_prefers_two_char_operators() {
        assert_eq!(normalize_version_spec(">= 16"), "16");
        assert_eq!(normalize_version_spec("<=  20.0.0"), "20.0.0");
    }

    #[test]
    fn normalize_strips_only_first_operator() {
        assert_eq!(normalize_version_spec("^=18"), "=18");
    }

    #[test]
    fn normalize_hyphen_range_takes_lower_bound() {
        assert_eq!(normalize_version_spec("16.0.0 - 18.0.0"), "16.0.0");
    }

    #[test]
    fn normalize_alternatives_take_first() {
        assert_eq!(normalize_version_spec("16.0.0 || 18.0.0"), "16.0.0");
        assert_eq!(normalize_version_spec("^16 || ^18"), "16");
        assert_eq!(normalize_version_spec("  >=14 || >=16  "), "14");
    }

    #[test]
    fn normalize_plain_version_unchanged() {
        assert_eq!(normalize_version_spec("20"), "20");
        assert_eq!(normalize_version_spec("v18.17.0"), "v18.17.0");
    }

    #[test]
    fn detects_engines_node() {
        let temp = project_with(r#"{"name": "app", "engines": {"node": ">=16.0.0"}}"#);
        let result = PackageJsonDetector.detect(temp.path()).unwrap();

        assert_eq!(
            result,
            DetectionResult::found("16.0.0", "package.json (engines.node)")
        );
    }

    #[test]
    fn missing_engines_is_not_found() {
        let temp = project_with(r#"{"name": "app"}"#);
        assert!(!PackageJsonDetector.detect(temp.path()).unwrap().found);
    }

    #[test]
    fn engines_without_node_is_not_found() {
        let temp = project_with(r#"{"engines": {"npm": ">=9"}}"#);
        assert!(!PackageJsonDetector.detect(temp.path()).unwrap().found);
    }

    #[test]
    fn empty_engines_node_is_not_found() {
        let temp = project_with(r#"{"engines": {"node": "  "}}"#);
        assert!(!PackageJsonDetector.detect(temp.path()).unwrap().found);
    }

    #[test]
    fn missing_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        assert!(!PackageJsonDetector.detect(temp.path()).unwrap().found);
        assert!(!PackageJsonProfileDetector.detect(temp.path()).unwrap().found);
    }

    #[test]
    fn invalid_json_errors() {
        let temp = project_with("{ invalid");
        assert!(matches!(
            PackageJsonDetector.detect(temp.path()),
            Err(AutonodeError::ConfigParseError { .. })
        ));
        assert!(PackageJsonProfileDetector.detect(temp.path()).is_err());
    }

    #[test]
    fn detects_profile() {
        let temp = project_with(r#"{"name": "app", "autonode": {"npmProfile": "work"}}"#);
        let result = PackageJsonProfileDetector.detect(temp.path()).unwrap();

        assert_eq!(result, ProfileDetectionResult::found("work", "package.json"));
    }

    #[test]
    fn profile_absent_or_empty_is_not_found() {
        let temp = project_with(r#"{"autonode": {}}"#);
        assert!(!PackageJsonProfileDetector.detect(temp.path()).unwrap().found);

        let temp = project_with(r#"{"autonode": {"npmProfile": ""}}"#);
        assert!(!PackageJsonProfileDetector.detect(temp.path()).unwrap().found);

        let temp = project_with(r#"{"name": "app"}"#);
        assert!(!PackageJsonProfileDetector.detect(temp.path()).unwrap().found);
    }

    #[test]
    fn identity() {
        assert_eq!(PackageJsonDetector.priority(), 3);
        assert_eq!(PackageJsonDetector.source_name(), "package.json");
        assert_eq!(PackageJsonProfileDetector.priority(), 2);
    }
}
