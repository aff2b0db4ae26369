//! Per-project `.autonode.yml` configuration.
//!
//! The file pins a Node.js version and/or an npm profile for one directory.
//! It has the highest detection priority, ahead of `.nvmrc`.

use crate::error::{AutonodeError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the per-project configuration.
pub const PROJECT_CONFIG_FILE: &str = ".autonode.yml";

/// Contents of `.autonode.yml`.
///
/// Unset fields are omitted on save, so a file that only pins a version
/// never gains an empty `npmProfile:` line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    /// Node.js version to use (e.g. "20", "18.17.0", "lts/iron").
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_scalar"
    )]
    pub node_version: Option<String>,

    /// npm profile to switch to.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_scalar"
    )]
    pub npm_profile: Option<String>,
}

/// Accept any YAML scalar as a string so `nodeVersion: 20` works unquoted.
///
/// Floats are rejected: YAML has already turned `20.10` into `20.1` by the
/// time it gets here, so the written version cannot be recovered.
fn deserialize_scalar<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_yaml::Value;

    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) if n.is_f64() => Err(serde::de::Error::custom(format!(
            "version-like number {} is read as a float; quote it, e.g. nodeVersion: \"{}\"",
            n, n
        ))),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(serde::de::Error::custom(format!(
            "expected a scalar value, found {:?}",
            other
        ))),
    }
}

impl ProjectConfig {
    /// Path of the config file inside `project_root`.
    pub fn path(project_root: &Path) -> PathBuf {
        project_root.join(PROJECT_CONFIG_FILE)
    }

    /// Parse config content.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| AutonodeError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load the config from `project_root`.
    ///
    /// Returns `Ok(None)` when the file does not exist.
    pub fn load(project_root: &Path) -> Result<Option<Self>> {
        let path = Self::path(project_root);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        Self::parse(&content, &path).map(Some)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| AutonodeError::Other(e.into()))
    }

    /// Write the config into `project_root`, returning the file path.
    pub fn save(&self, project_root: &Path) -> Result<PathBuf> {
        let path = Self::path(project_root);
        fs::write(&path, self.to_yaml()?)?;
        tracing::debug!(path = %path.display(), "Saved project config");
        Ok(path)
    }

    /// Delete the config file. Returns `false` if there was nothing to remove.
    pub fn remove(project_root: &Path) -> Result<bool> {
        let path = Self::path(project_root);
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Check whether neither field is set.
    pub fn is_empty(&self) -> bool {
        self.node_version.is_none() && self.npm_profile.is_none()
    }
}
