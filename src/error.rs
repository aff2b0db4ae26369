//! Error types for AutoNode operations.
//!
//! This module defines [`AutonodeError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Detector failures are reported per detector and never abort the chain
//! - Manager selection and install/activate failures abort the run
//! - Profile failures after a successful version switch are downgraded to warnings
//! - Use `anyhow::Error` (via `AutonodeError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for AutoNode operations.
#[derive(Debug, Error)]
pub enum AutonodeError {
    /// No detector produced a Node.js version for the project.
    #[error("No Node.js version specification found in {}", path.display())]
    NoVersionFound { path: PathBuf },

    /// None of the supported version managers is installed.
    #[error("No version manager found ({candidates})")]
    NoManagerAvailable { candidates: String },

    /// None of the supported npm profile tools is installed.
    #[error("No npm profile switcher found ({candidates})")]
    NoSwitcherAvailable { candidates: String },

    /// Failed to parse a structured project file.
    #[error("Failed to parse {}: {message}", path.display())]
    ConfigParseError { path: PathBuf, message: String },

    /// External tool exited with a non-zero status or could not be launched.
    #[error("Command failed with exit code {code:?}: {command}{}", format_stderr(stderr))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    /// A companion tool could not be located on PATH or under nvm.
    #[error("{tool} not found in PATH or nvm installations")]
    ToolNotFound { tool: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn format_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(", stderr: {}", trimmed)
    }
}

/// Result type alias for AutoNode operations.
pub type Result<T> = std::result::Result<T, AutonodeError>;
