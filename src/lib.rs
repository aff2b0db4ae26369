//! AutoNode - Automatically detect and switch Node.js versions.
//!
//! AutoNode reads a project's Node.js requirement from `.autonode.yml`,
//! `.nvmrc`, `.node-version`, `package.json` or a `Dockerfile`, activates it
//! through nvm, nvs or volta, and optionally switches the npm profile with
//! npmrc, ts-npmrc or rc-manager.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - `.autonode.yml` and the global settings file
//! - [`detection`] - Version and profile detectors
//! - [`error`] - Error types and result aliases
//! - [`managers`] - Node.js version managers
//! - [`releases`] - Node.js release index and codename lookup
//! - [`service`] - The detect, install, switch pipeline
//! - [`shell`] - External command execution
//! - [`switchers`] - npm profile switchers
//! - [`ui`] - Terminal output
//! - [`updates`] - Self-update notifications
//!
//! # Example
//!
//! ```
//! use autonode::detection::{VersionDetector, VersionFileDetector};
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! std::fs::write(temp.path().join(".nvmrc"), "v20.11.0\n").unwrap();
//!
//! let result = VersionFileDetector::nvmrc().detect(temp.path()).unwrap();
//! assert!(result.found);
//! assert_eq!(result.version, "v20.11.0");
//! ```

pub mod cache;
pub mod cli;
pub mod config;
pub mod detection;
pub mod error;
pub mod managers;
pub mod releases;
pub mod service;
pub mod shell;
pub mod switchers;
pub mod ui;
pub mod updates;

pub use error::{AutonodeError, Result};
