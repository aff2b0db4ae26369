//! Configuration files read and written by AutoNode.
//!
//! - [`project`] - the per-project `.autonode.yml`
//! - [`global`] - user-wide settings in `~/.autonode/config.json`
//!
//! # Example
//!
//! ```
//! use autonode::config::ProjectConfig;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let config = ProjectConfig {
//!     node_version: Some("20".to_string()),
//!     npm_profile: None,
//! };
//! config.save(temp.path()).unwrap();
//!
//! let loaded = ProjectConfig::load(temp.path()).unwrap().unwrap();
//! assert_eq!(loaded.node_version.as_deref(), Some("20"));
//! ```

pub mod global;
pub mod project;

pub use global::{GlobalConfig, DEFAULT_UPDATE_CHECK_INTERVAL_DAYS, GLOBAL_CONFIG_FILE};
pub use project::{ProjectConfig, PROJECT_CONFIG_FILE};
