//! Self-update notifications.
//!
//! This module provides:
//! - Install method detection (cargo, homebrew, manual)
//! - A cached check against the latest GitHub release
//! - A background runner with a bounded wait
//! - The boxed banner shown after a run

pub mod background;
pub mod install;
pub mod notifier;
pub mod version;

pub use background::BackgroundCheck;
pub use install::{detect_install_method, InstallMethod};
pub use notifier::{render_banner, show_update_banner};
pub use version::{is_newer_version, UpdateChecker, UpdateInfo, VERSION};
