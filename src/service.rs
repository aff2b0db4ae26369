//! The AutoNode pipeline.
//!
//! [`AutonodeService`] detects the requested Node.js version, activates it
//! through the first installed version manager, then optionally switches the
//! npm profile. Version problems are fatal; profile problems only warn.

use std::path::{Path, PathBuf};

use crate::detection::{
    DetectionResult, ProfileDetectionResult, ProfileDetector, VersionDetector,
};
use crate::error::{AutonodeError, Result};
use crate::managers::VersionManager;
use crate::switchers::ProfileSwitcher;
use crate::ui::UserInterface;

/// Options for a single run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Project root to scan.
    pub project_path: PathBuf,
    /// Only report what would be used.
    pub check_only: bool,
    /// Reinstall even when the version is already present.
    pub force: bool,
}

impl RunOptions {
    pub fn new(project_path: impl Into<PathBuf>) -> Self {
        Self {
            project_path: project_path.into(),
            check_only: false,
            force: false,
        }
    }
}

/// What happened to the npm profile after the version switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileOutcome {
    /// The project does not ask for a profile.
    NotRequested,
    /// A profile was requested but no switcher is installed.
    NoSwitcher { profile: String },
    /// The switcher could not confirm the profile exists.
    Missing { profile: String, switcher: String },
    /// The switcher failed.
    Failed { profile: String, switcher: String },
    /// The profile is now active.
    Switched { profile: String, switcher: String },
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Check mode: detection only.
    Checked {
        version: DetectionResult,
        profile: Option<ProfileDetectionResult>,
    },
    /// The version was activated.
    Switched {
        version: DetectionResult,
        manager: String,
        installed: bool,
        profile: ProfileOutcome,
    },
}

/// Orchestrates detectors, managers and switchers.
///
/// Detectors are sorted by priority on construction. Managers and switchers
/// keep their given order, which is their precedence.
pub struct AutonodeService {
    version_detectors: Vec<Box<dyn VersionDetector>>,
    profile_detectors: Vec<Box<dyn ProfileDetector>>,
    managers: Vec<Box<dyn VersionManager>>,
    switchers: Vec<Box<dyn ProfileSwitcher>>,
}

impl AutonodeService {
    pub fn new(
        mut version_detectors: Vec<Box<dyn VersionDetector>>,
        mut profile_detectors: Vec<Box<dyn ProfileDetector>>,
        managers: Vec<Box<dyn VersionManager>>,
        switchers: Vec<Box<dyn ProfileSwitcher>>,
    ) -> Self {
        version_detectors.sort_by_key(|d| d.priority());
        profile_detectors.sort_by_key(|d| d.priority());

        Self {
            version_detectors,
            profile_detectors,
            managers,
            switchers,
        }
    }

    /// Run the full pipeline.
    pub fn run(&self, options: &RunOptions, ui: &mut dyn UserInterface) -> Result<RunOutcome> {
        let project = options.project_path.as_path();
        ui.message(&format!("Scanning project at: {}", project.display()));

        let version = self
            .detect_version_with(project, |source, err| {
                ui.warning(&format!("Detector {} failed: {}", source, err));
            })
            .ok_or_else(|| AutonodeError::NoVersionFound {
                path: project.to_path_buf(),
            })?;

        ui.success(&format!(
            "Detected Node.js version {} from {}",
            version.version, version.source
        ));

        if options.check_only {
            let profile = self.detect_profile(project);
            if let Some(profile) = &profile {
                ui.success(&format!(
                    "Detected npm profile {} from {}",
                    profile.profile_name, profile.source
                ));
            }
            return Ok(RunOutcome::Checked { version, profile });
        }

        let manager = self.find_manager()?;
        ui.message(&format!("Using version manager: {}", manager.name()));

        let installed = self.ensure_installed(manager, &version.version, options.force, ui)?;

        ui.message(&format!("Switching to Node.js {}...", version.version));
        manager.use_version(&version.version).inspect_err(|e| {
            ui.error(&format!("Failed to switch version: {}", e));
        })?;
        ui.success(&format!(
            "Successfully switched to Node.js {}",
            version.version
        ));

        let profile = self.switch_profile(project, ui);

        Ok(RunOutcome::Switched {
            version,
            manager: manager.name().to_string(),
            installed,
            profile,
        })
    }

    /// Shell lines activating the project's version, or `None` when either
    /// detection or manager lookup fails.
    pub fn shell_script(&self, project: &Path) -> Option<String> {
        let version = self.detect_version(project)?;
        let manager = self.managers.iter().find(|m| m.is_installed())?;

        tracing::debug!(
            version = %version.version,
            manager = manager.name(),
            "Emitting activation script"
        );
        Some(manager.activation_script(&version.version))
    }

    /// Run the version detectors, logging failures.
    pub fn detect_version(&self, project: &Path) -> Option<DetectionResult> {
        self.detect_version_with(project, |_, _| {})
    }

    fn detect_version_with<F>(&self, project: &Path, mut on_error: F) -> Option<DetectionResult>
    where
        F: FnMut(&str, &AutonodeError),
    {
        for detector in &self.version_detectors {
            match detector.detect(project) {
                Ok(result) if result.found => {
                    tracing::debug!(source = detector.source_name(), version = %result.version, "Version detected");
                    return Some(result);
                }
                Ok(_) => {
                    tracing::debug!(source = detector.source_name(), "No version");
                }
                Err(e) => {
                    tracing::debug!(source = detector.source_name(), "Detector failed: {}", e);
                    on_error(detector.source_name(), &e);
                }
            }
        }

        None
    }

    /// Run the profile detectors. Failures are skipped silently.
    pub fn detect_profile(&self, project: &Path) -> Option<ProfileDetectionResult> {
        for detector in &self.profile_detectors {
            match detector.detect(project) {
                Ok(result) if result.found => return Some(result),
                Ok(_) => {}
                Err(e) => {
                    tracing::debug!(source = detector.source_name(), "Profile detector failed: {}", e);
                }
            }
        }

        None
    }

    fn find_manager(&self) -> Result<&dyn VersionManager> {
        self.managers
            .iter()
            .find(|m| m.is_installed())
            .map(|m| m.as_ref())
            .ok_or_else(|| AutonodeError::NoManagerAvailable {
                candidates: candidate_list(self.managers.iter().map(|m| m.name())),
            })
    }

    /// Install `version` when missing or forced. Returns whether an install ran.
    fn ensure_installed(
        &self,
        manager: &dyn VersionManager,
        version: &str,
        force: bool,
        ui: &mut dyn UserInterface,
    ) -> Result<bool> {
        let present = match manager.is_version_installed(version) {
            Ok(present) => present,
            Err(e) => {
                tracing::warn!("Version query failed: {}", e);
                ui.warning(&format!("Could not check if version is installed: {}", e));
                false
            }
        };

        if present && !force {
            ui.message(&format!("Node.js {} is already installed", version));
            return Ok(false);
        }

        if force {
            ui.message(&format!("Force installing Node.js {}...", version));
        } else {
            ui.message(&format!("Installing Node.js {}...", version));
        }

        manager.install_version(version).inspect_err(|e| {
            ui.error(&format!("Failed to install version: {}", e));
        })?;
        ui.success(&format!("Node.js {} installed successfully", version));

        Ok(true)
    }

    /// Switch the npm profile. Never fails the run.
    fn switch_profile(&self, project: &Path, ui: &mut dyn UserInterface) -> ProfileOutcome {
        let Some(detected) = self.detect_profile(project) else {
            return ProfileOutcome::NotRequested;
        };
        let profile = detected.profile_name;

        ui.success(&format!(
            "Detected npm profile {} from {}",
            profile, detected.source
        ));

        let Some(switcher) = self.switchers.iter().find(|s| s.is_installed()) else {
            tracing::debug!(
                "{}",
                AutonodeError::NoSwitcherAvailable {
                    candidates: candidate_list(self.switchers.iter().map(|s| s.name())),
                }
            );
            return ProfileOutcome::NoSwitcher { profile };
        };
        let switcher_name = switcher.name().to_string();
        ui.message(&format!("Using profile switcher: {}", switcher_name));

        match switcher.profile_exists(&profile) {
            Ok(true) => {}
            Ok(false) => {
                ui.warning(&format!(
                    "npm profile '{}' not found in {}",
                    profile, switcher_name
                ));
                return ProfileOutcome::Missing {
                    profile,
                    switcher: switcher_name,
                };
            }
            Err(e) => {
                tracing::warn!("Profile query failed: {}", e);
                ui.warning(&format!("Could not check if npm profile exists: {}", e));
                return ProfileOutcome::Missing {
                    profile,
                    switcher: switcher_name,
                };
            }
        }

        ui.message(&format!("Switching to npm profile {}...", profile));
        match switcher.switch_profile(&profile) {
            Ok(()) => {
                ui.success(&format!("Successfully switched to npm profile {}", profile));
                ProfileOutcome::Switched {
                    profile,
                    switcher: switcher_name,
                }
            }
            Err(e) => {
                tracing::warn!("Profile switch failed: {}", e);
                ui.warning(&format!("Failed to switch npm profile: {}", e));
                ProfileOutcome::Failed {
                    profile,
                    switcher: switcher_name,
                }
            }
        }
    }
}

/// Render tool names as `a, b, or c`.
fn candidate_list<'a>(names: impl Iterator<Item = &'a str>) -> String {
    let names: Vec<&str> = names.collect();
    match names.as_slice() {
        [] => "none configured".to_string(),
        [one] => one.to_string(),
        [init @ .., last] => format!("{}, or {}", init.join(", "), last),
    }
}
