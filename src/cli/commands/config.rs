//! Config command implementation.
//!
//! The `autonode config` command edits the project's `.autonode.yml`.

use std::path::{Path, PathBuf};

use clap::CommandFactory;

use crate::cli::args::{Cli, ConfigArgs};
use crate::config::{ProjectConfig, PROJECT_CONFIG_FILE};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand {
    project_root: PathBuf,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(project_root: &Path, args: ConfigArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    fn show(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = ProjectConfig::load(&self.project_root)?.unwrap_or_default();

        if config.is_empty() {
            ui.message("No local configuration found.");
            ui.message("Use --node <version> or --profile <name> to configure.");
            return Ok(CommandResult::success());
        }

        ui.message(&format!("Current configuration ({}):", PROJECT_CONFIG_FILE));
        if let Some(version) = &config.node_version {
            ui.message(&format!("  nodeVersion: {}", version));
        }
        if let Some(profile) = &config.npm_profile {
            ui.message(&format!("  npmProfile: {}", profile));
        }

        Ok(CommandResult::success())
    }

    fn remove(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if ProjectConfig::remove(&self.project_root)? {
            ui.success(&format!("Removed {} configuration", PROJECT_CONFIG_FILE));
        } else {
            ui.warning(&format!("No {} file found", PROJECT_CONFIG_FILE));
        }

        Ok(CommandResult::success())
    }

    fn update(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut config = ProjectConfig::load(&self.project_root)?.unwrap_or_default();

        if let Some(version) = &self.args.node {
            apply_field(&mut config.node_version, version, "nodeVersion", ui);
        }
        if let Some(profile) = &self.args.profile {
            apply_field(&mut config.npm_profile, profile, "npmProfile", ui);
        }

        if config.is_empty() {
            if ProjectConfig::remove(&self.project_root)? {
                ui.success(&format!(
                    "Removed {} (no configuration left)",
                    PROJECT_CONFIG_FILE
                ));
            }
            return Ok(CommandResult::success());
        }

        let path = config.save(&self.project_root)?;
        ui.message(&format!("Configuration saved to {}", path.display()));

        Ok(CommandResult::success())
    }
}

/// Set `field` to `value`, or clear it when `value` is blank.
fn apply_field(
    field: &mut Option<String>,
    value: &str,
    key: &str,
    ui: &mut dyn UserInterface,
) {
    let value = value.trim();
    if value.is_empty() {
        *field = None;
        ui.success(&format!("Removed {} from configuration", key));
    } else {
        *field = Some(value.to_string());
        ui.success(&format!("Set {} to '{}'", key, value));
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.show {
            return self.show(ui);
        }
        if self.args.remove {
            return self.remove(ui);
        }
        if self.args.is_empty() {
            let mut cmd = Cli::command();
            if let Some(config) = cmd.find_subcommand_mut("config") {
                config.print_help()?;
            }
            return Ok(CommandResult::success());
        }

        self.update(ui)
    }
}
