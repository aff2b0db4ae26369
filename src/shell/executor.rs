//! Process execution.

use std::process::{Command, Output};

use crate::error::{AutonodeError, Result};

use super::path::{parse_system_path, resolve_tool_path};

/// Runs external programs on behalf of managers and switchers.
pub trait ShellExecutor: Send + Sync {
    /// Run `program` with `args` directly, returning trimmed stdout.
    ///
    /// A non-zero exit is [`AutonodeError::CommandFailed`] carrying stderr.
    fn execute(&self, program: &str, args: &[&str]) -> Result<String>;

    /// Run `script` through the platform shell, returning trimmed stdout.
    ///
    /// Needed for tools that are shell functions rather than binaries (nvm, nvs).
    fn execute_in_shell(&self, script: &str) -> Result<String>;

    /// Whether `program` resolves to an executable on PATH.
    fn command_exists(&self, program: &str) -> bool;
}

/// [`ShellExecutor`] backed by real processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemShell;

impl SystemShell {
    pub fn new() -> Self {
        Self
    }
}

/// Turn process output into trimmed stdout or a `CommandFailed` error.
fn collect(command: String, output: Output) -> Result<String> {
    if output.status.success() {
        return Ok(String::from_utf8_lossy(&output.stdout).trim().to_string());
    }

    Err(AutonodeError::CommandFailed {
        command,
        code: output.status.code(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    })
}

fn spawn_error(command: String, err: std::io::Error) -> AutonodeError {
    AutonodeError::CommandFailed {
        command,
        code: None,
        stderr: err.to_string(),
    }
}

impl ShellExecutor for SystemShell {
    fn execute(&self, program: &str, args: &[&str]) -> Result<String> {
        let command = std::iter::once(program)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ");
        tracing::debug!(%command, "Executing");

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| spawn_error(command.clone(), e))?;

        collect(command, output)
    }

    fn execute_in_shell(&self, script: &str) -> Result<String> {
        tracing::debug!(script, "Executing in shell");

        let mut cmd = if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C");
            cmd
        } else {
            let mut cmd = Command::new("sh");
            cmd.arg("-c");
            cmd
        };

        let output = cmd
            .arg(script)
            .output()
            .map_err(|e| spawn_error(script.to_string(), e))?;

        collect(script.to_string(), output)
    }

    fn command_exists(&self, program: &str) -> bool {
        let path = parse_system_path();

        if cfg!(target_os = "windows") {
            ["", ".exe", ".cmd", ".bat"]
                .iter()
                .any(|ext| resolve_tool_path(&format!("{program}{ext}"), &path).is_some())
        } else {
            resolve_tool_path(program, &path).is_some()
        }
    }
}
