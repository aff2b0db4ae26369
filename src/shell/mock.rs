//! Mock shell implementation for testing.
//!
//! `MockShell` implements [`ShellExecutor`] without spawning processes. It
//! records every invocation and answers from canned responses.
//!
//! # Example
//!
//! ```
//! use autonode::shell::{MockShell, ShellExecutor};
//!
//! let shell = MockShell::new()
//!     .with_command("volta")
//!     .on("volta list node", "v20.11.0");
//!
//! assert!(shell.command_exists("volta"));
//! assert_eq!(shell.execute("volta", &["list", "node"]).unwrap(), "v20.11.0");
//! assert_eq!(shell.calls(), vec!["volta list node".to_string()]);
//! ```

use std::collections::HashSet;
use std::sync::Mutex;

use crate::error::{AutonodeError, Result};

use super::ShellExecutor;

#[derive(Debug, Clone)]
enum Response {
    Output(String),
    Failure(String),
}

/// Mock [`ShellExecutor`] for testing.
///
/// Responses are matched by substring against the rendered command line
/// (`program arg1 arg2` or the raw shell script). The first registered
/// pattern that matches wins; unmatched commands succeed with empty output.
#[derive(Debug, Default)]
pub struct MockShell {
    commands: HashSet<String>,
    responses: Vec<(String, Response)>,
    calls: Mutex<Vec<String>>,
}

impl MockShell {
    /// Create a mock with no commands on PATH.
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `program` as present on PATH.
    pub fn with_command(mut self, program: &str) -> Self {
        self.commands.insert(program.to_string());
        self
    }

    /// Answer commands containing `pattern` with `stdout`.
    pub fn on(mut self, pattern: &str, stdout: &str) -> Self {
        self.responses
            .push((pattern.to_string(), Response::Output(stdout.to_string())));
        self
    }

    /// Fail commands containing `pattern` with exit code 1 and `stderr`.
    pub fn fail_on(mut self, pattern: &str, stderr: &str) -> Self {
        self.responses
            .push((pattern.to_string(), Response::Failure(stderr.to_string())));
        self
    }

    /// All command lines executed so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Number of executed command lines containing `pattern`.
    pub fn count_calls(&self, pattern: &str) -> usize {
        self.calls().iter().filter(|c| c.contains(pattern)).count()
    }

    fn respond(&self, command_line: String) -> Result<String> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(command_line.clone());
        }

        let response = self
            .responses
            .iter()
            .find(|(pattern, _)| command_line.contains(pattern.as_str()))
            .map(|(_, response)| response.clone());

        match response {
            Some(Response::Output(stdout)) => Ok(stdout),
            Some(Response::Failure(stderr)) => Err(AutonodeError::CommandFailed {
                command: command_line,
                code: Some(1),
                stderr,
            }),
            None => Ok(String::new()),
        }
    }
}

impl ShellExecutor for MockShell {
    fn execute(&self, program: &str, args: &[&str]) -> Result<String> {
        let command_line = std::iter::once(program)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ");
        self.respond(command_line)
    }

    fn execute_in_shell(&self, script: &str) -> Result<String> {
        self.respond(script.to_string())
    }

    fn command_exists(&self, program: &str) -> bool {
        self.commands.contains(program)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmatched_command_succeeds_empty() {
        let shell = MockShell::new();
        assert_eq!(shell.execute("npmrc", &[]).unwrap(), "");
        assert_eq!(shell.calls(), vec!["npmrc".to_string()]);
    }

    #[test]
    fn first_matching_pattern_wins() {
        let shell = MockShell::new()
            .on("nvm list", "v20.1.0")
            .on("nvm", "other");

        assert_eq!(shell.execute_in_shell(". nvm.sh && nvm list").unwrap(), "v20.1.0");
        assert_eq!(shell.execute_in_shell(". nvm.sh && nvm use 20").unwrap(), "other");
    }

    #[test]
    fn failure_carries_stderr() {
        let shell = MockShell::new().fail_on("install", "network down");
        let err = shell.execute("volta", &["install", "node@20"]).unwrap_err();

        match err {
            AutonodeError::CommandFailed { stderr, code, .. } => {
                assert_eq!(stderr, "network down");
                assert_eq!(code, Some(1));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn counts_calls() {
        let shell = MockShell::new();
        shell.execute("volta", &["pin", "node@20"]).unwrap();
        shell.execute("volta", &["pin", "node@20"]).unwrap();
        shell.execute("volta", &["list", "node"]).unwrap();

        assert_eq!(shell.count_calls("pin"), 2);
        assert_eq!(shell.count_calls("volta"), 3);
    }

    #[test]
    fn command_exists_only_for_registered() {
        let shell = MockShell::new().with_command("volta");
        assert!(shell.command_exists("volta"));
        assert!(!shell.command_exists("nvm"));
    }
}
