//! Integration tests for the autonode binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// An isolated environment: empty home, no version managers, no update check.
struct Sandbox {
    home: TempDir,
    project: TempDir,
    bin: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            home: TempDir::new().unwrap(),
            project: TempDir::new().unwrap(),
            bin: TempDir::new().unwrap(),
        }
    }

    fn write(&self, name: &str, content: &str) {
        fs::write(self.project.path().join(name), content).unwrap();
    }

    fn project(&self) -> &Path {
        self.project.path()
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(cargo_bin("autonode"));
        cmd.env("HOME", self.home.path())
            .env("NVM_DIR", self.home.path().join("no-nvm"))
            .env("NVS_HOME", self.home.path().join("no-nvs"))
            .env(
                "PATH",
                format!("{}:/usr/bin:/bin", self.bin.path().display()),
            )
            .env("AUTONODE_NO_UPDATE_CHECK", "1")
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .arg("--project")
            .arg(self.project.path());
        cmd
    }

    /// Put a fake `volta` on PATH that lists 20.11.0 and records pins.
    #[cfg(unix)]
    fn install_fake_volta(&self) {
        use std::os::unix::fs::PermissionsExt;

        let script = format!(
            "#!/bin/sh\ncase \"$1\" in\n  list) echo \"v20.11.0\" ;;\n  pin) echo \"$2\" >> \"{}\" ;;\nesac\n",
            self.pins_log().display()
        );
        let path = self.bin.path().join("volta");
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    fn pins_log(&self) -> std::path::PathBuf {
        self.home.path().join("pins.log")
    }
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("autonode"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--check"))
        .stdout(predicate::str::contains("shell"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("autonode"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn check_reports_detected_version() {
    let sandbox = Sandbox::new();
    sandbox.write(".nvmrc", "20.11.0\n");

    sandbox
        .command()
        .arg("--check")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Detected Node.js version 20.11.0 from .nvmrc",
        ));
}

#[test]
fn check_prefers_autonode_yml() {
    let sandbox = Sandbox::new();
    sandbox.write(".nvmrc", "18\n");
    sandbox.write(".autonode.yml", "nodeVersion: 22\nnpmProfile: work\n");

    sandbox
        .command()
        .arg("-c")
        .assert()
        .success()
        .stdout(predicate::str::contains("Detected Node.js version 22 from .autonode.yml"))
        .stdout(predicate::str::contains("Detected npm profile work"));
}

#[test]
fn missing_version_fails() {
    let sandbox = Sandbox::new();

    sandbox
        .command()
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "No Node.js version specification found",
        ));
}

#[test]
fn missing_manager_fails() {
    let sandbox = Sandbox::new();
    sandbox.write(".node-version", "20\n");

    sandbox
        .command()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("nvm, nvs, or volta"));
}

#[cfg(unix)]
#[test]
fn switches_with_volta() {
    let sandbox = Sandbox::new();
    sandbox.install_fake_volta();
    sandbox.write(".nvmrc", "v20.11.0\n");

    sandbox
        .command()
        .assert()
        .success()
        .stdout(predicate::str::contains("Using version manager: volta"))
        .stdout(predicate::str::contains("Node.js v20.11.0 is already installed"))
        .stdout(predicate::str::contains("Successfully switched to Node.js v20.11.0"));

    let pins = fs::read_to_string(sandbox.pins_log()).unwrap();
    assert_eq!(pins.trim(), "node@20.11.0");
}

#[cfg(unix)]
#[test]
fn quiet_hides_progress() {
    let sandbox = Sandbox::new();
    sandbox.install_fake_volta();
    sandbox.write(".nvmrc", "20.11.0\n");

    sandbox
        .command()
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[cfg(unix)]
#[test]
fn shell_prints_activation_script() {
    let sandbox = Sandbox::new();
    sandbox.install_fake_volta();
    sandbox.write(".nvmrc", "20.11.0\n");

    sandbox
        .command()
        .arg("shell")
        .assert()
        .success()
        .stdout("volta pin node@20.11.0 2>/dev/null\n");
}

#[test]
fn shell_is_silent_without_version() {
    let sandbox = Sandbox::new();

    sandbox
        .command()
        .arg("shell")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn shell_is_silent_without_manager() {
    let sandbox = Sandbox::new();
    sandbox.write(".nvmrc", "20\n");

    sandbox
        .command()
        .arg("shell")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn config_writes_and_shows() {
    let sandbox = Sandbox::new();

    sandbox
        .command()
        .args(["config", "--node", "20", "--profile", "work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set nodeVersion to '20'"));

    let content = fs::read_to_string(sandbox.project().join(".autonode.yml")).unwrap();
    assert!(content.contains("nodeVersion"));
    assert!(content.contains("npmProfile: work"));

    sandbox
        .command()
        .args(["config", "--show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nodeVersion: 20"))
        .stdout(predicate::str::contains("npmProfile: work"));
}

#[test]
fn config_clearing_last_field_removes_file() {
    let sandbox = Sandbox::new();
    sandbox.write(".autonode.yml", "nodeVersion: '18'\n");

    sandbox
        .command()
        .args(["config", "--node", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("no configuration left"));

    assert!(!sandbox.project().join(".autonode.yml").exists());
}

#[test]
fn config_without_flags_prints_help() {
    let sandbox = Sandbox::new();

    sandbox
        .command()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("--node"))
        .stdout(predicate::str::contains("Examples:"));
}

#[test]
fn completions_for_bash() {
    let mut cmd = Command::new(cargo_bin("autonode"));
    cmd.args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("autonode"));
}
