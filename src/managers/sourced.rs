//! Managers implemented as shell functions (nvm, nvs).
//!
//! Neither tool ships a binary: every command has to run in a shell that
//! first sources the tool's init script from its home directory.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::Result;
use crate::shell::{quote, tool_home, ShellExecutor};

use super::{normalize_version, VersionManager};

/// Static description of a shell-function manager.
#[derive(Debug, Clone, Copy)]
struct ToolSpec {
    name: &'static str,
    home_var: &'static str,
    default_dir: &'static str,
    init_script: &'static str,
    list: &'static str,
    install: &'static str,
    activate: &'static str,
}

const NVM: ToolSpec = ToolSpec {
    name: "nvm",
    home_var: "NVM_DIR",
    default_dir: ".nvm",
    init_script: "nvm.sh",
    list: "list",
    install: "install",
    activate: "use",
};

const NVS: ToolSpec = ToolSpec {
    name: "nvs",
    home_var: "NVS_HOME",
    default_dir: ".nvs",
    init_script: "nvs.sh",
    list: "list",
    install: "add",
    activate: "use",
};

/// Version manager driven through a sourced init script.
pub struct SourcedManager {
    spec: ToolSpec,
    shell: Arc<dyn ShellExecutor>,
    home: Option<PathBuf>,
}

impl SourcedManager {
    /// nvm, located via `NVM_DIR` or `~/.nvm`.
    pub fn nvm(shell: Arc<dyn ShellExecutor>) -> Self {
        let home = tool_home(NVM.home_var, NVM.default_dir, |k| std::env::var(k));
        Self::nvm_with_home(shell, home)
    }

    /// nvm rooted at an explicit home.
    pub fn nvm_with_home(shell: Arc<dyn ShellExecutor>, home: Option<PathBuf>) -> Self {
        Self {
            spec: NVM,
            shell,
            home,
        }
    }

    /// nvs, located via `NVS_HOME` or `~/.nvs`.
    pub fn nvs(shell: Arc<dyn ShellExecutor>) -> Self {
        let home = tool_home(NVS.home_var, NVS.default_dir, |k| std::env::var(k));
        Self::nvs_with_home(shell, home)
    }

    /// nvs rooted at an explicit home.
    pub fn nvs_with_home(shell: Arc<dyn ShellExecutor>, home: Option<PathBuf>) -> Self {
        Self {
            spec: NVS,
            shell,
            home,
        }
    }

    /// The tool's home directory, if one could be determined.
    pub fn home(&self) -> Option<&Path> {
        self.home.as_deref()
    }

    fn init_script_path(&self) -> Option<PathBuf> {
        self.home.as_ref().map(|h| h.join(self.spec.init_script))
    }

    /// Run `<tool> <subcommand> [arg]` after sourcing the init script.
    fn run(&self, subcommand: &str, arg: Option<&str>) -> Result<String> {
        let script = self
            .init_script_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| self.spec.init_script.to_string());

        let mut command = format!(". {} && {} {}", quote(&script), self.spec.name, subcommand);
        if let Some(arg) = arg {
            command.push(' ');
            command.push_str(&quote(arg));
        }

        self.shell.execute_in_shell(&command)
    }
}

impl VersionManager for SourcedManager {
    fn name(&self) -> &str {
        self.spec.name
    }

    fn is_installed(&self) -> bool {
        self.init_script_path().is_some_and(|p| p.is_file())
    }

    fn is_version_installed(&self, version: &str) -> Result<bool> {
        let output = self.run(self.spec.list, None)?;
        Ok(output.contains(normalize_version(version)))
    }

    fn install_version(&self, version: &str) -> Result<()> {
        self.run(self.spec.install, Some(normalize_version(version)))?;
        Ok(())
    }

    fn use_version(&self, version: &str) -> Result<()> {
        self.run(self.spec.activate, Some(normalize_version(version)))?;
        Ok(())
    }

    fn activation_script(&self, version: &str) -> String {
        let var = self.spec.home_var;
        format!(
            "export {var}=\"${{{var}:-$HOME/{dir}}}\"\n\
             [ -s \"${var}/{init}\" ] && \\. \"${var}/{init}\"\n\
             {name} {activate} {version} 2>/dev/null",
            dir = self.spec.default_dir,
            init = self.spec.init_script,
            name = self.spec.name,
            activate = self.spec.activate,
            version = quote(normalize_version(version)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AutonodeError;
    use crate::shell::MockShell;
    use std::fs;
    use tempfile::TempDir;

    fn nvm(shell: MockShell, home: &Path) -> (SourcedManager, Arc<MockShell>) {
        let shell = Arc::new(shell);
        let manager = SourcedManager::nvm_with_home(shell.clone(), Some(home.to_path_buf()));
        (manager, shell)
    }

    #[test]
    fn installed_when_init_script_exists() {
        let temp = TempDir::new().unwrap();
        let (manager, _) = nvm(MockShell::new(), temp.path());
        assert!(!manager.is_installed());

        fs::write(temp.path().join("nvm.sh"), "# nvm").unwrap();
        assert!(manager.is_installed());
    }

    #[test]
    fn not_installed_without_home() {
        let manager = SourcedManager::nvs_with_home(Arc::new(MockShell::new()), None);
        assert!(!manager.is_installed());
    }

    #[test]
    fn commands_source_init_script() {
        let temp = TempDir::new().unwrap();
        let (manager, shell) = nvm(MockShell::new(), temp.path());

        manager.use_version("v20.11.0").unwrap();

        let expected = format!(
            ". {} && nvm use 20.11.0",
            quote(&temp.path().join("nvm.sh").display().to_string())
        );
        assert_eq!(shell.calls(), vec![expected]);
    }

    #[test]
    fn version_installed_by_substring() {
        let temp = TempDir::new().unwrap();
        let (manager, _) = nvm(
            MockShell::new().on("nvm list", "->     v20.11.0\n       v18.17.0\ndefault -> 20"),
            temp.path(),
        );

        assert!(manager.is_version_installed("v18.17.0").unwrap());
        assert!(manager.is_version_installed("20").unwrap());
        assert!(!manager.is_version_installed("16").unwrap());
    }

    #[test]
    fn list_failure_propagates() {
        let temp = TempDir::new().unwrap();
        let (manager, _) = nvm(MockShell::new().fail_on("nvm list", "boom"), temp.path());

        assert!(matches!(
            manager.is_version_installed("20"),
            Err(AutonodeError::CommandFailed { .. })
        ));
    }

    #[test]
    fn nvs_uses_add_for_install() {
        let temp = TempDir::new().unwrap();
        let shell = Arc::new(MockShell::new());
        let manager = SourcedManager::nvs_with_home(shell.clone(), Some(temp.path().into()));

        manager.install_version("18").unwrap();

        assert_eq!(manager.name(), "nvs");
        assert!(shell.calls()[0].ends_with("nvs add 18"));
        assert!(shell.calls()[0].contains("nvs.sh"));
    }

    #[test]
    fn install_failure_propagates() {
        let temp = TempDir::new().unwrap();
        let (manager, _) = nvm(MockShell::new().fail_on("nvm install", "no network"), temp.path());

        assert!(manager.install_version("20").is_err());
    }

    #[test]
    fn nvm_activation_script() {
        let temp = TempDir::new().unwrap();
        let (manager, _) = nvm(MockShell::new(), temp.path());

        assert_eq!(
            manager.activation_script("v20"),
            "export NVM_DIR=\"${NVM_DIR:-$HOME/.nvm}\"\n\
             [ -s \"$NVM_DIR/nvm.sh\" ] && \\. \"$NVM_DIR/nvm.sh\"\n\
             nvm use 20 2>/dev/null"
        );
    }

    #[test]
    fn nvs_activation_script() {
        let manager = SourcedManager::nvs_with_home(Arc::new(MockShell::new()), None);
        let script = manager.activation_script("18.17.0");

        assert!(script.starts_with("export NVS_HOME=\"${NVS_HOME:-$HOME/.nvs}\""));
        assert!(script.ends_with("nvs use 18.17.0 2>/dev/null"));
    }

    #[test]
    fn version_is_passed_as_one_word() {
        let temp = TempDir::new().unwrap();
        let (manager, shell) = nvm(MockShell::new(), temp.path());

        manager.use_version("20; touch pwned").unwrap();
        manager.install_version("v18'; id; '").unwrap();

        let calls = shell.calls();
        assert!(calls[0].ends_with("nvm use '20; touch pwned'"));
        assert!(calls[1].ends_with(r"nvm install '18'\''; id; '\'''"));
    }

    #[test]
    fn activation_script_quotes_version() {
        let manager = SourcedManager::nvs_with_home(Arc::new(MockShell::new()), None);
        let script = manager.activation_script("20; echo INJECTED");

        assert!(script.ends_with("nvs use '20; echo INJECTED' 2>/dev/null"));
    }

    #[cfg(unix)]
    #[test]
    fn hostile_version_is_not_executed() {
        use crate::shell::SystemShell;

        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("nvm.sh"), "nvm() { printf '%s|' \"$@\"; }\n").unwrap();
        let marker = temp.path().join("pwned");
        let manager =
            SourcedManager::nvm_with_home(Arc::new(SystemShell), Some(temp.path().to_path_buf()));

        let plain = format!("20; touch {}", marker.display());
        let quoted = format!("20'; touch {}; '", marker.display());
        manager.use_version(&plain).unwrap();
        manager.install_version(&quoted).unwrap();

        assert!(!marker.exists());
    }

    #[cfg(unix)]
    #[test]
    fn evaluated_activation_script_keeps_version_literal() {
        use crate::shell::{ShellExecutor, SystemShell};

        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("nvm.sh"), "nvm() { printf '%s' \"$2\"; }\n").unwrap();
        let manager = SourcedManager::nvm_with_home(Arc::new(MockShell::new()), None);
        let script = manager.activation_script("20'; echo INJECTED; '");

        let output = SystemShell
            .execute_in_shell(&format!(
                "NVM_DIR={}\n{}",
                quote(&temp.path().display().to_string()),
                script
            ))
            .unwrap();

        assert_eq!(output, "20'; echo INJECTED; '");
    }
}
