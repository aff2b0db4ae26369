//! Install method detection.
//!
//! Picks the upgrade instruction shown in the update banner.

use std::env;
use std::path::{Path, PathBuf};

/// Releases page for manual downloads.
pub const RELEASES_PAGE: &str = "https://github.com/matutetandil/autonode/releases/latest";

/// How autonode was installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallMethod {
    /// Installed via cargo install
    Cargo,
    /// Installed via Homebrew
    Homebrew,
    /// Downloaded binary or built from source
    Manual { path: PathBuf },
    /// Could not determine install method
    Unknown,
}

impl InstallMethod {
    /// Instruction telling the user how to upgrade.
    pub fn upgrade_hint(&self) -> String {
        match self {
            InstallMethod::Cargo => "Run: cargo install autonode --force".to_string(),
            InstallMethod::Homebrew => "Run: brew upgrade autonode".to_string(),
            InstallMethod::Manual { .. } | InstallMethod::Unknown => {
                format!("Download: {}", RELEASES_PAGE)
            }
        }
    }

    pub fn name(&self) -> &str {
        match self {
            InstallMethod::Cargo => "cargo",
            InstallMethod::Homebrew => "homebrew",
            InstallMethod::Manual { .. } => "manual",
            InstallMethod::Unknown => "unknown",
        }
    }
}

/// Detect how the running binary was installed.
pub fn detect_install_method() -> InstallMethod {
    let exe_path = match env::current_exe() {
        Ok(path) => path,
        Err(_) => return InstallMethod::Unknown,
    };

    let cargo_home = env::var_os("CARGO_HOME").map(PathBuf::from);
    classify(&exe_path, dirs::home_dir().as_deref(), cargo_home.as_deref())
}

fn classify(exe_path: &Path, home: Option<&Path>, cargo_home: Option<&Path>) -> InstallMethod {
    if is_cargo_install(exe_path, home, cargo_home) {
        return InstallMethod::Cargo;
    }

    if is_homebrew_install(exe_path) {
        return InstallMethod::Homebrew;
    }

    InstallMethod::Manual {
        path: exe_path.to_path_buf(),
    }
}

fn is_cargo_install(exe_path: &Path, home: Option<&Path>, cargo_home: Option<&Path>) -> bool {
    let in_bin = |root: &Path| exe_path.starts_with(root.join("bin"));

    home.is_some_and(|h| in_bin(&h.join(".cargo"))) || cargo_home.is_some_and(in_bin)
}

fn is_homebrew_install(exe_path: &Path) -> bool {
    const HOMEBREW_PREFIXES: [&str; 3] = [
        "/usr/local/Cellar/",          // Intel macOS
        "/opt/homebrew/Cellar/",       // ARM macOS
        "/home/linuxbrew/.linuxbrew/", // Linux
    ];

    let exe_str = exe_path.to_string_lossy();
    HOMEBREW_PREFIXES
        .iter()
        .any(|prefix| exe_str.starts_with(prefix))
}
