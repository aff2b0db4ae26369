//! PATH and tool home lookup.
//!
//! Executables are resolved by walking PATH entries instead of shelling out
//! to `which`, whose behavior differs between systems.

use std::path::{Path, PathBuf};

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Return the first `dir/tool` across `path_entries` that is an executable file.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    path_entries
        .iter()
        .map(|dir| dir.join(tool))
        .find(|candidate| candidate.is_file() && is_executable(candidate))
}

/// Split the current PATH into entries.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Locate a tool's home directory.
///
/// A non-empty `env_var` wins; otherwise `~/<default_dir>`. The directory is
/// not required to exist. `env_fn` allows tests to avoid mutating the real
/// environment.
pub fn tool_home<F>(env_var: &str, default_dir: &str, env_fn: F) -> Option<PathBuf>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    if let Ok(val) = env_fn(env_var) {
        if !val.is_empty() {
            return Some(PathBuf::from(val));
        }
    }

    dirs::home_dir().map(|home| home.join(default_dir))
}
