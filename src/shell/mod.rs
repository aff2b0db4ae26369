//! External command execution.
//!
//! Version managers and profile switchers never spawn processes directly;
//! they go through a [`ShellExecutor`] so tests can substitute [`MockShell`].

pub mod executor;
pub mod mock;
pub mod path;
pub mod quote;

pub use executor::{ShellExecutor, SystemShell};
pub use mock::MockShell;
pub use path::{is_executable, parse_system_path, resolve_tool_path, tool_home};
pub use quote::quote;
