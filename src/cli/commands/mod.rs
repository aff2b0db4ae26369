//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations and wires the production
//! detectors, managers and switchers into the service.

pub mod completions;
pub mod config;
pub mod dispatcher;
pub mod run;
pub mod shell;

pub use dispatcher::{default_service, Command, CommandDispatcher, CommandResult};
