//! AutoNode CLI entry point.

use std::process::ExitCode;

use autonode::cache::CacheStore;
use autonode::cli::{Cli, CommandDispatcher};
use autonode::config::GlobalConfig;
use autonode::ui::{OutputMode, TerminalUI, UserInterface};
use autonode::updates::{background::DEFAULT_WAIT, show_update_banner, BackgroundCheck, UpdateChecker};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr so `autonode shell` output stays evaluable.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("autonode=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("autonode=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Start the update check unless disabled by flag, env or global config.
fn start_update_check(cli: &Cli) -> BackgroundCheck {
    if !cli.wants_update_check() {
        return BackgroundCheck::disabled();
    }

    let store = CacheStore::default_location();
    let config = GlobalConfig::load(&store);
    if config.disable_update_check {
        tracing::debug!("Update check disabled in global config");
        return BackgroundCheck::disabled();
    }

    BackgroundCheck::spawn(UpdateChecker::new(store, config.update_check_interval()))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("AutoNode starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let project_root = cli
        .project
        .as_ref()
        .cloned()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    let update_check = start_update_check(&cli);
    let mut ui = TerminalUI::new(output_mode);
    let dispatcher = CommandDispatcher::new(project_root);

    let exit_code = match dispatcher.dispatch(&cli, &mut ui) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    };

    if let Some(info) = update_check.result(DEFAULT_WAIT) {
        show_update_banner(&info);
    }

    exit_code
}
