//! devcheck CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use devcheck::cli::{Cli, CommandDispatcher};
use devcheck::shell::interrupt;
use devcheck::ui::{OutputMode, TerminalUI, UserInterface};
use devcheck::DevcheckError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr so the report on stdout stays parseable.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("devcheck=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("devcheck=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);
    if cli.runs_checks() {
        interrupt::install_handler();
    }

    tracing::debug!("devcheck starting with args: {:?}", cli);

    let output_mode = OutputMode::from_flags(cli.verbose, cli.quiet);
    let mut ui = TerminalUI::new(output_mode, !cli.no_color);

    let result = dirs::home_dir()
        .ok_or(DevcheckError::NoHomeDir)
        .and_then(|home| CommandDispatcher::new(home, cli.config.clone()).dispatch(&cli, &mut ui));

    match result {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(DevcheckError::Interrupted) => {
            let message = ui.theme().warning.apply_to("Check interrupted by user");
            ui.emit(&format!("\n{}\n", message));
            ExitCode::from(1)
        }
        Err(e) => {
            // Alternate form prints the cause chain of wrapped errors.
            ui.error(&format!("Error: {:#}", e));
            ExitCode::from(1)
        }
    }
}
