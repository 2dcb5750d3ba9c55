//! Implements the command-line interface for the `scallop` shell.

mod args;
mod error;
mod events;
mod interactive;
mod reader;

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use clap::Parser;
use etcetera::BaseStrategy;

use crate::args::CommandLineArgs;
use crate::error::ShellError;
use scallop_core::history::{DEFAULT_CAPACITY, History};
use scallop_core::{CreateOptions, Shell};

/// Main entry point for the `scallop` shell.
fn main() {
    human_panic::setup_panic!(human_panic::Metadata::new(
        env!("CARGO_BIN_NAME"),
        env!("CARGO_PKG_VERSION")
    ));

    let parsed_args = CommandLineArgs::parse();

    let exit_code = match run(parsed_args) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("error: {:#}", e);
            1
        }
    };

    std::process::exit(i32::from(exit_code));
}

/// Runs the shell. Returns the process exit code.
///
/// # Arguments
///
/// * `args` - The already-parsed command-line arguments.
fn run(args: CommandLineArgs) -> Result<u8, ShellError> {
    events::TraceEventConfig::init(&args.enabled_log_events);

    let interactive = args.script_path.is_none() && std::io::stdin().is_terminal();

    let mut shell = Shell::new(&CreateOptions {
        interactive,
        inherit_env: true,
        shell_name: std::env::args().next(),
    });

    let history_path = default_history_file_path();
    if let Some(path) = &history_path {
        // A missing or unreadable history file must not block the shell.
        if let Ok(history) = History::import(path, DEFAULT_CAPACITY) {
            shell.history = history;
        }
    }

    let result = if let Some(script_path) = &args.script_path {
        run_script(&mut shell, script_path)?
    } else {
        interactive::run(&mut shell)?
    };

    if let Some(path) = &history_path {
        if let Err(e) = shell.history.flush(path) {
            tracing::debug!("failed to persist history: {e}");
        }
    }

    Ok(result)
}

/// Runs a script file in batch mode, mapping open failures to the
/// conventional exit codes (127 not found, 126 permission denied).
fn run_script(shell: &mut Shell, script_path: &str) -> Result<u8, ShellError> {
    match shell.run_script(Path::new(script_path)) {
        Ok(result) => Ok(result.exit_code),
        Err(scallop_core::Error::IoError(e))
            if e.kind() == std::io::ErrorKind::NotFound =>
        {
            let shell_name = shell.shell_name.as_deref().unwrap_or("scallop").to_owned();
            eprintln!("{shell_name}: 0: Can't open {script_path}");
            Ok(127)
        }
        Err(scallop_core::Error::IoError(e))
            if e.kind() == std::io::ErrorKind::PermissionDenied =>
        {
            Ok(126)
        }
        Err(e) => Err(e.into()),
    }
}

/// Returns the per-user history file location (`~/.scallop_history`).
fn default_history_file_path() -> Option<PathBuf> {
    let strategy = etcetera::choose_base_strategy().ok()?;
    Some(strategy.home_dir().join(".scallop_history"))
}
