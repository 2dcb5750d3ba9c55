//! Parsed command-line arguments for the scallop shell.

use clap::Parser;

use crate::events;

const SHORT_DESCRIPTION: &str = "Small interactive command interpreter";

const LONG_DESCRIPTION: &str = r"
scallop reads command lines, resolves and runs programs, and keeps
per-session state: environment entries, aliases, history, and the last
exit status. With no arguments and a terminal on stdin it prompts
interactively; otherwise it executes its input in batch mode.
";

/// Parsed command-line arguments for the scallop shell.
#[derive(Parser)]
#[clap(name = "scallop",
       version,
       about = SHORT_DESCRIPTION,
       long_about = LONG_DESCRIPTION)]
pub(crate) struct CommandLineArgs {
    /// Enable tracing of the named event category to stderr.
    #[clap(long = "log-event", value_name = "EVENT")]
    pub enabled_log_events: Vec<events::TraceEvent>,

    /// Script file to execute in batch mode; reads from stdin when omitted.
    pub script_path: Option<String>,
}
