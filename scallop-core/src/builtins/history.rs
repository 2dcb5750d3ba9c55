use clap::Parser;
use std::io::Write;

use crate::{builtins, commands};

/// Display the command history list with line numbers.
#[derive(Parser)]
pub(crate) struct HistoryCommand {}

impl builtins::Command for HistoryCommand {
    fn execute(
        &self,
        context: commands::ExecutionContext<'_>,
    ) -> Result<crate::builtins::ExitCode, crate::error::Error> {
        let mut stdout = context.stdout();

        for item in context.shell.history.iter() {
            writeln!(stdout, "{:5}  {}", item.id, item.command_line)?;
        }

        Ok(builtins::ExitCode::Success)
    }
}
