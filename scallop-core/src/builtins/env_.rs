use clap::Parser;
use std::io::Write;

use crate::{builtins, commands};

/// Print the current environment variables.
#[derive(Parser)]
pub(crate) struct EnvCommand {}

impl builtins::Command for EnvCommand {
    fn execute(
        &self,
        context: commands::ExecutionContext<'_>,
    ) -> Result<crate::builtins::ExitCode, crate::error::Error> {
        let mut stdout = context.stdout();

        for entry in context.shell.env.flat_view() {
            writeln!(stdout, "{entry}")?;
        }

        Ok(builtins::ExitCode::Success)
    }
}
