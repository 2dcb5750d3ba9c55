use clap::Parser;

use crate::{builtins, commands};

/// Set an environment variable, updating it if it already exists.
#[derive(Parser)]
pub(crate) struct SetenvCommand {
    /// Name of the variable.
    name: String,

    /// Value to assign.
    value: String,
}

impl builtins::Command for SetenvCommand {
    fn execute(
        &self,
        context: commands::ExecutionContext<'_>,
    ) -> Result<crate::builtins::ExitCode, crate::error::Error> {
        context.shell.env.set(&self.name, &self.value);
        Ok(builtins::ExitCode::Success)
    }
}
