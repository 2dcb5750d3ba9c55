use clap::Parser;

use crate::{builtins, commands};

/// Remove environment variables. Absent names are silently ignored.
#[derive(Parser)]
pub(crate) struct UnsetenvCommand {
    /// Names of the variables to remove.
    #[arg(required = true)]
    names: Vec<String>,
}

impl builtins::Command for UnsetenvCommand {
    fn execute(
        &self,
        context: commands::ExecutionContext<'_>,
    ) -> Result<crate::builtins::ExitCode, crate::error::Error> {
        for name in &self.names {
            context.shell.env.unset(name);
        }

        Ok(builtins::ExitCode::Success)
    }
}
