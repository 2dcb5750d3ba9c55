use clap::Parser;
use std::io::Write;

use crate::{builtins, commands};

/// Display information about built-in commands.
#[derive(Parser)]
pub(crate) struct HelpCommand {
    /// Names of built-in commands to show detailed help for.
    topics: Vec<String>,
}

impl builtins::Command for HelpCommand {
    fn execute(
        &self,
        context: commands::ExecutionContext<'_>,
    ) -> Result<crate::builtins::ExitCode, crate::error::Error> {
        if self.topics.is_empty() {
            display_general_help(&context)?;
            return Ok(builtins::ExitCode::Success);
        }

        let mut exit_code = builtins::ExitCode::Success;
        for topic in &self.topics {
            let registration = context
                .shell
                .builtins()
                .iter()
                .find(|(name, _)| name == topic)
                .map(|(_, registration)| registration.clone());

            if let Some(registration) = registration {
                let content =
                    (registration.content_func)(topic, builtins::ContentType::DetailedHelp)?;
                writeln!(context.stdout(), "{content}")?;
            } else {
                writeln!(context.stderr(), "help: no help topics match '{topic}'")?;
                exit_code = builtins::ExitCode::Custom(1);
            }
        }

        Ok(exit_code)
    }
}

fn display_general_help(
    context: &commands::ExecutionContext<'_>,
) -> Result<(), crate::error::Error> {
    let mut stdout = context.stdout();

    writeln!(
        stdout,
        "The following commands are implemented as shell built-ins:"
    )?;
    writeln!(stdout)?;

    for (name, registration) in context.shell.builtins() {
        let line = (registration.content_func)(name, builtins::ContentType::ShortDescription)?;
        writeln!(stdout, "  {line}")?;
    }

    writeln!(stdout)?;
    writeln!(stdout, "Type 'help NAME' for more information on a command.")?;

    Ok(())
}
