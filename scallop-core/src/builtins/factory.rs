//! Constructs registrations for the shell's default built-in commands.

use std::io::Write;

#[allow(clippy::wildcard_imports)]
use super::*;

use crate::builtins;
use crate::commands;
use crate::error;

/// Returns the default built-in command registrations, in table order.
/// Lookup is exact-match on the command name; the first match wins.
pub(crate) fn get_default_builtins() -> Vec<(&'static str, builtins::Registration)> {
    vec![
        ("exit", builtin::<exit::ExitCommand>()),
        ("cd", builtin::<cd::CdCommand>()),
        ("help", builtin::<help::HelpCommand>()),
        ("history", builtin::<history::HistoryCommand>()),
        ("env", builtin::<env_::EnvCommand>()),
        ("setenv", builtin::<setenv::SetenvCommand>()),
        ("unsetenv", builtin::<unsetenv::UnsetenvCommand>()),
        ("alias", builtin::<alias::AliasCommand>()),
    ]
}

/// Returns a built-in command registration, given an implementation of the
/// `Command` trait.
pub fn builtin<B: builtins::Command>() -> builtins::Registration {
    builtins::Registration {
        execute_func: exec_builtin::<B>,
        content_func: B::get_content,
    }
}

fn exec_builtin<B: builtins::Command>(
    context: commands::ExecutionContext<'_>,
    args: Vec<String>,
) -> Result<builtins::BuiltinResult, error::Error> {
    let command = match B::new(args) {
        Ok(command) => command,
        Err(e) => {
            writeln!(context.stderr(), "{e}")?;
            return Ok(builtins::BuiltinResult {
                exit_code: builtins::ExitCode::InvalidUsage,
            });
        }
    };

    Ok(builtins::BuiltinResult {
        exit_code: command.execute(context)?,
    })
}
