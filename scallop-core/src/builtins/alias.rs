use clap::Parser;
use std::io::Write;

use crate::{builtins, commands};

/// Define or display aliases.
#[derive(Parser)]
pub(crate) struct AliasCommand {
    /// Aliases to display or update, as `name` or `name=value`.
    #[arg(name = "name[=value]")]
    aliases: Vec<String>,
}

impl builtins::Command for AliasCommand {
    fn execute(
        &self,
        context: commands::ExecutionContext<'_>,
    ) -> Result<crate::builtins::ExitCode, crate::error::Error> {
        let mut exit_code = builtins::ExitCode::Success;

        if self.aliases.is_empty() {
            for (name, value) in context.shell.aliases.iter() {
                writeln!(context.stdout(), "{name}='{value}'")?;
            }
            return Ok(exit_code);
        }

        for arg in merge_quoted_values(&self.aliases) {
            if let Some((name, value)) = arg.split_once('=') {
                context
                    .shell
                    .aliases
                    .set(name, strip_surrounding_quotes(value));
            } else if let Some(value) = context.shell.aliases.get(&arg) {
                writeln!(context.stdout(), "{arg}='{value}'")?;
            } else {
                writeln!(
                    context.stderr(),
                    "{}: {arg}: not found",
                    context.command_name
                )?;
                exit_code = builtins::ExitCode::Custom(1);
            }
        }

        Ok(exit_code)
    }
}

/// Re-joins a quoted alias value that the whitespace tokenizer split apart:
/// an argument whose value opens with `'` but does not close it consumes
/// subsequent arguments, joined by single spaces, until one ends with `'`.
fn merge_quoted_values(args: &[String]) -> Vec<String> {
    let mut merged = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let needs_join = arg
            .split_once('=')
            .is_some_and(|(_, value)| value.starts_with('\'') && !has_closing_quote(value));

        if !needs_join {
            merged.push(arg.clone());
            continue;
        }

        let mut joined = arg.clone();
        for next in iter.by_ref() {
            joined.push(' ');
            joined.push_str(next);
            if next.ends_with('\'') {
                break;
            }
        }
        merged.push(joined);
    }

    merged
}

fn has_closing_quote(value: &str) -> bool {
    value.len() >= 2 && value.ends_with('\'')
}

fn strip_surrounding_quotes(value: &str) -> &str {
    value
        .strip_prefix('\'')
        .and_then(|v| v.strip_suffix('\''))
        .unwrap_or(value)
}
