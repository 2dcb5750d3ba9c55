use clap::Parser;
use std::io::Write;

use crate::{builtins, commands};

/// Exit the shell.
#[derive(Parser)]
pub(crate) struct ExitCommand {
    /// The exit code to return; defaults to the last command's status.
    #[arg(allow_hyphen_values = true)]
    code: Option<String>,
}

impl builtins::Command for ExitCommand {
    fn execute(
        &self,
        context: commands::ExecutionContext<'_>,
    ) -> Result<crate::builtins::ExitCode, crate::error::Error> {
        let Some(arg) = &self.code else {
            return Ok(builtins::ExitCode::ExitShell(
                context.shell.last_exit_status,
            ));
        };

        match parse_exit_status(arg) {
            Some(code) => {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let code = (code & 0xff) as u8;
                Ok(builtins::ExitCode::ExitShell(code))
            }
            None => {
                writeln!(
                    context.stderr(),
                    "{}: Illegal number: {arg}",
                    context.command_name
                )?;
                Ok(builtins::ExitCode::Custom(2))
            }
        }
    }
}

/// Parses a decimal exit status argument: digits with an optional leading
/// `+`. Anything else (signs, letters, overflow) is an illegal number.
fn parse_exit_status(arg: &str) -> Option<i64> {
    let digits = arg.strip_prefix('+').unwrap_or(arg);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_exit_status() {
        assert_eq!(parse_exit_status("0"), Some(0));
        assert_eq!(parse_exit_status("42"), Some(42));
        assert_eq!(parse_exit_status("+7"), Some(7));
        assert_eq!(parse_exit_status("abc"), None);
        assert_eq!(parse_exit_status("-1"), None);
        assert_eq!(parse_exit_status(""), None);
        assert_eq!(parse_exit_status("12x"), None);
        assert_eq!(parse_exit_status("99999999999999999999"), None);
    }
}
