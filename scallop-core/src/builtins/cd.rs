use clap::Parser;
use std::io::Write;

use crate::{builtins, commands};

/// Change the current working directory.
#[derive(Parser)]
pub(crate) struct CdCommand {
    /// Directory to change to. Defaults to $HOME; `-` targets $OLDPWD.
    target_dir: Option<String>,
}

impl builtins::Command for CdCommand {
    fn execute(
        &self,
        context: commands::ExecutionContext<'_>,
    ) -> Result<crate::builtins::ExitCode, crate::error::Error> {
        let shell = context.shell;

        let mut should_print = false;
        let target = match &self.target_dir {
            Some(target) if target == "-" => {
                // `cd -' is equivalent to `cd $OLDPWD'
                if let Some(old_pwd) = shell.env.get("OLDPWD") {
                    should_print = true;
                    old_pwd.to_owned()
                } else {
                    let cwd = std::env::current_dir()?;
                    writeln!(shell.stdout(), "{}", cwd.display())?;
                    return Ok(builtins::ExitCode::Custom(1));
                }
            }
            Some(target) => target.clone(),
            // `cd' without arguments targets $HOME, falling back to $PWD and
            // finally the root directory when HOME is unset.
            None => shell
                .env
                .get("HOME")
                .or_else(|| shell.env.get("PWD"))
                .unwrap_or("/")
                .to_owned(),
        };

        if std::env::set_current_dir(&target).is_err() {
            writeln!(shell.stderr(), "cd: can't cd to {target}")?;
            return Ok(builtins::ExitCode::Custom(1));
        }

        let previous = shell.env.get("PWD").map(str::to_owned);
        if let Some(previous) = previous {
            shell.env.set("OLDPWD", &previous);
        }
        let cwd = std::env::current_dir()?;
        shell.env.set("PWD", &cwd.display().to_string());

        if should_print {
            writeln!(shell.stdout(), "{target}")?;
        }

        Ok(builtins::ExitCode::Success)
    }
}
