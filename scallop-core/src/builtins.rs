//! Infrastructure for shell built-in commands.

use clap::{CommandFactory, Parser};

use crate::commands;
use crate::error;

mod alias;
mod cd;
mod env_;
mod exit;
mod factory;
mod help;
mod history;
mod setenv;
mod unsetenv;

pub(crate) use factory::get_default_builtins;
pub use factory::builtin;

/// Result of executing a built-in command.
pub struct BuiltinResult {
    /// The exit code from the command.
    pub exit_code: ExitCode,
}

/// Exit codes for built-in commands.
pub enum ExitCode {
    /// The command was successful.
    Success,
    /// The inputs to the command were invalid.
    InvalidUsage,
    /// The command returned a specific custom numerical exit code.
    Custom(u8),
    /// The command is requesting to exit the shell, yielding the given exit
    /// code.
    ExitShell(u8),
}

/// Type of a function implementing a built-in command.
///
/// # Arguments
///
/// * The context in which the command is being executed.
/// * The full argument vector, command name included.
pub type CommandExecuteFunc =
    fn(commands::ExecutionContext<'_>, Vec<String>) -> Result<BuiltinResult, error::Error>;

/// Type of a function to retrieve help content for a built-in command.
///
/// # Arguments
///
/// * `name` - The name of the command.
/// * `content_type` - The type of content to retrieve.
pub type CommandContentFunc = fn(&str, ContentType) -> Result<String, error::Error>;

/// Type of help content associated with a built-in command.
pub enum ContentType {
    /// Detailed help content for the command.
    DetailedHelp,
    /// Short description for the command.
    ShortDescription,
}

/// Trait implemented by built-in shell commands.
pub trait Command: Parser {
    /// Instantiates the built-in command with the given arguments.
    ///
    /// # Arguments
    ///
    /// * `args` - The arguments to the command, command name first.
    fn new<I>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = String>,
    {
        Self::try_parse_from(args)
    }

    /// Executes the built-in command in the provided context.
    ///
    /// # Arguments
    ///
    /// * `context` - The context in which the command is being executed.
    fn execute(
        &self,
        context: commands::ExecutionContext<'_>,
    ) -> Result<ExitCode, error::Error>;

    /// Returns the textual help content associated with the command.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the command.
    /// * `content_type` - The type of content to retrieve.
    fn get_content(name: &str, content_type: ContentType) -> Result<String, error::Error> {
        let mut clap_command = Self::command();
        clap_command.set_bin_name(name);

        let s = match content_type {
            ContentType::DetailedHelp => clap_command.render_long_help().to_string(),
            ContentType::ShortDescription => {
                get_builtin_short_description(name, &clap_command)
            }
        };

        Ok(s)
    }
}

/// Encapsulates a registration for a built-in command.
#[derive(Clone)]
pub struct Registration {
    /// Function to execute the builtin.
    pub execute_func: CommandExecuteFunc,

    /// Function to retrieve the builtin's content/help text.
    pub content_func: CommandContentFunc,
}

fn get_builtin_short_description(name: &str, command: &clap::Command) -> String {
    let about = command
        .get_about()
        .map_or_else(String::new, |s| s.to_string());

    std::format!("{name} - {about}")
}
