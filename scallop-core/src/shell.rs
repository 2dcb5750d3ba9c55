//! Implements the shell session context and its line-execution engine.

use std::io::Write;
use std::path::Path;

use crate::aliases::AliasSet;
use crate::env::ShellEnvironment;
use crate::error;
use crate::expansion;
use crate::history::{self, History};
use crate::openfiles::{OpenFile, OpenFiles};
use crate::parse::{self, ChainOperator};
use crate::pathsearch;
use crate::processes;
use crate::results::ExecutionResult;
use crate::trace_categories;
use crate::{builtins, commands};

const PROMPT: &str = "$ ";

/// Options used to create a shell instance.
#[derive(Clone, Debug)]
pub struct CreateOptions {
    /// Whether the shell is reading from an interactive terminal.
    pub interactive: bool,
    /// Whether to populate the environment store from the calling process's
    /// environment.
    pub inherit_env: bool,
    /// Name the shell was invoked under (a.k.a. argv[0]).
    pub shell_name: Option<String>,
}

impl Default for CreateOptions {
    fn default() -> Self {
        Self {
            interactive: false,
            inherit_env: true,
            shell_name: None,
        }
    }
}

/// Represents an instance of a shell session.
pub struct Shell {
    /// The shell environment, an ordered store of NAME/VALUE entries.
    pub env: ShellEnvironment,

    /// Shell aliases.
    pub aliases: AliasSet,

    /// History of command lines read by the shell.
    pub history: History,

    /// The status of the last completed command.
    pub last_exit_status: u8,

    /// Shell name (a.k.a. argv[0]).
    pub shell_name: Option<String>,

    /// Output sinks used by the shell and its builtins.
    open_files: OpenFiles,

    /// Options the shell was created with.
    options: CreateOptions,

    /// Shell built-in commands, in table order.
    builtins: Vec<(String, builtins::Registration)>,
}

impl Shell {
    /// Returns a new shell instance created with the given options.
    ///
    /// # Arguments
    ///
    /// * `options` - The options controlling creation.
    pub fn new(options: &CreateOptions) -> Self {
        let env = if options.inherit_env {
            ShellEnvironment::from_process_env()
        } else {
            ShellEnvironment::new()
        };

        let mut shell = Self {
            env,
            aliases: AliasSet::new(),
            history: History::new(history::DEFAULT_CAPACITY),
            last_exit_status: 0,
            shell_name: options.shell_name.clone(),
            open_files: OpenFiles::default(),
            options: options.clone(),
            builtins: Vec::new(),
        };

        for (name, registration) in builtins::get_default_builtins() {
            shell.register_builtin(name, registration);
        }

        shell
    }

    /// Returns whether the shell is reading from an interactive terminal.
    pub fn is_interactive(&self) -> bool {
        self.options.interactive
    }

    /// Returns the prompt string to display before the next read. Evaluated
    /// once per loop iteration by the front-end.
    pub fn prompt(&self) -> String {
        PROMPT.to_owned()
    }

    /// Returns the standard output sink.
    pub fn stdout(&self) -> OpenFile {
        self.open_files.stdout.clone()
    }

    /// Returns the standard error sink.
    pub fn stderr(&self) -> OpenFile {
        self.open_files.stderr.clone()
    }

    /// Replaces the shell's output sinks.
    ///
    /// # Arguments
    ///
    /// * `open_files` - The sinks to use from now on.
    pub fn set_open_files(&mut self, open_files: OpenFiles) {
        self.open_files = open_files;
    }

    /// Returns the registered built-in commands, in table order.
    pub fn builtins(&self) -> &[(String, builtins::Registration)] {
        &self.builtins
    }

    /// Registers a built-in command under the given name, replacing any
    /// previous registration for that name without disturbing table order.
    ///
    /// # Arguments
    ///
    /// * `name` - The command name.
    /// * `registration` - The registration to install.
    pub fn register_builtin(&mut self, name: &str, registration: builtins::Registration) {
        if let Some(entry) = self.builtins.iter_mut().find(|(n, _)| n == name) {
            entry.1 = registration;
        } else {
            self.builtins.push((name.to_owned(), registration));
        }
    }

    /// Runs a single raw input line: records it to history, splits it on
    /// chain operators, and executes each segment with AND/OR gating against
    /// the immediately preceding segment's exit status.
    ///
    /// # Arguments
    ///
    /// * `line` - The raw line, with or without a trailing newline.
    pub fn run_line(&mut self, line: &str) -> Result<ExecutionResult, error::Error> {
        let line = line.strip_suffix('\n').unwrap_or(line);

        if !line.trim().is_empty() {
            self.history.add(line);
        }

        let effective = parse::strip_comment(line);
        tracing::debug!(target: trace_categories::PARSE, "line: {effective:?}");

        for segment in parse::split_chain(effective) {
            match segment.op {
                ChainOperator::And if self.last_exit_status != 0 => continue,
                ChainOperator::Or if self.last_exit_status == 0 => continue,
                _ => (),
            }

            let expanded = expansion::expand(self, &segment.text);
            let argv = parse::tokenize(&expanded);
            if argv.is_empty() {
                // Empty segments (consecutive or trailing operators, lone
                // expansions of unset variables) are no-ops.
                continue;
            }

            let result = self.execute_argv(argv)?;
            self.last_exit_status = result.exit_code;
            if result.exit_shell {
                return Ok(result);
            }
        }

        Ok(ExecutionResult::new(self.last_exit_status))
    }

    /// Runs the commands in the given script file, line by line, stopping
    /// early if a line asks the shell to exit.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the script file.
    pub fn run_script(&mut self, path: &Path) -> Result<ExecutionResult, error::Error> {
        use std::io::BufRead;

        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);

        let mut result = ExecutionResult::new(self.last_exit_status);
        for line in reader.lines() {
            let line = line?;
            result = self.run_line(&line)?;
            if result.exit_shell {
                break;
            }
        }

        Ok(result)
    }

    /// Dispatches a tokenized command: exact-match builtin lookup first, then
    /// PATH resolution and synchronous execution of an external program.
    fn execute_argv(&mut self, argv: Vec<String>) -> Result<ExecutionResult, error::Error> {
        let command_name = argv[0].clone();

        if let Some(registration) = self.builtin_registration(&command_name) {
            tracing::debug!(target: trace_categories::COMMANDS, "builtin: {command_name}");

            let context = commands::ExecutionContext {
                shell: self,
                command_name,
            };
            let result = (registration.execute_func)(context, argv)?;

            let execution_result = match result.exit_code {
                builtins::ExitCode::Success => ExecutionResult::success(),
                builtins::ExitCode::InvalidUsage => ExecutionResult::new(2),
                builtins::ExitCode::Custom(code) => ExecutionResult::new(code),
                builtins::ExitCode::ExitShell(code) => ExecutionResult {
                    exit_code: code,
                    exit_shell: true,
                },
            };
            return Ok(execution_result);
        }

        // PATH is re-read from the live environment on every dispatch, so a
        // `setenv PATH ...` earlier in the session takes effect immediately.
        let resolved = pathsearch::resolve_command(self.env.get("PATH"), &command_name);
        match resolved {
            Some(path) => processes::spawn_external(self, &path, &argv),
            None => {
                writeln!(self.stderr(), "{command_name}: not found")?;
                Ok(ExecutionResult::new(127))
            }
        }
    }

    fn builtin_registration(&self, name: &str) -> Option<builtins::Registration> {
        self.builtins
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, registration)| registration.clone())
    }
}
