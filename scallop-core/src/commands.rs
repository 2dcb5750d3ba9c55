//! Execution context handed to commands.

use crate::Shell;
use crate::openfiles::OpenFile;

/// Represents the context for executing a command.
pub struct ExecutionContext<'a> {
    /// The shell in which the command is being executed.
    pub shell: &'a mut Shell,
    /// The name of the command being executed.
    pub command_name: String,
}

impl ExecutionContext<'_> {
    /// Returns the standard output sink; usable with `write!` et al.
    pub fn stdout(&self) -> OpenFile {
        self.shell.stdout()
    }

    /// Returns the standard error sink; usable with `write!` et al.
    pub fn stderr(&self) -> OpenFile {
        self.shell.stderr()
    }
}
