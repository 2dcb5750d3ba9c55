//! Encapsulation of execution results.

/// Represents the result of executing a command or a chain of commands.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ExecutionResult {
    /// The exit code resulting from execution.
    pub exit_code: u8,
    /// Whether execution requested that the shell exit.
    pub exit_shell: bool,
}

impl ExecutionResult {
    /// Returns a new `ExecutionResult` with the given exit code.
    ///
    /// # Arguments
    ///
    /// * `exit_code` - The exit code of the command.
    pub const fn new(exit_code: u8) -> Self {
        Self {
            exit_code,
            exit_shell: false,
        }
    }

    /// Returns a new `ExecutionResult` with an exit code of 0.
    pub const fn success() -> Self {
        Self::new(0)
    }

    /// Returns whether the command was successful.
    pub const fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}
