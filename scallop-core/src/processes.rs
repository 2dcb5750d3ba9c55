//! Synchronous process management.

use std::io::Write;
use std::path::Path;

use crate::{Shell, error, results::ExecutionResult, trace_categories};

/// Typed outcome of waiting for a child process.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProcessStatus {
    /// The child exited normally with the given code.
    Exited(u8),
    /// The child was terminated by the given signal.
    Signaled(i32),
}

impl ProcessStatus {
    /// Maps the status to the shell's numeric exit status; signal
    /// termination surfaces as 128 plus the signal number.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Exited(code) => *code,
            Self::Signaled(signal) => (128 + *signal) as u8,
        }
    }
}

impl From<std::process::ExitStatus> for ProcessStatus {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn from(status: std::process::ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return Self::Exited((code & 0xff) as u8);
        }

        Self::from_abnormal_exit(&status)
    }
}

impl ProcessStatus {
    #[cfg(unix)]
    fn from_abnormal_exit(status: &std::process::ExitStatus) -> Self {
        use std::os::unix::process::ExitStatusExt;
        Self::Signaled(status.signal().unwrap_or(0))
    }

    #[cfg(not(unix))]
    fn from_abnormal_exit(_status: &std::process::ExitStatus) -> Self {
        Self::Exited(1)
    }
}

/// Spawns the resolved executable with the given argument vector and the
/// environment store's current flat view, then blocks until it exits.
///
/// Spawn failures map to the usual conventions: permission denied is
/// reported as 126, a vanished or unloadable executable as 127.
///
/// # Arguments
///
/// * `shell` - The shell spawning the command.
/// * `path` - The resolved executable path.
/// * `argv` - The full argument vector, command name first.
pub(crate) fn spawn_external(
    shell: &mut Shell,
    path: &Path,
    argv: &[String],
) -> Result<ExecutionResult, error::Error> {
    tracing::debug!(target: trace_categories::COMMANDS, "spawning: {}", path.display());

    let mut command = std::process::Command::new(path);
    command.args(&argv[1..]);
    command.env_clear();
    command.envs(shell.env.iter());

    match command.spawn() {
        Ok(mut child) => {
            let status = ProcessStatus::from(child.wait()?);
            Ok(ExecutionResult::new(status.exit_code()))
        }
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            writeln!(shell.stderr(), "{}: Permission denied", argv[0])?;
            Ok(ExecutionResult::new(126))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            writeln!(shell.stderr(), "{}: not found", argv[0])?;
            Ok(ExecutionResult::new(127))
        }
        Err(e) => {
            writeln!(shell.stderr(), "{}: cannot execute: {e}", argv[0])?;
            Ok(ExecutionResult::new(126))
        }
    }
}
