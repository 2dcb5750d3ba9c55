/// Represents an error encountered while running or otherwise managing the
/// shell front-end.
#[derive(thiserror::Error, Debug)]
pub(crate) enum ShellError {
    /// An error occurred within the shell core.
    #[error("{0}")]
    ShellError(#[from] scallop_core::Error),

    /// A generic I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A system call failed.
    #[cfg(unix)]
    #[error("system error: {0}")]
    ErrnoError(#[from] nix::errno::Errno),
}
