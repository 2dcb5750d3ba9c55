//! Output sinks available to the shell and its built-in commands.
//!
//! The core never writes to the terminal directly; everything funnels through
//! these sinks so that a front-end (or a test) can substitute its own.

use std::io::Write;
use std::sync::{Arc, Mutex};

/// Represents a write target open in a shell context.
pub enum OpenFile {
    /// The process's standard output.
    Stdout(std::io::Stdout),
    /// The process's standard error.
    Stderr(std::io::Stderr),
    /// An in-memory capture buffer.
    Buffer(Arc<Mutex<Vec<u8>>>),
}

impl Clone for OpenFile {
    fn clone(&self) -> Self {
        match self {
            Self::Stdout(_) => Self::Stdout(std::io::stdout()),
            Self::Stderr(_) => Self::Stderr(std::io::stderr()),
            Self::Buffer(buffer) => Self::Buffer(buffer.clone()),
        }
    }
}

impl Write for OpenFile {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            Self::Stdout(f) => f.write(buf),
            Self::Stderr(f) => f.write(buf),
            Self::Buffer(buffer) => {
                let mut guard = buffer
                    .lock()
                    .map_err(|_| std::io::Error::other("capture buffer poisoned"))?;
                guard.extend_from_slice(buf);
                Ok(buf.len())
            }
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(f) => f.flush(),
            Self::Stderr(f) => f.flush(),
            Self::Buffer(_) => Ok(()),
        }
    }
}

/// The standard sinks tracked for a shell instance.
#[derive(Clone)]
pub struct OpenFiles {
    /// Sink standing in for standard output.
    pub stdout: OpenFile,
    /// Sink standing in for standard error.
    pub stderr: OpenFile,
}

impl Default for OpenFiles {
    fn default() -> Self {
        Self {
            stdout: OpenFile::Stdout(std::io::stdout()),
            stderr: OpenFile::Stderr(std::io::stderr()),
        }
    }
}

impl OpenFiles {
    /// Returns sinks backed by in-memory buffers, along with handles to the
    /// buffers' contents. Used by tests and embedding front-ends.
    pub fn captured() -> (Self, Arc<Mutex<Vec<u8>>>, Arc<Mutex<Vec<u8>>>) {
        let stdout = Arc::new(Mutex::new(Vec::new()));
        let stderr = Arc::new(Mutex::new(Vec::new()));
        let open_files = Self {
            stdout: OpenFile::Buffer(stdout.clone()),
            stderr: OpenFile::Buffer(stderr.clone()),
        };
        (open_files, stdout, stderr)
    }
}
