//! Line reading for the shell's front-end.
//!
//! Terminal input is read byte-at-a-time so that an interrupt delivered
//! during the blocking read surfaces immediately; non-terminal input
//! (pipes, files) goes through the standard buffered reader.

use std::io::{IsTerminal, Write};

use crate::error::ShellError;

/// Result of reading one line of input.
pub(crate) enum ReadResult {
    /// A line was read.
    Input(String),
    /// End of input was reached.
    Eof,
    /// The pending read was aborted by an interrupt.
    Interrupted,
}

/// Installs the SIGINT handler that flags an interrupt for the read loop.
pub(crate) use interrupt::install as install_interrupt_handler;

/// Reads one line of input, writing the prompt first when one is given.
///
/// # Arguments
///
/// * `prompt` - The prompt to display, if any.
pub(crate) fn read_line(prompt: Option<&str>) -> Result<ReadResult, ShellError> {
    if let Some(prompt) = prompt {
        let mut stdout = std::io::stdout();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;
    }

    if std::io::stdin().is_terminal() {
        term_read_line()
    } else {
        non_term_read_line()
    }
}

fn non_term_read_line() -> Result<ReadResult, ShellError> {
    let mut line = String::new();
    let bytes_read = std::io::stdin().read_line(&mut line)?;

    if bytes_read == 0 {
        Ok(ReadResult::Eof)
    } else {
        Ok(ReadResult::Input(line))
    }
}

/// Reads a terminal line one byte at a time with `Read::read`, which (unlike
/// `read_line`) surfaces an interrupted read instead of retrying it.
fn term_read_line() -> Result<ReadResult, ShellError> {
    use std::io::Read;

    let mut stdin = std::io::stdin();
    let mut bytes = Vec::new();
    let mut buf = [0u8; 1];

    loop {
        match stdin.read(&mut buf) {
            Ok(0) => {
                if bytes.is_empty() {
                    return Ok(ReadResult::Eof);
                }
                break;
            }
            Ok(_) => {
                if buf[0] == b'\n' {
                    break;
                }
                bytes.push(buf[0]);
            }
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {
                if interrupt::take() {
                    // Abort the pending read; the loop re-prompts.
                    writeln!(std::io::stdout())?;
                    return Ok(ReadResult::Interrupted);
                }
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(ReadResult::Input(String::from_utf8_lossy(&bytes).into_owned()))
}

#[cfg(unix)]
mod interrupt {
    use std::sync::atomic::{AtomicBool, Ordering};

    use crate::error::ShellError;

    static SIGINT_RECEIVED: AtomicBool = AtomicBool::new(false);

    extern "C" fn on_sigint(_signal: nix::libc::c_int) {
        SIGINT_RECEIVED.store(true, Ordering::SeqCst);
    }

    pub(crate) fn install() -> Result<(), ShellError> {
        use nix::sys::signal;

        let action = signal::SigAction::new(
            signal::SigHandler::Handler(on_sigint),
            // No SA_RESTART: the blocking read must return EINTR so the
            // flag can be checked at the read boundary.
            signal::SaFlags::empty(),
            signal::SigSet::empty(),
        );

        // SAFETY: the handler only performs an atomic store.
        unsafe { signal::sigaction(signal::Signal::SIGINT, &action) }?;

        Ok(())
    }

    /// Consumes the interrupt flag, returning whether it was set.
    pub(crate) fn take() -> bool {
        SIGINT_RECEIVED.swap(false, Ordering::SeqCst)
    }
}

#[cfg(not(unix))]
mod interrupt {
    use crate::error::ShellError;

    pub(crate) fn install() -> Result<(), ShellError> {
        Ok(())
    }

    pub(crate) fn take() -> bool {
        false
    }
}
