//! The shell's read-eval loop over standard input.

use scallop_core::Shell;

use crate::error::ShellError;
use crate::reader::{self, ReadResult};

/// Runs the read-eval loop until end-of-input or an `exit` request. Returns
/// the process exit code: the last command's status in batch mode, 0 for an
/// interactive end-of-input.
///
/// # Arguments
///
/// * `shell` - The shell session to drive.
pub(crate) fn run(shell: &mut Shell) -> Result<u8, ShellError> {
    if shell.is_interactive() {
        reader::install_interrupt_handler()?;
    }

    loop {
        // Query the prompt once per iteration.
        let prompt = shell.is_interactive().then(|| shell.prompt());

        match reader::read_line(prompt.as_deref())? {
            ReadResult::Input(line) => {
                tracing::debug!(
                    target: scallop_core::trace_categories::INPUT,
                    "read line: {:?}",
                    line.trim_end()
                );

                match shell.run_line(&line) {
                    Ok(result) if result.exit_shell => return Ok(result.exit_code),
                    Ok(_) => (),
                    Err(e) => {
                        // Recover locally and continue to the next prompt.
                        eprintln!("scallop: {e}");
                    }
                }
            }
            ReadResult::Eof => {
                if shell.is_interactive() {
                    println!();
                    return Ok(0);
                }
                return Ok(shell.last_exit_status);
            }
            ReadResult::Interrupted => (),
        }
    }
}
