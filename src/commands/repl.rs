//! The read-eval-print loop around a [`Session`].

use super::{Reply, Session};
use crate::domain::CalendarDate;
use std::io::{self, BufRead, Write};
use tracing::error;

pub const GREETING: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "\nEnter a command (or 'menu' for options): ";

/// Read commands from `input` until `exit`, end of input or a read failure,
/// writing replies to `output`.
///
/// Lines are decoded lossily, so bytes that are not UTF-8 only produce an
/// invalid-command reply. Returns whether the final save succeeded.
///
/// # Errors
///
/// Only failures to write to `output` are returned.
pub fn run<R, W>(session: &mut Session, mut input: R, output: &mut W) -> io::Result<bool>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", GREETING)?;
    let mut buf = Vec::new();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        buf.clear();
        let reply = match input.read_until(b'\n', &mut buf) {
            // End of input behaves like `exit`
            Ok(0) => {
                writeln!(output)?;
                session.exit()
            }
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                session.dispatch(
                    line.trim_end_matches(|c| c == '\n' || c == '\r'),
                    CalendarDate::today(),
                )
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                error!(error = %e, "Failed to read input");
                session.exit()
            }
        };

        match reply {
            Reply::Silent => {}
            Reply::Message(message) => writeln!(output, "{}", message)?,
            Reply::Exit { message, saved } => {
                writeln!(output, "{}", message)?;
                return Ok(saved);
            }
        }
    }
}
