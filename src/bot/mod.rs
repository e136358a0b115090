//! Interactive assistant bot.
//!
//! The bot reads one command per line, answers on the output stream and
//! stops on `close`, `exit` or end of input.

pub mod commands;
pub mod handlers;

pub use commands::{parse_input, Command, ParsedInput};
pub use handlers::{AssistantBot, Outcome};

use handlers::FAREWELL;
use std::borrow::Cow;
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";

/// Run the read-eval-print loop until the user leaves.
///
/// # Errors
///
/// Only I/O failures on `input` or `output` end the loop with an error.
/// Bytes that are not UTF-8 are replaced and the line is handled as usual.
pub fn run_bot<R, W>(bot: &mut AssistantBot, mut input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", WELCOME)?;
    let mut buf = Vec::new();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            info!("End of input, leaving");
            writeln!(output)?;
            writeln!(output, "{}", FAREWELL)?;
            return Ok(());
        }

        let line = String::from_utf8_lossy(&buf);
        if let Cow::Owned(_) = line {
            warn!("Input line was not valid UTF-8");
        }

        match bot.handle_line(&line) {
            None => continue,
            Some(Outcome::Continue(message)) => writeln!(output, "{}", message)?,
            Some(Outcome::Exit(message)) => {
                writeln!(output, "{}", message)?;
                info!(contacts = bot.book().len(), "Session closed");
                return Ok(());
            }
        }
    }
}
