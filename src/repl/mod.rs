//! REPL Module
//!
//! The read-eval-print loop: prompt, tokenize, dispatch to a [`Command`],
//! print the outcome. Command failures are printed and the loop carries on;
//! only I/O failures on the terminal itself end it early.

mod commands;
mod input;
mod session;

pub use commands::{catch_succeeds, Command, Flow, GOODBYE};
pub use input::clean_input;
pub use session::Session;

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::api::PokeApiClient;
use crate::error::{PokedexError, Result};

/// Runs the loop until `exit` or end of input.
///
/// # Arguments
/// * `input` - Line source, usually buffered stdin
/// * `out` - Where prompts and command output go
/// * `prompt` - Printed before every line is read
pub async fn run<R, W>(
    input: R,
    out: &mut W,
    prompt: &str,
    session: &mut Session,
    client: &PokeApiClient,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        write!(out, "{}", prompt)?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            // Ctrl-D: leave the prompt line and exit like `exit` would
            writeln!(out)?;
            writeln!(out, "{}", GOODBYE)?;
            debug!("Input closed");
            return Ok(());
        };

        let words = clean_input(&line);
        let Some(command) = words.first().and_then(|name| Command::parse(name)) else {
            writeln!(out, "Unknown command")?;
            continue;
        };

        match command.execute(&words[1..], session, client, out).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => return Ok(()),
            Err(PokedexError::Io(err)) => return Err(err.into()),
            Err(err) => {
                // Already shown to the user; keep stderr quiet at the default level
                debug!(command = command.name(), error = %err, "Command failed");
                writeln!(out, "{}", err)?;
            }
        }
    }
}
