//! Line-oriented control surface over a [`HostBridge`].

use crate::HostBridge;

use std::io::{self, BufRead, Write};

use log::debug;

const HELP: &str = "commands: start, stop, port, status, help, quit";

/// A parsed console line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    Start,
    Stop,
    Port,
    Status,
    Help,
    Quit,
}

impl ConsoleCommand {
    /// Parse one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Option<Result<Self, String>> {
        let word = line.trim();
        if word.is_empty() {
            return None;
        }

        let command = match word.to_lowercase().as_str() {
            "start" => Self::Start,
            "stop" => Self::Stop,
            "port" => Self::Port,
            "status" => Self::Status,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ => return Some(Err(word.to_string())),
        };

        Some(Ok(command))
    }
}

/// Execute commands from `input` until `quit` or end of input, writing one
/// result line per command to `output`.
pub fn run<R: BufRead, W: Write>(bridge: &HostBridge, input: R, mut output: W) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;

        let command = match ConsoleCommand::parse(&line) {
            None => continue,
            Some(Ok(command)) => command,
            Some(Err(unknown)) => {
                writeln!(output, "unknown command: {unknown} ({HELP})")?;
                continue;
            }
        };

        debug!("Console command: {command:?}");

        match command {
            ConsoleCommand::Start => writeln!(output, "{}", bridge.start_server())?,
            ConsoleCommand::Stop => writeln!(output, "{}", bridge.stop_server())?,
            ConsoleCommand::Port => writeln!(output, "{}", bridge.get_server_port())?,
            ConsoleCommand::Status => writeln!(output, "{}", bridge.status())?,
            ConsoleCommand::Help => writeln!(output, "{HELP}")?,
            ConsoleCommand::Quit => break,
        }
        output.flush()?;
    }

    Ok(())
}
