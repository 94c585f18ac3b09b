//! Interactive confirmation prompt
//!
//! Uses dialoguer when stdin is a terminal and plain line input otherwise,
//! so answers can also be piped in.

use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::Input;
use diffsync_core::Prompt;

/// Asks the confirmation question on the controlling terminal.
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn ask(&mut self, question: &str) -> io::Result<String> {
        if io::stdin().is_terminal() {
            return Input::<String>::new()
                .with_prompt(question)
                .allow_empty(true)
                .interact_text()
                .map_err(|e| io::Error::other(e.to_string()));
        }

        let mut stdout = io::stdout();
        write!(stdout, "{question}: ")?;
        stdout.flush()?;
        read_answer(&mut io::stdin().lock())
    }
}

/// Declines without asking; used when no one can answer (JSON output).
pub struct DeclinePrompt;

impl Prompt for DeclinePrompt {
    fn ask(&mut self, _question: &str) -> io::Result<String> {
        Ok(String::new())
    }
}

/// Read one line; end of input counts as an empty answer.
fn read_answer(input: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}
