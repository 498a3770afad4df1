//! Interactive line input.
//!
//! The confirmation prompts (category creation, moving tasks forward) go
//! through [`LineReader`] so the engines can be driven by scripted
//! answers in tests instead of a real terminal.

use std::io::{self, Write};

/// Capability to ask the user for one line of text.
pub trait LineReader {
    /// Print `prompt`, then block for a line of input. The returned line
    /// carries no trailing newline. End of input is an error rather than
    /// an empty answer, so confirmation loops terminate when stdin is
    /// closed.
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;
}

/// Reads from the process's stdin, echoing the prompt to stdout.
pub struct StdinLineReader;

impl LineReader for StdinLineReader {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        print!("{prompt}");
        io::stdout().flush()?;
        let mut line = String::new();
        let read = io::stdin().read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            ));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Feeds a fixed sequence of answers and records every prompt it was
/// asked. Running out of answers is an error, like a closed stdin.
#[cfg(test)]
pub struct ScriptedLineReader {
    answers: std::collections::VecDeque<String>,
    pub prompts: Vec<String>,
}

#[cfg(test)]
impl ScriptedLineReader {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedLineReader {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }
}

#[cfg(test)]
impl LineReader for ScriptedLineReader {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        self.prompts.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }
}
