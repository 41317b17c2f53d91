//! Line-oriented prompting over any reader/writer pair.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Printed when a numeric prompt gets something it cannot parse.
pub const INVALID_NUMBER: &str = "Invalid number, please try again.";

/// Reads answers to prompts, one line each.
///
/// Every read returns `Ok(None)` once input is exhausted; callers treat that as a
/// request to stop. Bytes that are not UTF-8 are replaced rather than failing the
/// read, so a garbled line is just another invalid answer.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
    line: Vec<u8>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: Vec::new(),
        }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `prompt` and read one line without its line terminator.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        self.line.clear();
        if self.input.read_until(b'\n', &mut self.line)? == 0 {
            return Ok(None);
        }
        let answer = String::from_utf8_lossy(&self.line);
        Ok(Some(answer.trim_end_matches(['\n', '\r']).to_string()))
    }

    /// Ask until the answer parses as `T`, re-prompting after each bad answer.
    pub fn ask_parsed<T: FromStr>(&mut self, prompt: &str) -> io::Result<Option<T>> {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };
            match answer.trim().parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => {
                    tracing::debug!(answer = %answer, "rejected numeric input");
                    writeln!(self.output, "{INVALID_NUMBER}")?;
                }
            }
        }
    }
}
