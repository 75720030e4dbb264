//! Validated integer input.
//!
//! [`Prompter`] asks for a number in a closed range and keeps asking until
//! it gets one. End of input is reported as `None` so callers can treat it
//! as a request to leave.

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::ops::RangeInclusive;
use tracing::debug;

/// Line-oriented prompt over any reader/writer pair.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
    line: String,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter reading answers from `input` and writing
    /// questions to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: String::new(),
        }
    }

    /// Writes one line of text.
    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Asks `question` until the answer is an integer inside `range`.
    ///
    /// Returns `Ok(None)` at end of input.
    ///
    /// # Errors
    ///
    /// Propagates read and write failures.
    pub fn ask_int(&mut self, question: &str, range: RangeInclusive<i64>) -> io::Result<Option<i64>> {
        loop {
            write!(self.output, "{question} [{}..{}]: ", range.start(), range.end())?;
            self.output.flush()?;

            self.line.clear();
            if self.input.read_line(&mut self.line)? == 0 {
                debug!(question, "end of input");
                return Ok(None);
            }

            let answer = self.line.trim();
            match answer.parse::<i64>() {
                Ok(value) if range.contains(&value) => return Ok(Some(value)),
                Ok(value) => writeln!(
                    self.output,
                    "{value} is out of range, choose a value between {} and {}",
                    range.start(),
                    range.end()
                )?,
                Err(_) => writeln!(self.output, "'{answer}' is not a whole number")?,
            }
        }
    }

    /// Returns the underlying reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}
