//! Line-oriented console over any reader/writer pair.
//!
//! The binary wires this to locked stdin/stdout; tests use in-memory buffers.

use std::error::Error;
use std::io::{self, BufRead, Write};

use colored::Colorize;

use enroll_core::Roster;

pub const MENU: &str = "\
---- Course Registration Program ----
  Select from the following menu:
    1. Register a Student for a Course
    2. Show current data
    3. Save data to a file
    4. Exit the program
-----------------------------------------";

const RULE_WIDTH: usize = 50;

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `label` and read one line with its line terminator removed.
    ///
    /// Returns `None` at end of input. Other whitespace is kept: callers
    /// decide whether to trim. Bytes that are not UTF-8 become U+FFFD, so a
    /// garbled line is rejected by validation instead of ending the session.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        if raw.last() == Some(&b'\n') {
            raw.pop();
            if raw.last() == Some(&b'\r') {
                raw.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&raw).into_owned()))
    }

    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    pub fn menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{MENU}")?;
        writeln!(self.output)
    }

    pub fn roster(&mut self, roster: &Roster) -> io::Result<()> {
        let rule = "-".repeat(RULE_WIDTH);
        writeln!(self.output, "{rule}")?;
        for record in roster {
            writeln!(self.output, "{record}")?;
        }
        writeln!(self.output, "{rule}")
    }

    /// Short message first, then the cause chain if there is one.
    pub fn error(&mut self, message: &str, cause: Option<&dyn Error>) -> io::Result<()> {
        writeln!(self.output, "{}", message.red().bold())?;
        writeln!(self.output)?;
        if let Some(err) = cause {
            writeln!(self.output, "-- Technical Error Message --")?;
            writeln!(self.output, "{err}")?;
            let mut source = err.source();
            while let Some(inner) = source {
                writeln!(self.output, "  caused by: {inner}")?;
                source = inner.source();
            }
        }
        Ok(())
    }
}
