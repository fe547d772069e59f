//! Line-based terminal input and output
//!
//! Wraps any reader/writer pair so the session can run against stdin/stdout
//! or against in-memory buffers in tests.

use std::io::{BufRead, Write};

use crate::error::TrackerResult;

/// Prompt-and-read helper over a line reader and a writer
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` without a newline and read one line
    ///
    /// Only the line terminator is removed. Bytes that are not valid UTF-8
    /// are replaced rather than rejected. Returns `None` once input is closed.
    pub fn prompt(&mut self, prompt: &str) -> TrackerResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            // Keep whatever follows off the prompt line
            writeln!(self.output)?;
            return Ok(None);
        }

        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }

        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    /// Print a line
    pub fn say(&mut self, message: &str) -> TrackerResult<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Print preformatted text as-is
    pub fn write(&mut self, text: &str) -> TrackerResult<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }
}
