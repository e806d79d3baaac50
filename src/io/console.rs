//! Line-oriented console boundary.
//!
//! The engine only ever reads whole lines and writes whole lines. `Console`
//! is the seam; `LineConsole` implements it over any `BufRead` + `Write`
//! pair, so the terminal and scripted test input share one code path.

use std::io::{BufRead, Cursor, Stdin, StdinLock, Stdout, Write};

use tracing::debug;

use crate::error::{GameError, Result};

/// Source of input lines and sink for output lines.
pub trait Console {
    /// Read the next line with its line ending removed.
    ///
    /// Returns `Ok(None)` once the input is closed.
    fn read_line(&mut self) -> Result<Option<String>>;

    /// Write one line of output.
    fn write_line(&mut self, line: &str) -> Result<()>;
}

/// Prompt until `parse` accepts a line.
///
/// Every rejected line gets `rejection` printed back before the prompt is
/// repeated. There is no retry limit; the loop only ends early when input
/// runs out, which is reported as `GameError::InputExhausted`.
pub fn ask<T>(
    io: &mut dyn Console,
    prompt: &str,
    rejection: &str,
    mut parse: impl FnMut(&str) -> Option<T>,
) -> Result<T> {
    loop {
        io.write_line(prompt)?;
        let Some(line) = io.read_line()? else {
            return Err(GameError::InputExhausted {
                prompt: prompt.to_string(),
            });
        };
        if let Some(value) = parse(&line) {
            return Ok(value);
        }
        debug!(input = %line, "rejected input");
        io.write_line(rejection)?;
    }
}

/// `Console` over a buffered reader and a writer.
pub struct LineConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl LineConsole<StdinLock<'static>, Stdout> {
    /// Console on the process's stdin and stdout.
    pub fn stdio() -> Self {
        let stdin: Stdin = std::io::stdin();
        Self::new(stdin.lock(), std::io::stdout())
    }
}

impl LineConsole<Cursor<Vec<u8>>, Vec<u8>> {
    /// Console that replays `input` and captures output in memory.
    pub fn scripted(input: &str) -> Self {
        Self::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    /// Captured output as text.
    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.writer).into_owned()
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    /// Bytes that are not UTF-8 become U+FFFD, so they reach the caller's
    /// parser and get rejected like any other bad answer.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let text = String::from_utf8_lossy(&buf);
        let line = text.trim_end_matches(&['\r', '\n'][..]);
        Ok(Some(line.to_string()))
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()?;
        Ok(())
    }
}
