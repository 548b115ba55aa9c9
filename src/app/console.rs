//! Line-based console I/O.
//!
//! The router talks to the user only through [`Console`]: it writes whole
//! lines and blocks for one line of input at a time. [`StdConsole`] is the real
//! terminal; [`ScriptedConsole`] replays canned input and records everything
//! written, for tests and non-interactive runs.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Source of input lines and sink for output lines.
pub trait Console {
    /// Writes one line of output.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Shows `prompt` and blocks for one line of input.
    ///
    /// The trailing line ending is stripped. Returns `Ok(None)` once input is
    /// exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Writes several lines in order.
    ///
    /// # Errors
    ///
    /// Returns the first write error.
    fn write_lines(&mut self, lines: &[String]) -> io::Result<()> {
        lines.iter().try_for_each(|line| self.write_line(line))
    }
}

/// Console bound to the process's stdin and stdout.
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}")
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        {
            let mut out = io::stdout().lock();
            write!(out, "{prompt}")?;
            out.flush()?;
        }

        let mut buf = String::new();
        if io::stdin().lock().read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(trim_line_ending(buf)))
    }
}

fn trim_line_ending(mut line: String) -> String {
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    line
}

/// Console that replays a fixed list of input lines.
///
/// Prompts and output are captured in order so a whole session can be
/// inspected afterwards.
///
/// # Example
///
/// ```
/// use bookshelf::app::{Console, ScriptedConsole};
///
/// let mut console = ScriptedConsole::new(["c", "q"]);
/// assert_eq!(console.read_line("> ").unwrap().as_deref(), Some("c"));
/// console.write_line("hello").unwrap();
/// assert_eq!(console.output(), ["> c", "hello"]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    /// Input lines not consumed yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }

    /// Everything written so far; prompts are recorded with the answer typed.
    #[must_use]
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Output joined with newlines.
    #[must_use]
    pub fn transcript(&self) -> String {
        self.output.join("\n")
    }
}

impl Console for ScriptedConsole {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.output.push(line.to_string());
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let line = self.inputs.pop_front();
        match &line {
            Some(input) => self.output.push(format!("{prompt}{input}")),
            None => self.output.push(prompt.to_string()),
        }
        Ok(line)
    }
}
