//! Console: line-oriented output with optional colour.

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::Write;

/// Writes prompts, messages and results to a terminal or any other writer.
///
/// Colour escapes are only emitted when enabled; piped output stays plain.
pub struct Console<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> Console<W> {
    /// Wrap a writer.
    pub const fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    /// Whether colour escapes are emitted.
    #[inline]
    pub const fn color(&self) -> bool {
        self.color
    }

    /// Write a plain line.
    pub fn line(&mut self, text: &str) -> std::io::Result<()> {
        writeln!(self.out, "{text}")
    }

    /// Write an empty line.
    pub fn blank(&mut self) -> std::io::Result<()> {
        writeln!(self.out)
    }

    /// Write a confirmation, followed by an empty line.
    pub fn success(&mut self, text: &str) -> std::io::Result<()> {
        self.colored(Color::Green, text)?;
        self.blank()
    }

    /// Write a problem report, followed by an empty line.
    pub fn error(&mut self, text: &str) -> std::io::Result<()> {
        self.colored(Color::Red, text)?;
        self.blank()
    }

    fn colored(&mut self, color: Color, text: &str) -> std::io::Result<()> {
        if self.color {
            queue!(self.out, SetForegroundColor(color), Print(text), ResetColor)?;
            writeln!(self.out)
        } else {
            self.line(text)
        }
    }

    /// Write areas space-separated on one line.
    pub fn areas(&mut self, areas: &[usize]) -> std::io::Result<()> {
        let text = areas
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        self.line(&text)
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> std::io::Result<()> {
        self.out.flush()
    }

    /// Unwrap the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}
