use crate::presentation::Style;
use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Line-oriented terminal: one reader, one writer, one style.
pub struct Console<R, W> {
    input: R,
    output: W,
    style: Style,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, style: Style) -> Self {
        Self {
            input,
            output,
            style,
        }
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn print(&mut self, view: impl Display) -> io::Result<()> {
        write!(self.output, "{}", view)
    }

    /// Read one line without its terminator. `None` once input is exhausted.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    pub fn output(&self) -> &W {
        &self.output
    }
}
