// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! First match per input:
//! ```text
//! <path>:<offset>
//! ```
//! Every match (`--all`):
//! ```text
//! <path>:<line>:<offset>
//! ```
//! Inputs without a match print nothing.

use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::color::scheme;
use crate::pattern::LineMatch;
use crate::runner::InputResult;

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    out: W,
    show_lines: bool,
    matches_shown: usize,
}

impl TextFormatter<StandardStream> {
    /// Formatter writing to stdout.
    pub fn stdout(color_choice: ColorChoice, show_lines: bool) -> Self {
        Self::new(StandardStream::stdout(color_choice), show_lines)
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W, show_lines: bool) -> Self {
        Self {
            out,
            show_lines,
            matches_shown: 0,
        }
    }

    /// Write every match of one input.
    pub fn write_result(&mut self, result: &InputResult) -> std::io::Result<()> {
        let path = result.input.to_string();
        for m in &result.matches {
            self.write_match(&path, m)?;
            self.matches_shown += 1;
        }
        Ok(())
    }

    fn write_match(&mut self, path: &str, m: &LineMatch) -> std::io::Result<()> {
        self.out.set_color(&scheme::path())?;
        write!(self.out, "{}", path)?;
        self.out.reset()?;
        write!(self.out, ":")?;

        if self.show_lines {
            self.out.set_color(&scheme::line_number())?;
            write!(self.out, "{}", m.line)?;
            self.out.reset()?;
            write!(self.out, ":")?;
        }

        self.out.set_color(&scheme::offset())?;
        write!(self.out, "{}", m.offset)?;
        self.out.reset()?;
        writeln!(self.out)
    }

    /// Number of match rows written so far.
    pub fn matches_shown(&self) -> usize {
        self.matches_shown
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
