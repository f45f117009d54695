// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parallel search runner with per-input error isolation.
//!
//! Inputs are read and searched in parallel using rayon. A read failure on
//! one input is kept in that input's slot so the others still run, and
//! results come back in input order.

use std::fmt;
use std::path::PathBuf;

use rayon::prelude::*;

use crate::error::Result;
use crate::pattern::{CompiledPattern, LineMatch, byte_offset_to_line};
use crate::reader::{FileReader, STDIN_NAME};

/// A single input to search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Standard input.
    Stdin,
    /// A file on disk.
    Path(PathBuf),
}

impl Input {
    /// Inputs for command-line paths; none means stdin, `-` names stdin.
    pub fn from_args(paths: &[PathBuf]) -> Vec<Input> {
        if paths.is_empty() {
            return vec![Input::Stdin];
        }
        paths
            .iter()
            .map(|p| {
                if p.as_os_str() == "-" {
                    Input::Stdin
                } else {
                    Input::Path(p.clone())
                }
            })
            .collect()
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Stdin => f.write_str(STDIN_NAME),
            Input::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Matches found in one input.
#[derive(Debug)]
pub struct InputResult {
    pub input: Input,
    /// Matches in offset order; at most one unless `all` was requested.
    pub matches: Vec<LineMatch>,
}

/// Runner settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunnerConfig {
    /// Report every non-overlapping match instead of the first.
    pub all: bool,
    /// Input size limit.
    pub reader: FileReader,
}

/// Searches inputs for one compiled pattern.
pub struct SearchRunner<'a> {
    pattern: &'a CompiledPattern,
    config: RunnerConfig,
}

impl<'a> SearchRunner<'a> {
    pub fn new(pattern: &'a CompiledPattern, config: RunnerConfig) -> Self {
        Self { pattern, config }
    }

    /// Search every input, in parallel, returning results in input order.
    pub fn run(&self, inputs: &[Input]) -> Vec<Result<InputResult>> {
        inputs.par_iter().map(|input| self.search(input)).collect()
    }

    /// Read and search one input.
    pub fn search(&self, input: &Input) -> Result<InputResult> {
        let content = match input {
            Input::Stdin => self.config.reader.read_stdin()?,
            Input::Path(path) => self.config.reader.read(path)?,
        };
        tracing::trace!(%input, size = content.size, "searching");

        Ok(InputResult {
            input: input.clone(),
            matches: self.search_bytes(&content.bytes),
        })
    }

    /// Search an in-memory buffer.
    pub fn search_bytes(&self, haystack: &[u8]) -> Vec<LineMatch> {
        if self.config.all {
            return self.pattern.find_all_with_lines(haystack);
        }
        self.pattern
            .find(haystack)
            .map(|offset| LineMatch {
                line: byte_offset_to_line(haystack, offset),
                offset,
                end: offset + self.pattern.pattern_len(),
            })
            .into_iter()
            .collect()
    }

    pub fn pattern(&self) -> &CompiledPattern {
        self.pattern
    }
}

/// Whether any successful result holds a match.
pub fn any_found(results: &[Result<InputResult>]) -> bool {
    results
        .iter()
        .any(|r| r.as_ref().is_ok_and(|r| !r.matches.is_empty()))
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
