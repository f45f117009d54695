// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written at the end (not streamed).

use std::io::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::escape::escape;
use crate::pattern::{CompiledPattern, LineMatch};
use crate::runner::InputResult;

/// Whole-run report.
#[derive(Debug, Serialize)]
pub struct SearchReport<'a> {
    /// Pattern with control bytes escaped.
    pub pattern: String,
    /// Whether any input matched.
    pub found: bool,
    pub results: Vec<InputReport<'a>>,
}

/// One input's outcome.
#[derive(Debug, Serialize)]
pub struct InputReport<'a> {
    pub path: String,
    pub strategy: &'static str,
    pub matches: &'a [LineMatch],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<'a> SearchReport<'a> {
    pub fn new(pattern: &CompiledPattern, results: &'a [Result<InputResult>]) -> Self {
        let strategy = pattern.name();
        let results: Vec<InputReport<'a>> = results
            .iter()
            .map(|r| match r {
                Ok(r) => InputReport {
                    path: r.input.to_string(),
                    strategy,
                    matches: &r.matches,
                    error: None,
                },
                Err(e) => InputReport {
                    path: error_path(e),
                    strategy,
                    matches: &[],
                    error: Some(e.to_string()),
                },
            })
            .collect();

        Self {
            pattern: escape(pattern.pattern()),
            found: results.iter().any(|r| !r.matches.is_empty()),
            results,
        }
    }
}

fn error_path(err: &Error) -> String {
    match err {
        Error::Io { path, .. } | Error::FileTooLarge { path, .. } => {
            path.display().to_string()
        }
        _ => String::new(),
    }
}

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the complete JSON output.
    pub fn write(&mut self, report: &SearchReport<'_>) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(report).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
