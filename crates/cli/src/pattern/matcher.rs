// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled pattern matchers with automatic strategy selection.

use memchr::memmem::Finder;
use serde::{Deserialize, Serialize};

use super::fjs::{FjsSearcher, MAX_PATTERN_LEN};
use crate::config::SearchConfig;
use crate::delimiter::{DELIMITER, DelimiterScanner};

/// Requested search strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Pick from the pattern.
    #[default]
    Auto,
    /// Franek-Jennings-Smyth searcher.
    Fjs,
    /// Word-aligned `\r\n\r\n` scanner.
    Delimiter,
    /// `memchr::memmem` baseline.
    Memmem,
}

/// A compiled pattern bound to one search strategy.
#[derive(Debug)]
pub enum CompiledPattern {
    /// Table-driven FJS search (patterns up to 255 bytes).
    Fjs(FjsSearcher),
    /// Word-aligned scan for `\r\n\r\n`.
    Delimiter(DelimiterScanner),
    /// SIMD substring search from memchr.
    Memmem(MemmemMatcher),
}

/// Matcher for arbitrary-length literals using memchr.
#[derive(Debug)]
pub struct MemmemMatcher {
    finder: Finder<'static>,
}

/// A match found in content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    /// Byte offset where match starts.
    pub start: usize,
    /// Byte offset where match ends.
    pub end: usize,
}

/// A match with resolved line number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineMatch {
    /// 1-based line number.
    pub line: u32,
    /// Byte offset where match starts.
    pub offset: usize,
    /// Byte offset where match ends.
    pub end: usize,
}

/// Error during pattern compilation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("pattern is empty")]
    Empty,

    #[error("pattern is {len} bytes, longest supported is {max}")]
    TooLong { len: usize, max: usize },

    #[error("delimiter strategy only matches \"\\r\\n\\r\\n\"")]
    NotDelimiter,
}

impl CompiledPattern {
    /// Compile a pattern for the configured strategy.
    ///
    /// With [`Strategy::Auto`]:
    /// - `\r\n\r\n` -> delimiter scanner
    /// - up to 255 bytes -> FJS
    /// - longer -> memmem
    pub fn compile(pattern: &[u8], config: &SearchConfig) -> Result<Self, PatternError> {
        let compiled = match config.strategy {
            Strategy::Auto if pattern == DELIMITER => CompiledPattern::Delimiter(config.scanner()),
            Strategy::Auto if pattern.len() > MAX_PATTERN_LEN => {
                CompiledPattern::Memmem(MemmemMatcher::new(pattern)?)
            }
            Strategy::Auto | Strategy::Fjs => CompiledPattern::Fjs(FjsSearcher::new(pattern)?),
            Strategy::Delimiter if pattern == DELIMITER => {
                CompiledPattern::Delimiter(config.scanner())
            }
            Strategy::Delimiter => return Err(PatternError::NotDelimiter),
            Strategy::Memmem => CompiledPattern::Memmem(MemmemMatcher::new(pattern)?),
        };

        tracing::debug!(
            strategy = compiled.name(),
            len = pattern.len(),
            "compiled pattern"
        );
        Ok(compiled)
    }

    /// Short strategy name for logs and reports.
    pub fn name(&self) -> &'static str {
        match self {
            CompiledPattern::Fjs(_) => "fjs",
            CompiledPattern::Delimiter(_) => "delimiter",
            CompiledPattern::Memmem(_) => "memmem",
        }
    }

    /// The pattern bytes.
    pub fn pattern(&self) -> &[u8] {
        match self {
            CompiledPattern::Fjs(s) => s.pattern(),
            CompiledPattern::Delimiter(_) => &DELIMITER,
            CompiledPattern::Memmem(m) => m.finder.needle(),
        }
    }

    /// Length of the pattern in bytes.
    pub fn pattern_len(&self) -> usize {
        self.pattern().len()
    }

    /// Offset of the first match.
    pub fn find(&self, haystack: &[u8]) -> Option<usize> {
        match self {
            CompiledPattern::Fjs(s) => s.find(haystack),
            CompiledPattern::Delimiter(s) => s.find(haystack),
            CompiledPattern::Memmem(m) => m.finder.find(haystack),
        }
    }

    /// Find all non-overlapping matches, left to right.
    pub fn find_all(&self, haystack: &[u8]) -> Vec<PatternMatch> {
        let len = self.pattern_len();
        let mut matches = Vec::new();
        let mut pos = 0;
        while let Some(found) = self.find(&haystack[pos..]) {
            let start = pos + found;
            pos = start + len;
            matches.push(PatternMatch { start, end: pos });
        }
        matches
    }

    /// Find all matches with line numbers.
    pub fn find_all_with_lines(&self, haystack: &[u8]) -> Vec<LineMatch> {
        self.find_all(haystack)
            .into_iter()
            .map(|m| LineMatch {
                line: byte_offset_to_line(haystack, m.start),
                offset: m.start,
                end: m.end,
            })
            .collect()
    }
}

impl MemmemMatcher {
    /// Create a new literal matcher.
    pub fn new(pattern: &[u8]) -> Result<Self, PatternError> {
        if pattern.is_empty() {
            return Err(PatternError::Empty);
        }
        Ok(Self {
            finder: Finder::new(pattern).into_owned(),
        })
    }
}

/// Convert byte offset to 1-based line number.
pub fn byte_offset_to_line(content: &[u8], offset: usize) -> u32 {
    memchr::memchr_iter(b'\n', &content[..offset]).count() as u32 + 1
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
