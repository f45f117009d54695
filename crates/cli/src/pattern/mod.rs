// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Exact byte-pattern search.
//!
//! Strategy hierarchy:
//! - `\r\n\r\n`: word-aligned delimiter scanner
//! - Literal up to 255 bytes: FJS searcher
//! - Longer literal: memchr::memmem

pub mod fjs;
pub mod matcher;

pub use fjs::{FjsMatches, FjsSearcher, MAX_PATTERN_LEN};
pub use matcher::{
    CompiledPattern, LineMatch, MemmemMatcher, PatternError, PatternMatch, Strategy,
    byte_offset_to_line,
};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
