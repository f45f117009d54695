// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Word-at-a-time scanner for the `\r\n\r\n` header terminator.
//!
//! The haystack is split into an unaligned head, a run of aligned words and a
//! short tail. A four-state automaton carries any delimiter prefix that ends
//! one word into the next, so matches straddling word boundaries are found
//! without re-reading bytes. Every read stays inside the slice.
//!
//! - [`quad`]: 4-byte words
//! - [`pair`]: 2-byte words
//! - [`word`]: explicit byte-order packing

pub mod pair;
pub mod quad;
pub mod word;

pub use word::{ByteOrder, Lane};

/// The delimiter both scanners look for.
pub const DELIMITER: [u8; 4] = *b"\r\n\r\n";

pub(crate) const CR: u8 = b'\r';
pub(crate) const LF: u8 = b'\n';

/// Number of bytes before the first `width`-aligned word, at most `len`.
pub(crate) fn head_len(haystack: &[u8], width: usize) -> usize {
    clamp_head(haystack.as_ptr().align_offset(width), width, haystack.len())
}

/// `align_offset` may report any value it cannot compute as `usize::MAX`;
/// such a head is treated as empty and every word is read unaligned.
fn clamp_head(offset: usize, width: usize, len: usize) -> usize {
    if offset < width { offset.min(len) } else { 0 }
}

/// Result of feeding one word to a scan automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<S> {
    /// Delimiter confirmed; it starts `back` bytes before the current word.
    Match { back: usize },
    /// No match yet; carry this state into the next word.
    Next(S),
}

/// Width of the words the scanner reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WordSize {
    /// 2-byte words.
    Pair,
    /// 4-byte words.
    #[default]
    Quad,
}

impl WordSize {
    /// Width in bytes.
    pub fn bytes(self) -> usize {
        match self {
            WordSize::Pair => 2,
            WordSize::Quad => 4,
        }
    }
}

impl TryFrom<u8> for WordSize {
    type Error = u8;

    fn try_from(bytes: u8) -> Result<Self, u8> {
        match bytes {
            2 => Ok(WordSize::Pair),
            4 => Ok(WordSize::Quad),
            other => Err(other),
        }
    }
}

/// Configured delimiter scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimiterScanner {
    word: WordSize,
    order: ByteOrder,
}

impl Default for DelimiterScanner {
    fn default() -> Self {
        Self::new(WordSize::Quad, ByteOrder::NATIVE)
    }
}

impl DelimiterScanner {
    pub fn new(word: WordSize, order: ByteOrder) -> Self {
        Self { word, order }
    }

    pub fn word_size(&self) -> WordSize {
        self.word
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.order
    }

    /// Offset of the first delimiter in `haystack`.
    pub fn find(&self, haystack: &[u8]) -> Option<usize> {
        match self.word {
            WordSize::Pair => pair::find(haystack, self.order),
            WordSize::Quad => quad::find(haystack, self.order),
        }
    }
}

/// Offset of the first `\r\n\r\n` in `haystack`, scanning native 4-byte words.
pub fn find_delimiter(haystack: &[u8]) -> Option<usize> {
    quad::find(haystack, ByteOrder::NATIVE)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
