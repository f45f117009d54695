// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Delimiter scan over 2-byte words.
//!
//! A match spans two or three words, so the carried prefix can be up to three
//! bytes long and the transition depends on the incoming state.

use super::word::ByteOrder;
use super::{CR, DELIMITER, LF, Step, head_len};

const PAIR: usize = 2;

/// Longest delimiter prefix ending the bytes read so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairState {
    /// No pending prefix.
    Empty,
    /// Ends with `\r`.
    Cr,
    /// Ends with `\r\n`; next word must be `\r\n`.
    CrLf,
    /// Ends with `\r\n\r`; next word must start `\n`.
    CrLfCr,
}

impl PairState {
    /// Classify the unaligned byte read before the first whole word.
    pub fn from_head(head: &[u8]) -> Self {
        match head {
            [.., CR, LF, CR] => PairState::CrLfCr,
            [.., CR, LF] => PairState::CrLf,
            [.., CR] => PairState::Cr,
            _ => PairState::Empty,
        }
    }

    fn ends_with_cr(self) -> bool {
        matches!(self, PairState::Cr | PairState::CrLfCr)
    }

    /// Feed one word; see [`super::quad::QuadState::step`].
    pub fn step(self, word: u16, order: ByteOrder) -> Step<Self> {
        let crlf = order.pack_pair([CR, LF]);
        let [first, second] = order.unpack_pair(word);

        match self {
            PairState::CrLf if word == crlf => return Step::Match { back: 2 },
            PairState::CrLfCr if first == LF => return Step::Match { back: 3 },
            _ => {}
        }

        let next = if word == crlf {
            PairState::CrLf
        } else if word == order.pack_pair([LF, CR]) && self.ends_with_cr() {
            PairState::CrLfCr
        } else if second == CR {
            PairState::Cr
        } else {
            PairState::Empty
        };
        Step::Next(next)
    }

    /// Check the final odd byte, if any.
    pub fn finish(self, tail: &[u8]) -> Option<usize> {
        match (self, tail) {
            (PairState::CrLfCr, [LF, ..]) => Some(3),
            _ => None,
        }
    }
}

/// Offset of the first `\r\n\r\n` in `haystack`, reading 2-byte words packed
/// with `order`.
pub fn find(haystack: &[u8], order: ByteOrder) -> Option<usize> {
    if haystack.len() < DELIMITER.len() {
        return None;
    }

    let head = head_len(haystack, PAIR);
    let (head_bytes, body) = haystack.split_at(head);
    let mut state = PairState::from_head(head_bytes);
    let mut start = head;

    let mut words = body.chunks_exact(PAIR);
    for chunk in &mut words {
        let word = order.pack_pair([chunk[0], chunk[1]]);
        match state.step(word, order) {
            Step::Match { back } => return Some(start - back),
            Step::Next(next) => state = next,
        }
        start += PAIR;
    }

    state.finish(words.remainder()).map(|back| start - back)
}

#[cfg(test)]
#[path = "pair_tests.rs"]
mod tests;
