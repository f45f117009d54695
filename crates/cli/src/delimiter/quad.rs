// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Delimiter scan over 4-byte words.
//!
//! Any match either fills one word exactly or starts within the last three
//! bytes of a word, so the carried state only needs the previous word's
//! trailing bytes.

use super::word::{ByteOrder, Lane};
use super::{CR, DELIMITER, LF, Step, head_len};

const QUAD: usize = 4;

/// Longest delimiter prefix ending the bytes read so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuadState {
    /// No pending prefix.
    Empty,
    /// Ends with `\r`; next word must start `\n\r\n`.
    Cr,
    /// Ends with `\r\n`; next word must start `\r\n`.
    CrLf,
    /// Ends with `\r\n\r`; next word must start `\n`.
    CrLfCr,
}

impl QuadState {
    /// Classify the unaligned bytes read before the first whole word.
    pub fn from_head(head: &[u8]) -> Self {
        match head {
            [.., CR, LF, CR] => QuadState::CrLfCr,
            [.., CR, LF] => QuadState::CrLf,
            [.., CR] => QuadState::Cr,
            _ => QuadState::Empty,
        }
    }

    /// Feed one word: either confirm a match, reported as the number of bytes
    /// it starts before `word`, or hand over the state for the next word.
    pub fn step(self, word: u32, order: ByteOrder) -> Step<Self> {
        let whole = || (word == order.pack_quad(DELIMITER)).then_some(0);
        // A straddling match starts earlier, so it wins over a whole-word one.
        // After `CrLf` a whole-word match always straddles as well.
        let back = match self {
            QuadState::Empty => whole(),
            QuadState::Cr => order
                .starts_with(word, [LF, CR, LF, 0], 3)
                .then_some(1)
                .or_else(whole),
            QuadState::CrLf => order.starts_with(word, [CR, LF, 0, 0], 2).then_some(2),
            QuadState::CrLfCr => (order.lane(word, Lane::First) == LF)
                .then_some(3)
                .or_else(whole),
        };
        match back {
            Some(back) => Step::Match { back },
            None => Step::Next(next_state(word, order)),
        }
    }

    /// Check the final partial word, fewer than four bytes.
    pub fn finish(self, tail: &[u8]) -> Option<usize> {
        match (self, tail) {
            (QuadState::Cr, [LF, CR, LF, ..]) => Some(1),
            (QuadState::CrLf, [CR, LF, ..]) => Some(2),
            (QuadState::CrLfCr, [LF, ..]) => Some(3),
            _ => None,
        }
    }
}

/// State carried out of `word`, decided by its trailing bytes alone.
pub fn next_state(word: u32, order: ByteOrder) -> QuadState {
    let second = order.lane(word, Lane::Second);
    let third = order.lane(word, Lane::Third);
    match order.lane(word, Lane::Fourth) {
        CR if second == CR && third == LF => QuadState::CrLfCr,
        CR => QuadState::Cr,
        LF if third == CR => QuadState::CrLf,
        _ => QuadState::Empty,
    }
}

/// Offset of the first `\r\n\r\n` in `haystack`, reading 4-byte words packed
/// with `order`.
pub fn find(haystack: &[u8], order: ByteOrder) -> Option<usize> {
    if haystack.len() < DELIMITER.len() {
        return None;
    }

    let head = head_len(haystack, QUAD);
    let (head_bytes, body) = haystack.split_at(head);
    let mut state = QuadState::from_head(head_bytes);
    let mut start = head;

    let mut words = body.chunks_exact(QUAD);
    for chunk in &mut words {
        let word = order.pack_quad([chunk[0], chunk[1], chunk[2], chunk[3]]);
        match state.step(word, order) {
            Step::Match { back } => return Some(start - back),
            Step::Next(next) => state = next,
        }
        start += QUAD;
    }

    state.finish(words.remainder()).map(|back| start - back)
}

#[cfg(test)]
#[path = "quad_tests.rs"]
mod tests;
