// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Byte-order-explicit packing of stream bytes into words.
//!
//! Words are always built from individual bytes, never by reinterpreting a
//! byte pointer. Positions inside a word are named by stream order ([`Lane`]),
//! so callers never depend on which numeric bits hold which byte.

/// In-memory order used to pack stream bytes into a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// First stream byte in the least significant bits.
    Little,
    /// First stream byte in the most significant bits.
    Big,
}

impl ByteOrder {
    /// Byte order of the target platform.
    #[cfg(target_endian = "little")]
    pub const NATIVE: ByteOrder = ByteOrder::Little;
    /// Byte order of the target platform.
    #[cfg(target_endian = "big")]
    pub const NATIVE: ByteOrder = ByteOrder::Big;

    pub const fn pack_pair(self, bytes: [u8; 2]) -> u16 {
        match self {
            ByteOrder::Little => u16::from_le_bytes(bytes),
            ByteOrder::Big => u16::from_be_bytes(bytes),
        }
    }

    pub const fn unpack_pair(self, word: u16) -> [u8; 2] {
        match self {
            ByteOrder::Little => word.to_le_bytes(),
            ByteOrder::Big => word.to_be_bytes(),
        }
    }

    pub const fn pack_quad(self, bytes: [u8; 4]) -> u32 {
        match self {
            ByteOrder::Little => u32::from_le_bytes(bytes),
            ByteOrder::Big => u32::from_be_bytes(bytes),
        }
    }

    pub const fn unpack_quad(self, word: u32) -> [u8; 4] {
        match self {
            ByteOrder::Little => word.to_le_bytes(),
            ByteOrder::Big => word.to_be_bytes(),
        }
    }

    /// Byte of `word` at stream position `lane`.
    pub const fn lane(self, word: u32, lane: Lane) -> u8 {
        let index = lane as u32;
        let shift = match self {
            ByteOrder::Little => 8 * index,
            ByteOrder::Big => 8 * (3 - index),
        };
        (word >> shift) as u8
    }

    /// Mask covering the first `count` stream bytes of a quad word.
    pub const fn leading_mask(self, count: u32) -> u32 {
        if count == 0 {
            return 0;
        }
        if count >= 4 {
            return u32::MAX;
        }
        match self {
            ByteOrder::Little => u32::MAX >> (32 - 8 * count),
            ByteOrder::Big => u32::MAX << (32 - 8 * count),
        }
    }

    /// Whether the first `count` stream bytes of `word` equal `prefix`.
    pub const fn starts_with(self, word: u32, prefix: [u8; 4], count: u32) -> bool {
        let mask = self.leading_mask(count);
        (word & mask) == (self.pack_quad(prefix) & mask)
    }
}

/// Stream position of a byte inside a quad word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lane {
    First = 0,
    Second = 1,
    Third = 2,
    Fourth = 3,
}

#[cfg(test)]
#[path = "word_tests.rs"]
mod tests;
