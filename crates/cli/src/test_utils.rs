// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Haystack generators shared by the unit tests and `benches/search.rs`.
//!
//! Each returns a buffer whose only `\r\n\r\n` is its last four bytes.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

/// Lines of printable ASCII of growing width, each ending in `\r\n`.
pub fn input_regular(size: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(size + 4);
    let mut line = 10;
    let mut c = b' ';
    while out.len() < size {
        out.push(c);
        c = if c == b'~' { b' ' } else { c + 1 };
        if out.len() % line == 0 {
            out.extend_from_slice(b"\r\n");
            line += 1;
        }
    }
    if out.ends_with(b"\n") {
        out.extend_from_slice(b"\r\n");
    } else {
        out.extend_from_slice(b"\r\n\r\n");
    }
    out
}

/// Repeated `\r\r\r\n` blocks: every word holds a delimiter prefix.
pub fn input_worst(size: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(size + 5);
    while out.len() < size {
        out.extend_from_slice(b"\r\r\r\n");
    }
    out.extend_from_slice(b"\n\r\n\r\n");
    out
}

/// No delimiter bytes at all until the end.
pub fn input_best(size: usize) -> Vec<u8> {
    let mut out = vec![b'.'; size];
    out.extend_from_slice(b"\r\n\r\n");
    out
}
