// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Escape sequences in command-line patterns.
//!
//! Supported: `\r`, `\n`, `\t`, `\0`, `\\` and `\xHH`.

use crate::error::{Error, Result};

/// Decode a pattern argument into the bytes to search for.
pub fn unescape(input: &str) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(input.len());
    let mut bytes = input.bytes();

    while let Some(b) = bytes.next() {
        if b != b'\\' {
            out.push(b);
            continue;
        }
        let decoded = match bytes.next() {
            Some(b'r') => b'\r',
            Some(b'n') => b'\n',
            Some(b't') => b'\t',
            Some(b'0') => 0,
            Some(b'\\') => b'\\',
            Some(b'x') => {
                let hi = bytes.next().and_then(hex_digit);
                let lo = bytes.next().and_then(hex_digit);
                match (hi, lo) {
                    (Some(hi), Some(lo)) => (hi << 4) | lo,
                    _ => {
                        return Err(Error::Argument(format!(
                            "invalid escape in {input:?}: \\x needs two hex digits"
                        )));
                    }
                }
            }
            Some(other) => {
                return Err(Error::Argument(format!(
                    "invalid escape in {input:?}: \\{}",
                    char::from(other)
                )));
            }
            None => {
                return Err(Error::Argument(format!(
                    "invalid escape in {input:?}: trailing backslash"
                )));
            }
        };
        out.push(decoded);
    }

    Ok(out)
}

fn hex_digit(b: u8) -> Option<u8> {
    char::from(b).to_digit(16).map(|d| d as u8)
}

/// Render bytes with the same escapes [`unescape`] accepts.
pub fn escape(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &b in bytes {
        match b {
            b'\r' => out.push_str("\\r"),
            b'\n' => out.push_str("\\n"),
            b'\t' => out.push_str("\\t"),
            0 => out.push_str("\\0"),
            b'\\' => out.push_str("\\\\"),
            0x20..=0x7e => out.push(char::from(b)),
            _ => out.push_str(&format!("\\x{b:02x}")),
        }
    }
    out
}

#[cfg(test)]
#[path = "escape_tests.rs"]
mod tests;
