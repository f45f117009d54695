// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Franek-Jennings-Smyth exact matcher.
//!
//! Two tables are compiled once per pattern:
//! - `betap`: KMP failure links with the optimized-mismatch rule, so a resumed
//!   comparison never retries a byte already known to fail.
//! - `delta`: Sunday-style shift keyed on the byte just past the current
//!   window, used while hunting for the pattern's last byte.
//!
//! The search alternates between a skip loop on the last byte and a forward
//! KMP verification, which keeps the average case sub-linear and the worst
//! case linear in the haystack length.

use super::PatternError;

/// Longest pattern the searcher accepts.
pub const MAX_PATTERN_LEN: usize = 255;

/// Compiled FJS searcher for a single pattern.
///
/// All storage is inline; searching never allocates.
#[derive(Clone)]
pub struct FjsSearcher {
    needle: [u8; MAX_PATTERN_LEN],
    len: usize,
    betap: [i16; MAX_PATTERN_LEN + 1],
    delta: [u16; 256],
}

impl FjsSearcher {
    /// Compile `pattern`.
    ///
    /// Fails for an empty pattern or one longer than [`MAX_PATTERN_LEN`].
    pub fn new(pattern: &[u8]) -> Result<Self, PatternError> {
        let len = pattern.len();
        if len == 0 {
            return Err(PatternError::Empty);
        }
        if len > MAX_PATTERN_LEN {
            return Err(PatternError::TooLong {
                len,
                max: MAX_PATTERN_LEN,
            });
        }

        let mut needle = [0u8; MAX_PATTERN_LEN];
        needle[..len].copy_from_slice(pattern);

        tracing::debug!(len, "compiled fjs tables");

        Ok(Self {
            needle,
            len,
            betap: failure_table(pattern),
            delta: shift_table(pattern),
        })
    }

    /// The compiled pattern.
    pub fn pattern(&self) -> &[u8] {
        &self.needle[..self.len]
    }

    /// Pattern length in bytes (always at least 1).
    pub fn pattern_len(&self) -> usize {
        self.len
    }

    /// Failure links, indexed `0..=pattern_len()`.
    pub fn failure_table(&self) -> &[i16] {
        &self.betap[..=self.len]
    }

    /// Distance the window may advance when `byte` follows it.
    pub fn shift(&self, byte: u8) -> usize {
        usize::from(self.delta[usize::from(byte)])
    }

    /// Offset of the first occurrence of the pattern in `haystack`.
    pub fn find(&self, haystack: &[u8]) -> Option<usize> {
        let needle = self.pattern();
        let m = self.len;
        let n = haystack.len();
        if n < m {
            return None;
        }

        let last = m - 1;
        let back = needle[last];

        // `i` is the haystack byte compared against `needle[j]`; `ip` is the
        // haystack byte under the pattern's last byte for the current window.
        let mut i = 0usize;
        let mut j: isize = 0;
        let mut ip = last;

        while ip < n {
            if j <= 0 {
                while haystack[ip] != back {
                    let next = ip + 1;
                    if next >= n {
                        return None;
                    }
                    ip += self.shift(haystack[next]);
                    if ip >= n {
                        return None;
                    }
                }

                i = ip - last;
                let mut k = 0usize;
                while k < last && haystack[i] == needle[k] {
                    i += 1;
                    k += 1;
                }
                if k == last {
                    return Some(i - last);
                }
                if k == 0 {
                    i += 1;
                    j = 0;
                } else {
                    j = isize::from(self.betap[k]);
                }
            } else {
                let mut k = j.unsigned_abs();
                while k < m && haystack[i] == needle[k] {
                    i += 1;
                    k += 1;
                }
                if k == m {
                    return Some(i - m);
                }
                j = isize::from(self.betap[k]);
            }

            ip = match usize::try_from(j) {
                Ok(matched) => i + last - matched,
                Err(_) => i + last + 1,
            };
        }

        None
    }

    /// Offset of the first occurrence at or after `start`.
    pub fn find_at(&self, haystack: &[u8], start: usize) -> Option<usize> {
        let rest = haystack.get(start..)?;
        self.find(rest).map(|pos| pos + start)
    }

    /// Iterate over every occurrence, overlapping ones included.
    pub fn find_iter<'s, 'h>(&'s self, haystack: &'h [u8]) -> FjsMatches<'s, 'h> {
        FjsMatches {
            searcher: self,
            haystack,
            pos: 0,
        }
    }
}

impl std::fmt::Debug for FjsSearcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FjsSearcher")
            .field("pattern", &self.pattern())
            .field("betap", &self.failure_table())
            .finish_non_exhaustive()
    }
}

/// Iterator over match offsets, see [`FjsSearcher::find_iter`].
#[derive(Debug)]
pub struct FjsMatches<'s, 'h> {
    searcher: &'s FjsSearcher,
    haystack: &'h [u8],
    pos: usize,
}

impl Iterator for FjsMatches<'_, '_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let found = self.searcher.find_at(self.haystack, self.pos)?;
        self.pos = found + 1;
        Some(found)
    }
}

/// Build the failure links.
///
/// `betap[0]` is -1. When the byte compared after falling back to `j` equals
/// the byte at `j` itself, the link is copied from `betap[j]` so that the
/// searcher skips a comparison bound to fail again.
fn failure_table(pattern: &[u8]) -> [i16; MAX_PATTERN_LEN + 1] {
    let m = pattern.len();
    let mut betap = [0i16; MAX_PATTERN_LEN + 1];
    betap[0] = -1;

    let mut j: i16 = -1;
    let mut i = 0usize;
    while i < m {
        while j > -1 && pattern[i] != pattern[j.unsigned_abs() as usize] {
            j = betap[j.unsigned_abs() as usize];
        }
        i += 1;
        j += 1;
        let k = j.unsigned_abs() as usize;
        betap[i] = if i < m && pattern[i] == pattern[k] {
            betap[k]
        } else {
            j
        };
    }
    betap
}

/// Build the shift table: `len + 1` for absent bytes, otherwise the distance
/// from the byte's right-most occurrence to one past the pattern end.
fn shift_table(pattern: &[u8]) -> [u16; 256] {
    let m = pattern.len();
    let mut delta = [(m + 1) as u16; 256];
    for (i, &byte) in pattern.iter().enumerate() {
        delta[usize::from(byte)] = (m - i) as u16;
    }
    delta
}

#[cfg(test)]
#[path = "fjs_tests.rs"]
mod tests;
