// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Size-gated input reading.
//!
//! Inputs are read whole into a buffer; anything over the configured limit
//! (10 MiB by default) is rejected before it is buffered. Stdin has no size
//! up front, so it is read through a limit of `max_size + 1` bytes.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Size at which to log large inputs (1MB).
pub const LARGE_FILE_WARN: u64 = 1024 * 1024;

/// Maximum input size to read (10MB).
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Display name used for standard input.
pub const STDIN_NAME: &str = "<stdin>";

/// Input content with metadata.
#[derive(Debug)]
pub struct FileContent {
    /// The content as bytes.
    pub bytes: Vec<u8>,

    /// Size in bytes.
    pub size: u64,
}

/// Size-gated input reader.
#[derive(Debug, Clone, Copy)]
pub struct FileReader {
    max_size: u64,
}

impl Default for FileReader {
    fn default() -> Self {
        Self {
            max_size: MAX_FILE_SIZE,
        }
    }
}

impl FileReader {
    /// Create a new reader with the default limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader with custom max size.
    pub fn with_max_size(max_size: u64) -> Self {
        Self { max_size }
    }

    pub fn max_size(&self) -> u64 {
        self.max_size
    }

    /// Read a file, checking size limits.
    ///
    /// Returns `Err(FileTooLarge)` for files exceeding max_size.
    pub fn read(&self, path: &Path) -> Result<FileContent> {
        let metadata = std::fs::metadata(path).map_err(|e| io_error(path, e))?;
        let size = metadata.len();

        // Check size before reading
        if size > self.max_size {
            return Err(Error::FileTooLarge {
                path: path.to_path_buf(),
                size,
                max_size: self.max_size,
            });
        }

        if size > LARGE_FILE_WARN {
            tracing::info!(
                path = %path.display(),
                size_mb = size as f64 / 1_000_000.0,
                "Reading large file"
            );
        }

        let mut file = File::open(path).map_err(|e| io_error(path, e))?;
        let mut bytes = Vec::with_capacity(size as usize);
        file.read_to_end(&mut bytes).map_err(|e| io_error(path, e))?;

        Ok(FileContent {
            size: bytes.len() as u64,
            bytes,
        })
    }

    /// Read standard input to the end.
    pub fn read_stdin(&self) -> Result<FileContent> {
        self.read_from(Path::new(STDIN_NAME), std::io::stdin().lock())
    }

    /// Read an unsized stream, stopping one byte past the limit.
    ///
    /// `name` labels the stream in errors.
    pub fn read_from(&self, name: &Path, source: impl Read) -> Result<FileContent> {
        let mut bytes = Vec::new();
        source
            .take(self.max_size.saturating_add(1))
            .read_to_end(&mut bytes)
            .map_err(|e| io_error(name, e))?;

        let size = bytes.len() as u64;
        if size > self.max_size {
            return Err(Error::FileTooLarge {
                path: name.to_path_buf(),
                size,
                max_size: self.max_size,
            });
        }

        Ok(FileContent { bytes, size })
    }
}

fn io_error(path: &Path, source: std::io::Error) -> Error {
    Error::Io {
        path: PathBuf::from(path),
        source,
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
