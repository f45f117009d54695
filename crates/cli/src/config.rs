// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles hayscan.toml parsing with version validation. Unknown keys are
//! rejected rather than ignored.

use std::path::Path;

use serde::{Deserialize, Deserializer};

use crate::delimiter::{ByteOrder, DelimiterScanner, WordSize};
use crate::error::{Error, Result};
use crate::pattern::Strategy;
use crate::reader::MAX_FILE_SIZE;

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Full configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Search strategy settings.
    #[serde(default)]
    pub search: SearchConfig,

    /// Input reading settings.
    #[serde(default)]
    pub input: InputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: SUPPORTED_VERSION,
            search: SearchConfig::default(),
            input: InputConfig::default(),
        }
    }
}

/// How patterns are compiled and delimiters scanned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    /// Search strategy (default: auto).
    #[serde(default)]
    pub strategy: Strategy,

    /// Delimiter scanner word width in bytes: 2 or 4 (default: 4).
    #[serde(default, deserialize_with = "deserialize_word_size")]
    pub word_size: WordSize,

    /// Delimiter scanner byte order (default: native).
    #[serde(default)]
    pub byte_order: ByteOrderSetting,
}

impl SearchConfig {
    /// Delimiter scanner for these settings.
    pub fn scanner(&self) -> DelimiterScanner {
        DelimiterScanner::new(self.word_size, self.byte_order.resolve())
    }
}

/// Byte order as written in config or on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrderSetting {
    /// Byte order of the running platform.
    #[default]
    Native,
    Little,
    Big,
}

impl ByteOrderSetting {
    pub fn resolve(self) -> ByteOrder {
        match self {
            ByteOrderSetting::Native => ByteOrder::NATIVE,
            ByteOrderSetting::Little => ByteOrder::Little,
            ByteOrderSetting::Big => ByteOrder::Big,
        }
    }
}

/// Input reading limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    /// Largest input read, in bytes (default: 10 MiB).
    #[serde(default = "InputConfig::default_max_file_size")]
    pub max_file_size: u64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_file_size: Self::default_max_file_size(),
        }
    }
}

impl InputConfig {
    fn default_max_file_size() -> u64 {
        MAX_FILE_SIZE
    }
}

fn deserialize_word_size<'de, D>(deserializer: D) -> std::result::Result<WordSize, D::Error>
where
    D: Deserializer<'de>,
{
    let bytes = u8::deserialize(deserializer)?;
    WordSize::try_from(bytes).map_err(|n| {
        serde::de::Error::custom(format!("unsupported word_size {n} (expected 2 or 4)"))
    })
}

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Load and validate config from a file path.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Parse config from string content.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    // Version first, so an unsupported file is reported as such
    let version_check: VersionOnly = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    let version = version_check.version.ok_or_else(|| Error::Config {
        message: "missing required field: version".to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})\n  Upgrade hayscan to use this config.",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }

    let config: Config = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    tracing::debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
