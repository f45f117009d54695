// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::color::ColorMode;
use crate::config::{ByteOrderSetting, SearchConfig};
use crate::delimiter::WordSize;
use crate::pattern::Strategy;

/// Exact byte-pattern search with FJS and a word-aligned CRLFCRLF scanner
#[derive(Parser)]
#[command(name = "hayscan")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "HAYSCAN_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Find a byte pattern in files or stdin
    Find(FindArgs),
    /// Find the "\r\n\r\n" header terminator with the word-aligned scanner
    Delim(DelimArgs),
}

#[derive(clap::Args)]
pub struct FindArgs {
    /// Pattern to search for; accepts \r \n \t \0 \\ \xHH escapes
    pub pattern: String,

    /// Files to search ("-" or none for stdin)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Search strategy (overrides config)
    #[arg(long, value_enum)]
    pub strategy: Option<Strategy>,

    #[command(flatten)]
    pub report: ReportArgs,
}

#[derive(clap::Args)]
pub struct DelimArgs {
    /// Files to search ("-" or none for stdin)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Scanner word size in bytes: 2 or 4 (overrides config)
    #[arg(long, value_name = "BYTES", value_parser = parse_word_size)]
    pub word_size: Option<WordSize>,

    /// Byte order used to pack words (overrides config)
    #[arg(long, value_enum)]
    pub byte_order: Option<ByteOrderSetting>,

    #[command(flatten)]
    pub report: ReportArgs,
}

/// Output flags shared by both commands.
#[derive(clap::Args, Default)]
pub struct ReportArgs {
    /// Report every non-overlapping match, with line numbers
    #[arg(long)]
    pub all: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// When to color text output
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FindArgs {
    /// Apply command-line overrides on top of the config file.
    pub fn apply(&self, search: &mut SearchConfig) {
        if let Some(strategy) = self.strategy {
            search.strategy = strategy;
        }
    }
}

impl DelimArgs {
    /// Apply command-line overrides on top of the config file.
    pub fn apply(&self, search: &mut SearchConfig) {
        search.strategy = Strategy::Delimiter;
        if let Some(word_size) = self.word_size {
            search.word_size = word_size;
        }
        if let Some(byte_order) = self.byte_order {
            search.byte_order = byte_order;
        }
    }
}

fn parse_word_size(arg: &str) -> Result<WordSize, String> {
    let bytes: u8 = arg
        .parse()
        .map_err(|_| format!("`{arg}` is not a byte count"))?;
    WordSize::try_from(bytes).map_err(|n| format!("unsupported word size {n} (expected 2 or 4)"))
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
