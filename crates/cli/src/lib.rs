pub mod cli;
pub mod color;
pub mod config;
pub mod delimiter;
pub mod discovery;
pub mod error;
pub mod escape;
pub mod output;
pub mod pattern;
pub mod reader;
pub mod runner;

pub use cli::{Cli, Command, DelimArgs, FindArgs, OutputFormat, ReportArgs};
pub use color::ColorMode;
pub use config::{Config, SearchConfig};
pub use delimiter::{ByteOrder, DELIMITER, DelimiterScanner, WordSize, find_delimiter};
pub use error::{Error, ExitCode, Result};
pub use pattern::{CompiledPattern, FjsSearcher, MAX_PATTERN_LEN, PatternError, Strategy};
pub use reader::{FileContent, FileReader};
pub use runner::{Input, InputResult, SearchRunner};

#[cfg(test)]
pub mod test_utils;
