// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Find and delim command implementation.

use std::io::Write;

use hayscan::cli::{Cli, DelimArgs, FindArgs, OutputFormat, ReportArgs};
use hayscan::config::Config;
use hayscan::delimiter::DELIMITER;
use hayscan::discovery;
use hayscan::error::{ExitCode, Result};
use hayscan::escape::unescape;
use hayscan::output::json::SearchReport;
use hayscan::output::{JsonFormatter, TextFormatter};
use hayscan::pattern::CompiledPattern;
use hayscan::reader::FileReader;
use hayscan::runner::{Input, InputResult, RunnerConfig, SearchRunner, any_found};

/// Run the find command.
pub fn find(cli: &Cli, args: &FindArgs) -> anyhow::Result<ExitCode> {
    let mut config = load_config(cli)?;
    args.apply(&mut config.search);

    let pattern = unescape(&args.pattern)?;
    let compiled =
        CompiledPattern::compile(&pattern, &config.search).map_err(hayscan::Error::from)?;
    search(&compiled, &config, &Input::from_args(&args.paths), &args.report)
}

/// Run the delim command.
pub fn delim(cli: &Cli, args: &DelimArgs) -> anyhow::Result<ExitCode> {
    let mut config = load_config(cli)?;
    args.apply(&mut config.search);

    let compiled =
        CompiledPattern::compile(&DELIMITER, &config.search).map_err(hayscan::Error::from)?;
    search(&compiled, &config, &Input::from_args(&args.paths), &args.report)
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let cwd = std::env::current_dir()?;
    Ok(discovery::load_config(cli.config.as_deref(), &cwd)?)
}

fn search(
    pattern: &CompiledPattern,
    config: &Config,
    inputs: &[Input],
    report: &ReportArgs,
) -> anyhow::Result<ExitCode> {
    tracing::debug!(strategy = pattern.name(), inputs = inputs.len(), "searching");

    let runner_config = RunnerConfig {
        all: report.all,
        reader: FileReader::with_max_size(config.input.max_file_size),
    };
    let results = SearchRunner::new(pattern, runner_config).run(inputs);

    match report.output {
        OutputFormat::Text => write_text(&results, report)?,
        OutputFormat::Json => {
            let stdout = std::io::stdout();
            let mut formatter = JsonFormatter::new(stdout.lock());
            formatter.write(&SearchReport::new(pattern, &results))?;
        }
    }

    Ok(exit_code(&results))
}

fn write_text(results: &[Result<InputResult>], report: &ReportArgs) -> std::io::Result<()> {
    let mut formatter = TextFormatter::stdout(report.color.resolve(), report.all);
    for result in results {
        match result {
            Ok(result) => formatter.write_result(result)?,
            Err(e) => {
                formatter.flush()?;
                eprintln!("hayscan: {}", e);
            }
        }
    }
    formatter.flush()?;
    std::io::stderr().flush()
}

/// Read errors win over matches; otherwise found or not found.
fn exit_code(results: &[Result<InputResult>]) -> ExitCode {
    if let Some(err) = results.iter().find_map(|r| r.as_ref().err()) {
        return ExitCode::from(err);
    }
    if any_found(results) {
        ExitCode::Success
    } else {
        ExitCode::NotFound
    }
}
