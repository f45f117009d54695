//! Behavioral specs for configuration.
//!
//! Tests that hayscan correctly handles:
//! - hayscan.toml discovery and validation
//! - HAYSCAN_CONFIG and -C/--config
//! - Command-line flags overriding config values

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// > Discovered config selects the strategy
#[test]
fn discovered_config_sets_strategy() {
    let temp = Project::empty();
    temp.config("[search]\nstrategy = \"memmem\"\n");
    temp.file("req.http", REQUEST);

    let output = temp
        .cmd()
        .args(["find", "-o", "json", "Host", "req.http"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["results"][0]["strategy"], "memmem");
}

/// > Config is discovered from a subdirectory up to the git root
#[test]
fn config_found_from_subdirectory() {
    let temp = Project::empty();
    temp.config("[input]\nmax_file_size = 8\n");
    temp.file("sub/dir/req.http", REQUEST);

    temp.cmd()
        .current_dir(temp.path().join("sub/dir"))
        .args(["delim", "req.http"])
        .assert()
        .code(3)
        .stderr(predicates::str::contains("file too large"));
}

/// > Command-line strategy overrides config
#[test]
fn flag_overrides_config() {
    let temp = Project::empty();
    temp.config("[search]\nstrategy = \"memmem\"\n");
    temp.file("req.http", REQUEST);

    let output = temp
        .cmd()
        .args(["find", "--strategy", "fjs", "-o", "json", "Host", "req.http"])
        .output()
        .unwrap();

    let json = stdout_json(&output);
    assert_eq!(json["results"][0]["strategy"], "fjs");
}

/// > HAYSCAN_CONFIG sets config file location
#[test]
fn env_config_sets_path() {
    let temp = Project::empty();
    temp.file(
        "custom.toml",
        "version = 1\n[search]\nword_size = 2\nbyte_order = \"big\"\n",
    );
    temp.file("req.http", REQUEST);

    temp.cmd()
        .args(["delim", "req.http"])
        .env("HAYSCAN_CONFIG", temp.path().join("custom.toml"))
        .assert()
        .success()
        .stdout("req.http:33\n");
}

/// > -C with a missing file is a config error
#[test]
fn missing_explicit_config_exits_two() {
    let temp = Project::empty();
    temp.file("req.http", REQUEST);

    temp.cmd()
        .args(["-C", "nope.toml", "delim", "req.http"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("config file not found"));
}

/// > Unsupported version is rejected
#[test]
fn unsupported_version_exits_two() {
    let temp = Project::empty();
    temp.config("version = 9\n");
    temp.file("req.http", REQUEST);

    temp.cmd()
        .args(["delim", "req.http"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported config version 9"));
}

/// > Unknown keys are rejected
#[test]
fn unknown_key_exits_two() {
    let temp = Project::empty();
    temp.config("[search]\nturbo = true\n");
    temp.file("req.http", REQUEST);

    temp.cmd()
        .args(["delim", "req.http"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("turbo"));
}
