//! Behavioral specs for output formats.
//!
//! Tests that hayscan correctly handles:
//! - JSON output shape
//! - NO_COLOR / COLOR and --color

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// > JSON output has pattern, found and per-input results
#[test]
fn json_output_shape() {
    let temp = Project::empty();
    temp.file("req.http", REQUEST);
    temp.file("none.txt", "plain");

    let output = temp
        .cmd()
        .args(["delim", "-o", "json", "req.http", "none.txt"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["pattern"], "\\r\\n\\r\\n");
    assert_eq!(json["found"], true);

    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["path"], "req.http");
    assert_eq!(results[0]["strategy"], "delimiter");
    assert_eq!(results[0]["matches"][0]["offset"], 33);
    assert_eq!(results[0]["matches"][0]["end"], 37);
    assert_eq!(results[0]["matches"][0]["line"], 2);
    assert_eq!(results[1]["path"], "none.txt");
    assert!(results[1]["matches"].as_array().unwrap().is_empty());
}

/// > JSON output reports unreadable inputs in place
#[test]
fn json_output_includes_errors() {
    let temp = Project::empty();

    let output = temp
        .cmd()
        .args(["find", "-o", "json", "x", "missing.txt"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let json = stdout_json(&output);
    assert_eq!(json["found"], false);
    assert_eq!(json["results"][0]["path"], "missing.txt");
    assert!(json["results"][0]["error"].is_string());
}

/// > NO_COLOR disables color output
#[test]
fn env_no_color_disables_color() {
    let temp = Project::empty();
    temp.file("req.http", REQUEST);

    temp.cmd()
        .args(["delim", "req.http"])
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicates::str::contains("\x1b[").not());
}

/// > COLOR forces color output
#[test]
fn env_color_forces_color() {
    let temp = Project::empty();
    temp.file("req.http", REQUEST);

    temp.cmd()
        .args(["delim", "req.http"])
        .env("COLOR", "1")
        .assert()
        .success()
        .stdout(predicates::str::contains("\x1b["));
}

/// > --color never wins over COLOR
#[test]
fn color_flag_overrides_env() {
    let temp = Project::empty();
    temp.file("req.http", REQUEST);

    temp.cmd()
        .args(["delim", "--color", "never", "req.http"])
        .env("COLOR", "1")
        .assert()
        .success()
        .stdout("req.http:33\n");
}
