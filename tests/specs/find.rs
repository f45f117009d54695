//! Behavioral specs for `hayscan find`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// > find prints path:offset of the first match
#[test]
fn prints_first_match_offset() {
    let temp = Project::empty();
    temp.file("req.http", REQUEST);

    temp.cmd()
        .args(["find", "Host", "req.http"])
        .assert()
        .success()
        .stdout("req.http:16\n");
}

/// > Patterns accept \r \n escapes
#[test]
fn escaped_pattern_matches_control_bytes() {
    let temp = Project::empty();
    temp.file("req.http", REQUEST);

    temp.cmd()
        .args(["find", "\\r\\n\\r\\n", "req.http"])
        .assert()
        .success()
        .stdout("req.http:33\n");
}

/// > --all reports every non-overlapping match as path:line:offset
#[test]
fn all_reports_every_match_with_line() {
    let temp = Project::empty();
    temp.file("log.txt", "ab\nab\nxab");

    temp.cmd()
        .args(["find", "--all", "ab", "log.txt"])
        .assert()
        .success()
        .stdout("log.txt:1:0\nlog.txt:2:3\nlog.txt:3:7\n");
}

/// > Without paths, stdin is searched
#[test]
fn reads_stdin_without_paths() {
    let temp = Project::empty();
    with_stdin(temp.cmd(), "xxneedlexx")
        .args(["find", "needle"])
        .assert()
        .success()
        .stdout("<stdin>:2\n");
}

/// > Multiple inputs are reported in argument order
#[test]
fn reports_inputs_in_order() {
    let temp = Project::empty();
    for (i, body) in ["..x", "x", "no", "....x"].iter().enumerate() {
        temp.file(format!("{i}.txt"), body);
    }

    temp.cmd()
        .args(["find", "x", "3.txt", "2.txt", "1.txt", "0.txt"])
        .assert()
        .success()
        .stdout("3.txt:4\n1.txt:0\n0.txt:2\n");
}

/// > Every strategy reports the same offset
#[test]
fn strategies_agree() {
    let temp = Project::empty();
    temp.file("req.http", REQUEST);

    for strategy in ["auto", "fjs", "delimiter", "memmem"] {
        temp.cmd()
            .args(["find", "--strategy", strategy, "\\r\\n\\r\\n", "req.http"])
            .assert()
            .success()
            .stdout("req.http:33\n");
    }
}

/// > An empty pattern is a configuration error
#[test]
fn empty_pattern_exits_two() {
    let temp = Project::empty();
    temp.file("a.txt", "abc");

    temp.cmd()
        .args(["find", "", "a.txt"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("pattern is empty"));
}

/// > Explicit fjs rejects patterns over 255 bytes; auto falls back to memmem
#[test]
fn long_pattern_needs_memmem() {
    let temp = Project::empty();
    let pattern = "z".repeat(300);
    temp.file("a.txt", format!("..{pattern}"));

    temp.cmd()
        .args(["find", "--strategy", "fjs", pattern.as_str(), "a.txt"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("longest supported is 255"));

    temp.cmd()
        .args(["find", pattern.as_str(), "a.txt"])
        .assert()
        .success()
        .stdout("a.txt:2\n");
}

/// > Delimiter strategy only accepts the header terminator
#[test]
fn delimiter_strategy_rejects_other_patterns() {
    let temp = Project::empty();
    temp.file("a.txt", "abc");

    temp.cmd()
        .args(["find", "--strategy", "delimiter", "abc", "a.txt"])
        .assert()
        .code(2);
}

/// > Invalid escapes are argument errors
#[test]
fn invalid_escape_exits_two() {
    let temp = Project::empty();
    temp.file("a.txt", "abc");

    temp.cmd()
        .args(["find", "\\q", "a.txt"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("invalid escape"));
}
