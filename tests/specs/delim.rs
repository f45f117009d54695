//! Behavioral specs for `hayscan delim`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// > delim prints the offset of the first \r\n\r\n
#[test]
fn finds_header_terminator() {
    let temp = Project::empty();
    temp.file("req.http", REQUEST);

    temp.cmd()
        .args(["delim", "req.http"])
        .assert()
        .success()
        .stdout("req.http:33\n");
}

/// > Word size and byte order do not change the result
#[test]
fn every_scanner_configuration_agrees() {
    let temp = Project::empty();
    temp.file("req.http", REQUEST);

    for word_size in ["2", "4"] {
        for byte_order in ["native", "little", "big"] {
            temp.cmd()
                .args(["delim", "--word-size", word_size, "--byte-order", byte_order])
                .arg("req.http")
                .assert()
                .success()
                .stdout("req.http:33\n");
        }
    }
}

/// > A delimiter split across word boundaries is found at any alignment
#[test]
fn finds_delimiter_at_every_alignment() {
    let temp = Project::empty();
    for lead in 0..8 {
        let body = format!("{}\r\n\r\n", ".".repeat(lead));
        temp.file(format!("{lead}.txt"), &body);

        temp.cmd()
            .arg("delim")
            .arg(format!("{lead}.txt"))
            .assert()
            .success()
            .stdout(format!("{lead}.txt:{lead}\n"));
    }
}

/// > A trailing partial delimiter is not a match
#[test]
fn truncated_delimiter_is_not_found() {
    let temp = Project::empty();
    temp.file("cut.http", "GET / HTTP/1.1\r\nHost: x\r\n\r");

    temp.cmd()
        .args(["delim", "cut.http"])
        .assert()
        .code(1);
}

/// > --all lists every terminator with its line
#[test]
fn all_lists_every_terminator() {
    let temp = Project::empty();
    temp.file("two.http", "a\r\n\r\nb\r\n\r\n");

    temp.cmd()
        .args(["delim", "--all", "two.http"])
        .assert()
        .success()
        .stdout("two.http:1:1\ntwo.http:3:6\n");
}

/// > `-` reads stdin
#[test]
fn dash_reads_stdin() {
    let temp = Project::empty();
    with_stdin(temp.cmd(), REQUEST)
        .args(["delim", "-"])
        .assert()
        .success()
        .stdout("<stdin>:33\n");
}

/// > Unsupported word sizes are rejected by argument parsing
#[test]
fn rejects_unsupported_word_size() {
    hayscan_cmd()
        .args(["delim", "--word-size", "8"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("word size"));
}
