//! Integration tests for the hearthstone-boardcodec binary.
//!
//! Writes match logs into a scratch directory, runs the binary over it, and
//! checks the JSONL written to stdout.

use std::fs;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use serde_json::Value;

/// Runs the binary with the given arguments and returns its output.
fn run_codec(args: &[&str]) -> Output {
    let exe = env!("CARGO_BIN_EXE_hearthstone-boardcodec");
    Command::new(exe)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .expect("failed to start hearthstone-boardcodec")
}

/// A two-turn match: the first player acts, then the second, then the
/// first player wins.
const WON_MATCH: &str = r#"[
    {"type": "kStart"},
    {"type": "kMainAction", "board": {
        "current_player_id": "kFirstPlayer",
        "current_player": {"hero": {"hp": 30, "armor": 0}, "minions": [
            {"hp": 3, "max_hp": 3, "attack": 2, "attackable": true,
             "taunt": true, "shield": false, "stealth": false}
        ]},
        "opponent_player": {"hero": {"hp": 28, "armor": 2}, "minions": null}
    }},
    {"type": "kMainAction", "board": {
        "current_player_id": "kSecondPlayer",
        "current_player": {"hero": {"hp": 28, "armor": 2}, "minions": []},
        "opponent_player": {"hero": {"hp": 30, "armor": 0}, "minions": [
            {"hp": 3, "max_hp": 3, "attack": 2,
             "taunt": true, "shield": false, "stealth": false}
        ]}
    }},
    {"type": "kEnd", "result": "kResultWin"}
]"#;

/// A match that never records its end.
const UNFINISHED_MATCH: &str = r#"[
    {"type": "kMainAction", "board": {
        "current_player_id": "kFirstPlayer",
        "current_player": {"hero": {"hp": 30, "armor": 0}},
        "opponent_player": {"hero": {"hp": 30, "armor": 0}}
    }}
]"#;

fn parse_lines(stdout: &[u8]) -> Vec<Value> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(|l| serde_json::from_str(l).expect("output line is not JSON"))
        .collect()
}

fn input_arg(dir: &Path) -> String {
    dir.display().to_string()
}

#[test]
fn encodes_every_main_action() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path();
    fs::write(dir.join("match.json"), WON_MATCH).unwrap();

    let out = run_codec(&["--input", &input_arg(&dir), "--quiet"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let lines = parse_lines(&out.stdout);
    assert_eq!(lines.len(), 2);

    let labels: Vec<i64> = lines.iter().map(|l| l["label"].as_i64().unwrap()).collect();
    assert_eq!(labels, vec![0, 1]);

    let first: Vec<f64> = lines[0]["features"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_f64().unwrap())
        .collect();
    assert_eq!(first.len(), 100);
    assert_eq!(first[0], 30.0);
    assert_eq!(first[1], 30.0);
    assert_eq!(&first[2..9], &[3.0, 3.0, 2.0, 1.0, 1.0, -1.0, -1.0]);
    assert_eq!(&first[9..16], &[0.0, 0.0, 0.0, -1.0, -1.0, -1.0, -1.0]);

    // Attackable absent on the second snapshot's opponent minion.
    let second = lines[1]["features"].as_array().unwrap();
    assert_eq!(second[51 + 3].as_f64().unwrap(), -1.0);
}

#[test]
fn unfinished_match_fails_the_run() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path();
    fs::write(dir.join("a.json"), WON_MATCH).unwrap();
    fs::write(dir.join("b.json"), UNFINISHED_MATCH).unwrap();

    let out = run_codec(&["--input", &input_arg(&dir), "--quiet"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("b.json"), "stderr: {}", stderr);
    assert!(stderr.contains("no end event"), "stderr: {}", stderr);
    assert!(out.stdout.is_empty());
}

#[test]
fn skip_errors_keeps_good_documents() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path();
    fs::write(dir.join("a.json"), WON_MATCH).unwrap();
    fs::write(dir.join("b.json"), UNFINISHED_MATCH).unwrap();
    fs::write(dir.join("c.json"), "{ not json").unwrap();

    let out = run_codec(&["--input", &input_arg(&dir), "--skip-errors", "--threads", "2"]);
    assert!(out.status.success());
    assert_eq!(parse_lines(&out.stdout).len(), 2);

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Documents skipped: 2"), "stderr: {}", stderr);
}

#[test]
fn nested_directories_are_not_read() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path();
    fs::write(dir.join("top.json"), WON_MATCH).unwrap();
    fs::create_dir_all(dir.join("deeper")).unwrap();
    fs::write(dir.join("deeper").join("inner.json"), UNFINISHED_MATCH).unwrap();

    let out = run_codec(&["--input", &input_arg(&dir), "--quiet"]);
    assert!(out.status.success());
    assert_eq!(parse_lines(&out.stdout).len(), 2);
}

#[test]
fn output_file_receives_samples() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path();
    let input = dir.join("logs");
    fs::create_dir_all(&input).unwrap();
    fs::write(input.join("m.json"), WON_MATCH).unwrap();
    let output = dir.join("samples.jsonl");

    let out = run_codec(&[
        "--input",
        &input_arg(&input),
        "--output",
        &output.display().to_string(),
        "--shuffle",
        "--seed",
        "7",
        "--quiet",
    ]);
    assert!(out.status.success());
    assert!(out.stdout.is_empty());

    let written = fs::read(&output).unwrap();
    let mut labels: Vec<i64> = parse_lines(&written)
        .iter()
        .map(|l| l["label"].as_i64().unwrap())
        .collect();
    labels.sort();
    assert_eq!(labels, vec![0, 1]);
}

#[test]
fn unknown_flag_is_rejected() {
    let out = run_codec(&["--bogus"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Unknown argument: --bogus"));
}

#[test]
fn missing_input_directory_fails() {
    let dir = std::env::temp_dir().join("boardcodec-cli-no-such-dir");
    let out = run_codec(&["--input", &input_arg(&dir), "--quiet"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("failed to list"));
}
