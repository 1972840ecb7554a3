use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn prints_help_and_quits() {
    Command::cargo_bin("nagare")
        .expect("binary built")
        .args(["--seed", "7"])
        .write_stdin("help\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Game seed: 7"));
}

#[test]
fn reads_players_from_a_config_file() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("table.yaml");
    fs::write(
        &path,
        "human: \"Aiko\"\nopponents: [\"Ren\"]\nseed: 3\nlogging:\n  tracing_level: \"error\"\n",
    )
    .expect("write config");

    Command::cargo_bin("nagare")
        .expect("binary built")
        .arg("--config")
        .arg(&path)
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Players: Aiko, Ren"))
        .stdout(predicate::str::contains("Game seed: 3"));
}

#[test]
fn rejects_an_invalid_config() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("broken.yaml");
    fs::write(&path, "opponents: []\n").expect("write config");

    Command::cargo_bin("nagare")
        .expect("binary built")
        .arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid configuration"));
}

#[test]
fn rejects_duplicate_opponent_names() {
    Command::cargo_bin("nagare")
        .expect("binary built")
        .args(["--opponent", "Ren", "--opponent", "Ren"])
        .write_stdin("quit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("used more than once"));
}

#[test]
fn writes_json_logs_to_a_file_when_asked() {
    let dir = tempdir().expect("temp dir");
    let log = dir.path().join("logs").join("nagare.jsonl");

    Command::cargo_bin("nagare")
        .expect("binary built")
        .args(["--seed", "5", "--log-level", "info", "--log-file"])
        .arg(&log)
        .write_stdin("quit\n")
        .assert()
        .success();

    let contents = fs::read_to_string(&log).expect("log file written");
    assert!(contents.contains("game started"));
}
