//! Integration tests for configuration handling (CLI)

use std::fs;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{fixture, run_tweetext, tweetext};

#[test]
fn config_show_prints_defaults() {
    let home = TempDir::new().unwrap();

    let (stdout, stderr, exit_code) = run_tweetext(home.path(), &["config", "show"]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("[extract]"));
    assert!(stdout.contains("remove_retweets = true"));
    assert!(stdout.contains("remove_replies = false"));
}

#[test]
#[cfg(target_os = "linux")]
fn config_file_in_default_location_is_used() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".config").join("tweetext");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[extract]\nremove_replies = true\n",
    )
    .unwrap();

    tweetext(home.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("remove_replies = true"));
}

#[test]
fn explicit_config_changes_extraction() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("keep-retweets.toml");
    fs::write(&config, "[extract]\nremove_retweets = false\n").unwrap();
    let input = fixture("ev.csv");

    tweetext(home.path())
        .args([
            "--config",
            config.to_str().unwrap(),
            "extract",
            input.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout("thanks, means a lot\njust setting up my twttr\nbuilding something new\n");
}

#[test]
fn flags_override_config_in_both_directions() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("inverted.toml");
    fs::write(
        &config,
        "[extract]\nremove_retweets = false\nremove_replies = true\n",
    )
    .unwrap();
    let input = fixture("ev.csv");

    tweetext(home.path())
        .args([
            "--config",
            config.to_str().unwrap(),
            "extract",
            input.to_str().unwrap(),
            "--remove-retweets",
            "--keep-replies",
        ])
        .assert()
        .success()
        .stdout("thanks, means a lot\nbuilding something new\n");
}

#[test]
fn config_env_var_is_honoured() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("env.toml");
    fs::write(&config, "[extract]\nremove_replies = true\n").unwrap();
    let input = fixture("ev.csv");

    tweetext(home.path())
        .env("TWEETEXT_CONFIG", &config)
        .args(["extract", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout("building something new\n");
}

#[test]
fn missing_explicit_config_exits_1() {
    let home = TempDir::new().unwrap();

    let (_stdout, stderr, exit_code) = run_tweetext(
        home.path(),
        &["--config", "/nonexistent/config.toml", "config", "show"],
    );

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Config file not found"), "stderr: {}", stderr);
}

#[test]
fn invalid_config_exits_1() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("bad.toml");
    fs::write(&config, "[extract\n").unwrap();

    tweetext(home.path())
        .args(["--config", config.to_str().unwrap(), "config", "show"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid config"));
}

#[test]
fn config_path_reports_missing_default() {
    let home = TempDir::new().unwrap();

    tweetext(home.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"))
        .stdout(predicate::str::contains("not found, using defaults"));
}

#[test]
fn completions_generate_for_bash() {
    let home = TempDir::new().unwrap();

    tweetext(home.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tweetext"));
}
