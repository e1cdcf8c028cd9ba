//! Integration tests for the extract command (CLI)

use std::fs;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{fixture, fixtures_dir, run_tweetext, temp_fixture, tweetext};

// ============================================================================
// Single File
// ============================================================================

#[test]
fn extract_single_file_to_stdout() {
    let home = TempDir::new().unwrap();
    let input = fixture("jack.csv");

    let (stdout, stderr, exit_code) = run_tweetext(home.path(), &["extract", input.to_str().unwrap()]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    insta::assert_snapshot!(stdout.trim_end(), @r"
    just setting up my twttr
    congrats on the launch!
    .@ev knows my name
    Hey #bitcoin lovers, whats up?
    two lines here
    ");
}

#[test]
fn extract_logs_counts_to_stderr() {
    let home = TempDir::new().unwrap();
    let input = fixture("jack.csv");

    let (_stdout, stderr, exit_code) = run_tweetext(home.path(), &["extract", input.to_str().unwrap()]);

    assert_eq!(exit_code, 0);
    assert!(stderr.contains("Reading"), "stderr: {}", stderr);
    assert!(stderr.contains("8 tweets found"), "stderr: {}", stderr);
    assert!(
        stderr.contains("6 filtered tweets (remove_retweets: true remove_replies: false)"),
        "stderr: {}",
        stderr
    );
    assert!(stderr.contains("5 non-blank tweet texts"), "stderr: {}", stderr);
}

#[test]
fn extract_count_lines_name_their_file() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let input = fixtures_dir();

    let (_stdout, stderr, exit_code) = run_tweetext(
        home.path(),
        &[
            "extract",
            input.to_str().unwrap(),
            "--destdir",
            out.path().to_str().unwrap(),
        ],
    );

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    let jack = format!("source={}", fixture("jack.csv").display());
    let ev = format!("source={}", fixture("ev.csv").display());
    let count_lines: Vec<&str> = stderr
        .lines()
        .filter(|line| line.contains("tweets found") || line.contains("non-blank"))
        .collect();
    assert_eq!(count_lines.len(), 4, "stderr: {}", stderr);
    assert!(count_lines.iter().all(|line| line.contains(&jack) || line.contains(&ev)));
    assert!(stderr.contains(&format!("8 tweets found {}", jack)), "stderr: {}", stderr);
}

#[test]
fn extract_quiet_keeps_stderr_clean() {
    let home = TempDir::new().unwrap();
    let input = fixture("ev.csv");

    tweetext(home.path())
        .args(["-q", "extract", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout("thanks, means a lot\nbuilding something new\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn extract_keep_retweets() {
    let home = TempDir::new().unwrap();
    let input = fixture("jack.csv");

    tweetext(home.path())
        .args(["extract", input.to_str().unwrap(), "--keep-retweets"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "just setting up my twttr\nwe are hiring\ncongrats on the launch!\n",
        ));
}

#[test]
fn extract_remove_replies() {
    let home = TempDir::new().unwrap();
    let input = fixture("jack.csv");

    tweetext(home.path())
        .args(["extract", input.to_str().unwrap(), "--remove-replies"])
        .assert()
        .success()
        .stdout(predicate::str::contains("congrats").not())
        .stdout(predicate::str::contains("just setting up my twttr"));
}

// ============================================================================
// Directory Input
// ============================================================================

#[test]
fn extract_directory_to_stdout_in_sorted_order() {
    let home = TempDir::new().unwrap();
    let input = fixtures_dir();

    let (stdout, stderr, exit_code) = run_tweetext(home.path(), &["extract", input.to_str().unwrap()]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(stderr.contains("Found 2 CSV files in"), "stderr: {}", stderr);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 7);
    // ev.csv sorts before jack.csv
    assert_eq!(lines[0], "thanks, means a lot");
    assert_eq!(lines[1], "building something new");
    assert_eq!(lines[2], "just setting up my twttr");
}

#[test]
fn extract_directory_to_destdir() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let destdir = out.path().join("texts").join("2019");
    let input = fixtures_dir();

    let (stdout, stderr, exit_code) = run_tweetext(
        home.path(),
        &[
            "extract",
            input.to_str().unwrap(),
            "--destdir",
            destdir.to_str().unwrap(),
        ],
    );

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(stdout.is_empty(), "texts should not go to stdout: {}", stdout);
    assert!(stderr.contains("Wrote to:"), "stderr: {}", stderr);

    assert_eq!(
        fs::read_to_string(destdir.join("ev.txt")).unwrap(),
        "thanks, means a lot\nbuilding something new\n"
    );
    let jack = fs::read_to_string(destdir.join("jack.txt")).unwrap();
    assert_eq!(jack.lines().count(), 5);
    assert!(!destdir.join("notes.txt").exists());
}

#[test]
fn extract_single_file_to_destdir() {
    let home = TempDir::new().unwrap();
    let (temp_dir, input) = temp_fixture("ev.csv");
    let destdir = temp_dir.path().join("out");

    tweetext(home.path())
        .args([
            "extract",
            input.to_str().unwrap(),
            "--destdir",
            destdir.to_str().unwrap(),
        ])
        .assert()
        .success();

    assert!(destdir.join("ev.txt").is_file());
}

// ============================================================================
// Error Handling
// ============================================================================

#[test]
fn extract_no_arguments_shows_usage_error() {
    let home = TempDir::new().unwrap();

    let (_stdout, stderr, exit_code) = run_tweetext(home.path(), &["extract"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("<INPUT>"));
}

#[test]
fn extract_nonexistent_path_exits_1() {
    let home = TempDir::new().unwrap();

    let (_stdout, stderr, exit_code) =
        run_tweetext(home.path(), &["extract", "/nonexistent/tweets.csv"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("not a valid filename or directory"), "stderr: {}", stderr);
    assert!(stderr.contains("/nonexistent/tweets.csv"));
}

#[test]
fn extract_missing_column_rejects_file() {
    let home = TempDir::new().unwrap();
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("bad.csv");
    fs::write(&input, "id,text\n1,hello\n").unwrap();

    tweetext(home.path())
        .args(["extract", input.to_str().unwrap()])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("missing required column 'tweet_type'"));
}

#[test]
fn extract_malformed_row_reports_line() {
    let home = TempDir::new().unwrap();
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("ragged.csv");
    fs::write(&input, "text,tweet_type\nok,original\nragged\n").unwrap();

    tweetext(home.path())
        .args(["extract", input.to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("malformed record on line 3"));
}

// ============================================================================
// Help Output
// ============================================================================

#[test]
fn extract_help_lists_flags() {
    let home = TempDir::new().unwrap();

    let (stdout, _stderr, exit_code) = run_tweetext(home.path(), &["extract", "--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("<INPUT>"));
    assert!(stdout.contains("--destdir"));
    assert!(stdout.contains("--keep-retweets"));
    assert!(stdout.contains("--remove-replies"));
    assert!(stdout.contains("--remove-retweets"));
    assert!(stdout.contains("--keep-replies"));
}
