//! CLI interaction tests for the random text generator
//!
//! These run the real binary with piped stdin and check what ends up on
//! stdout, in the exit code and on disk.

use assert_cmd::prelude::*;
use assert_cmd::Command;
use predicates::prelude::*;
use regex::Regex;
use std::fs;
use tempfile::TempDir;

const ENV_VARS: [&str; 5] = ["OUTPUT_DIR", "LOG_DIR", "LOG_LEVEL", "TIMEOUT_SECONDS", "ENABLE_COLOR"];

/// Helper function to create a test command isolated from the caller's environment
fn create_test_cmd(workdir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("opsamples").unwrap();
    cmd.current_dir(workdir.path()).env("NO_COLOR", "1");
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd
}

fn read_lines(path: &std::path::Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_generate_with_flags_writes_document() {
    let dir = TempDir::new().unwrap();
    let dir_arg = dir.path().to_str().unwrap();

    create_test_cmd(&dir)
        .args(["--no-color", "generate", "-n", "3", "-w", "4", "-l", "5", "--dir", dir_arg])
        .assert()
        .success()
        .stdout(predicate::str::contains("You can find 3 lines of text in file"))
        .stdout(predicate::str::contains("random.txt"));

    let lines = read_lines(&dir.path().join("random.txt"));
    assert_eq!(lines.len(), 3);

    let word = Regex::new(r"^[a-zA-Z]{5}$").unwrap();
    for line in lines {
        let words: Vec<&str> = line.split(' ').collect();
        assert_eq!(words.len(), 4);
        assert!(words.iter().all(|w| word.is_match(w)), "unexpected line {:?}", line);
    }
}

#[test]
fn test_generate_prompts_for_everything() {
    let dir = TempDir::new().unwrap();
    let answers = format!("2\n1\n7\n{}\n", dir.path().display());

    create_test_cmd(&dir)
        .args(["--no-color", "generate"])
        .write_stdin(answers)
        .assert()
        .success()
        .stdout(predicate::str::contains("How many lines of text would you like to have?"))
        .stdout(predicate::str::contains("How many words would you like to have in a line?"))
        .stdout(predicate::str::contains("How long would you like each word to be?"))
        .stdout(predicate::str::contains("Please specify the directory where the text file should be saved:"));

    let lines = read_lines(&dir.path().join("random.txt"));
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|line| line.len() == 7));
}

#[test]
fn test_plain_generate_fails_fast_on_non_number() {
    let dir = TempDir::new().unwrap();
    let dir_arg = dir.path().to_str().unwrap();

    create_test_cmd(&dir)
        .args(["--no-color", "generate", "--dir", dir_arg])
        .write_stdin("abc\n3\n3\n3\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Oops! This doesn't appear to be a number..."))
        .stdout(predicate::str::contains("Please try again!").not());

    assert!(!dir.path().join("random.txt").exists());
}

#[test]
fn test_diagnostics_reprompts_and_writes_log() {
    let dir = TempDir::new().unwrap();
    let dir_arg = dir.path().to_str().unwrap();

    create_test_cmd(&dir)
        .args([
            "--no-color", "generate", "--diagnostics",
            "--dir", dir_arg, "--log-dir", dir_arg, "--log-level", "debug",
        ])
        .write_stdin("abc\n0\n2\n2\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Oops! This doesn't appear to be a number... Please try again!"));

    assert_eq!(read_lines(&dir.path().join("random.txt")).len(), 2);

    let log = fs::read_to_string(dir.path().join("randomtext_debug.log")).unwrap();
    let record = Regex::new(
        r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2},\d{3} \(\w+ --> \w+\[\d+\]\) \[(DEBUG|INFO|WARNING|ERROR|CRITICAL)\]: ",
    )
    .unwrap();
    for line in log.lines() {
        assert!(record.is_match(line), "malformed record {:?}", line);
    }

    assert_eq!(log.matches("[WARNING]: Non number provided by the user").count(), 2);
    assert!(log.contains("User input completed! Number of lines: 2; Line length: 2; Word length: 3"));
    assert!(log.contains("[INFO]: Random text generation completed!"));
}

#[test]
fn test_diagnostics_log_level_filters_records() {
    let dir = TempDir::new().unwrap();
    let dir_arg = dir.path().to_str().unwrap();

    create_test_cmd(&dir)
        .args([
            "--no-color", "generate", "--diagnostics", "-n", "1", "-w", "1", "-l", "1",
            "--dir", dir_arg, "--log-dir", dir_arg, "--log-level", "warning",
        ])
        .assert()
        .success();

    let log = fs::read_to_string(dir.path().join("randomtext_warning.log")).unwrap();
    assert!(!log.contains("[DEBUG]"));
    assert!(!log.contains("[INFO]"));
    assert!(!dir.path().join("randomtext_debug.log").exists());
}

#[test]
fn test_plain_generate_keeps_no_log() {
    let dir = TempDir::new().unwrap();
    let dir_arg = dir.path().to_str().unwrap();

    create_test_cmd(&dir)
        .args(["--no-color", "generate", "-n", "1", "-w", "1", "-l", "1", "--dir", dir_arg, "--log-dir", dir_arg])
        .assert()
        .success();

    let logs: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "log"))
        .collect();
    assert!(logs.is_empty());
}

#[test]
fn test_input_closed_exit_code() {
    let dir = TempDir::new().unwrap();

    create_test_cmd(&dir)
        .args(["--no-color", "generate", "--diagnostics", "--log-dir", dir.path().to_str().unwrap()])
        .write_stdin("4\n")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_missing_directory_reports_and_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist");

    create_test_cmd(&dir)
        .args(["--no-color", "generate", "-n", "1", "-w", "1", "-l", "1", "--dir", missing.to_str().unwrap()])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Oops! This doesn't appear to be a valid directory path..."));

    assert!(!missing.exists());
}

#[test]
fn test_missing_directory_logged_as_critical() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");

    create_test_cmd(&dir)
        .args([
            "--no-color", "generate", "--diagnostics", "-n", "1", "-w", "1", "-l", "1",
            "--dir", missing.to_str().unwrap(), "--log-dir", dir.path().to_str().unwrap(),
        ])
        .assert()
        .code(1);

    let log = fs::read_to_string(dir.path().join("randomtext_debug.log")).unwrap();
    assert!(log.contains("[ERROR]: Invalid directory path."));
    assert!(log.contains("[CRITICAL]: Wrong directory path provided by the user"));
}

#[test]
fn test_zero_flag_rejected_by_parser() {
    let dir = TempDir::new().unwrap();

    create_test_cmd(&dir)
        .args(["generate", "-n", "0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--lines"));
}

#[test]
fn test_non_numeric_flag_exits_with_usage_code() {
    let dir = TempDir::new().unwrap();

    create_test_cmd(&dir)
        .args(["generate", "--lines", "abc"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--lines"));

    assert!(!dir.path().join("random.txt").exists());
}

#[test]
fn test_empty_directory_answer_writes_to_working_directory() {
    let dir = TempDir::new().unwrap();

    create_test_cmd(&dir)
        .args(["--no-color", "generate", "-n", "1", "-w", "1", "-l", "3"])
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You can find 1 lines of text in file"));

    let lines = read_lines(&dir.path().join("random.txt"));
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].len(), 3);
}

#[test]
fn test_conflicting_color_flags() {
    let dir = TempDir::new().unwrap();

    create_test_cmd(&dir)
        .args(["--color", "--no-color", "generate", "-n", "1", "-w", "1", "-l", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Cannot specify both --color and --no-color"));
}

#[test]
fn test_invalid_env_value_is_config_error() {
    let dir = TempDir::new().unwrap();

    create_test_cmd(&dir)
        .args(["generate", "-n", "1", "-w", "1", "-l", "1"])
        .env("ENABLE_COLOR", "sometimes")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration help:"));
}

#[test]
fn test_env_file_supplies_output_dir() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out");
    fs::create_dir(&out).unwrap();
    fs::write(dir.path().join(".env"), format!("OUTPUT_DIR={}\n", out.display())).unwrap();

    create_test_cmd(&dir)
        .args(["--no-color", "generate", "-n", "2", "-w", "2", "-l", "2"])
        .assert()
        .success();

    assert!(out.join("random.txt").exists());
}

#[test]
fn test_debug_prints_configuration_summary() {
    let dir = TempDir::new().unwrap();

    create_test_cmd(&dir)
        .args(["--no-color", "--debug", "generate", "-n", "1", "-w", "1", "-l", "1", "--dir", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration Summary:").count(1))
        .stdout(predicate::str::contains("Log directory:").count(1))
        .stdout(predicate::str::contains("Applied CLI overrides").not())
        .stdout(predicate::str::contains("Lines: 1"));
}

#[test]
fn test_help_and_version() {
    let dir = TempDir::new().unwrap();

    create_test_cmd(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("measure"))
        .stdout(predicate::str::contains("Supported Environment Variables:"));

    create_test_cmd(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
