//! Structured logging output.
//!
//! Every run logs a start line before doing any work, so these tests use a
//! configuration error to stop early.

use crate::support::*;

#[test]
fn test_default_logs_are_json_on_stderr() {
    let t = Test::new();
    let output = t.run(&["resolve", "--timeout", "0"]);
    assert_exit_code(&output, 2);

    let err = stderr(&output);
    let first = err.lines().next().expect("no log output");
    let line: serde_json::Value = serde_json::from_str(first).expect("log line is not JSON");
    assert_eq!(line["fields"]["message"], "fetch-secrets starting");
    assert_eq!(line["level"], "INFO");
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_failure_is_logged_with_exit_code() {
    let t = Test::new();
    let output = t.run(&["resolve", "--timeout", "0"]);

    let failure = stderr(&output)
        .lines()
        .filter_map(|l| serde_json::from_str::<serde_json::Value>(l).ok())
        .find(|l| l["level"] == "ERROR")
        .expect("no error log line");
    assert_eq!(failure["fields"]["exit_code"], 2);
    assert_eq!(failure["fields"]["message"], "fetch-secrets failure");
}

#[test]
fn test_text_log_format() {
    let t = Test::new();
    let output = t.run(&["--log-format", "text", "resolve", "--timeout", "0"]);
    assert_exit_code(&output, 2);
    let err = stderr(&output);
    assert!(err.contains("fetch-secrets starting"));
    assert!(!err.trim_start().starts_with('{'));
}

#[test]
fn test_log_filter_env_silences_info() {
    let t = Test::new();
    let output = t
        .cmd()
        .env("FETCH_SECRETS_LOG", "fetch_secrets=error")
        .args(["resolve", "--timeout", "0"])
        .output()
        .unwrap();
    assert_exit_code(&output, 2);
    let err = stderr(&output);
    assert!(!err.contains("fetch-secrets starting"));
    assert!(err.contains("fetch-secrets failure"));
}
