//! Tests for `fetch-secrets exec` failures that occur before any AWS call.

use crate::support::*;

#[test]
fn test_exec_missing_program_exits_1() {
    let t = Test::new();
    let output = t.exec(&["fetch-secrets-no-such-program-4e1f", "--flag"]);
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "executable not found");
    assert_stderr_contains(&output, "fetch-secrets-no-such-program-4e1f");
}

#[test]
fn test_exec_without_command_exits_1() {
    let t = Test::new();
    let output = t.exec(&[]);
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "no command specified");
}

#[test]
fn test_exec_lookup_precedes_config_validation() {
    // Both are wrong; the missing executable is reported first.
    let t = Test::new();
    let output = t.run(&["--timeout", "0", "exec", "fetch-secrets-no-such-program-4e1f"]);
    assert_exit_code(&output, 1);
}

#[cfg(unix)]
#[test]
fn test_exec_invalid_config_exits_2() {
    let t = Test::new();
    let output = t.run(&["--tag-prefix", "", "exec", "sh", "-c", "exit 0"]);
    assert_exit_code(&output, 2);
    assert_stderr_contains(&output, "tag prefix must not be empty");
}
