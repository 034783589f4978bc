//! Exit-status decoding and exec failures.

use nix::errno::Errno;
use nix::sys::signal::{Signal, kill};
use procrun::{CommandRunner, EXEC_FAILED, Outcome, RunError, ValidationError, run};

use crate::common::{scratch, script};

#[test]
fn test_true_succeeds() {
    assert!(run(&["/bin/true"]));
}

#[test]
fn test_false_fails() {
    assert!(!run(&["/bin/false"]));
}

#[test]
fn test_arguments_are_passed() {
    assert!(run(&["/bin/sh", "-c", "test \"$1\" = 'two words'", "sh", "two words"]));
    assert!(!run(&["/bin/sh", "-c", "test \"$1\" = 'two words'", "sh", "other"]));
}

#[test]
fn test_nonzero_exit_codes_fail() {
    for code in [1, 2, 42, 126, 255] {
        let cmd = format!("exit {code}");
        let completion = CommandRunner::new()
            .execute(&["/bin/sh", "-c", cmd.as_str()], None)
            .expect("Command should run");

        assert_eq!(completion.outcome, Outcome::Exited(code));
        assert!(!completion.success(), "exit {code} must not succeed");
    }
}

#[test]
fn test_nonexistent_path_fails() {
    assert!(!run(&["/nonexistent/path"]));

    let completion = CommandRunner::new()
        .execute(&["/nonexistent/path"], None)
        .expect("Fork and wait should work");
    assert_eq!(completion.outcome, Outcome::Exited(EXEC_FAILED));
}

#[test]
fn test_child_is_reaped_before_return() {
    let completion = CommandRunner::new()
        .execute(&["/nonexistent/path"], None)
        .expect("Fork and wait should work");

    assert_eq!(
        kill(completion.pid, None),
        Err(Errno::ESRCH),
        "child {} must not outlive the call",
        completion.pid
    );
}

#[test]
fn test_program_is_not_searched_in_path() {
    // `true` exists in PATH but not relative to the working directory.
    assert!(!run(&["true"]));
}

#[test]
fn test_relative_program_path() {
    let cwd = std::env::current_dir().unwrap();
    let up = "../".repeat(cwd.components().count() - 1);

    assert!(run(&[format!("{up}bin/true")]));
    assert!(!run(&[format!("{up}bin/false")]));
}

#[test]
fn test_non_executable_file_fails() {
    let dir = scratch();
    let path = script(dir.path(), "noexec.sh", "exit 0", false);

    let completion = CommandRunner::new()
        .execute(&[&path], None)
        .expect("Fork and wait should work");
    assert_eq!(completion.outcome, Outcome::Exited(EXEC_FAILED));
}

#[test]
fn test_signaled_child_fails() {
    let completion = CommandRunner::new()
        .execute(&["/bin/sh", "-c", "kill -KILL $$"], None)
        .expect("Fork and wait should work");

    assert_eq!(completion.outcome, Outcome::Signaled(Signal::SIGKILL));
    assert!(!completion.success());
    assert!(!run(&["/bin/sh", "-c", "kill -TERM $$"]));
}

#[test]
fn test_empty_argv_fails() {
    assert!(!run::<&str>(&[]));
    assert!(!run(&[""]));

    let err = CommandRunner::new().execute(&["/bin/echo", "a\0b"], None).unwrap_err();
    assert!(matches!(err, RunError::Validation(ValidationError::NullByte(1))));
}

#[test]
fn test_repeated_runs_are_consistent() {
    for _ in 0..5 {
        assert!(run(&["/bin/true"]));
        assert!(!run(&["/bin/false"]));
    }
}

#[test]
fn test_side_effects_complete_before_return() {
    let dir = scratch();
    let marker = dir.path().join("marker");
    let cmd = format!("sleep 0.1; echo done > '{}'", marker.display());

    assert!(run(&["/bin/sh", "-c", cmd.as_str()]));
    assert!(marker.exists(), "child side effects must be visible on return");
}
