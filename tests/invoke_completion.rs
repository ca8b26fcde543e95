#![cfg(unix)]

use std::error::Error;
use std::time::Duration;

use isorun::supervise::{Command, SupervisionResult, invoke};

type TestResult = Result<(), Box<dyn Error>>;

#[tokio::test]
async fn completing_command_returns_full_output() -> TestResult {
    let cmd = Command::new("/bin/echo", vec!["hello".to_string()]);

    let result = invoke(&cmd, Duration::from_secs(5)).await?;

    assert_eq!(
        result,
        SupervisionResult::Completed {
            output: "hello\n".to_string()
        }
    );
    Ok(())
}

#[tokio::test]
async fn nonzero_exit_code_still_counts_as_completed() -> TestResult {
    let cmd = Command::new(
        "/bin/sh",
        vec!["-c".to_string(), "echo oops; exit 3".to_string()],
    );

    let result = invoke(&cmd, Duration::from_secs(5)).await?;

    assert_eq!(
        result,
        SupervisionResult::Completed {
            output: "oops\n".to_string()
        }
    );
    Ok(())
}

#[tokio::test]
async fn large_output_is_captured_without_truncation() -> TestResult {
    // Well past the OS pipe buffer size.
    let cmd = Command::new("/bin/sh", vec!["-c".to_string(), "seq 1 20000".to_string()]);

    let result = invoke(&cmd, Duration::from_secs(10)).await?;

    let expected: String = (1..=20000).map(|i| format!("{i}\n")).collect();
    assert_eq!(result, SupervisionResult::Completed { output: expected });
    Ok(())
}

#[tokio::test]
async fn child_reading_stdin_sees_eof_instead_of_blocking() -> TestResult {
    // `cat` with no arguments copies stdin; with stdin null it must exit
    // immediately with empty output rather than hang until the timeout.
    let cmd = Command::new("/bin/cat", vec![]);

    let result = invoke(&cmd, Duration::from_secs(5)).await?;

    assert_eq!(
        result,
        SupervisionResult::Completed {
            output: String::new()
        }
    );
    Ok(())
}

#[tokio::test]
async fn non_utf8_output_is_replaced_not_fatal() -> TestResult {
    let cmd = Command::new(
        "/bin/sh",
        vec!["-c".to_string(), r"printf '\377\376'".to_string()],
    );

    let result = invoke(&cmd, Duration::from_secs(5)).await?;

    assert_eq!(
        result,
        SupervisionResult::Completed {
            output: "\u{FFFD}\u{FFFD}".to_string()
        }
    );
    Ok(())
}

#[tokio::test]
async fn sequential_invocations_are_independent() -> TestResult {
    let cmd = Command::new("/bin/echo", vec!["again".to_string()]);

    let first = invoke(&cmd, Duration::from_secs(5)).await?;
    let second = invoke(&cmd, Duration::from_secs(5)).await?;

    let expected = SupervisionResult::Completed {
        output: "again\n".to_string(),
    };
    assert_eq!(first, expected);
    assert_eq!(second, expected);
    Ok(())
}
