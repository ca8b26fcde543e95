#![cfg(unix)]

use std::error::Error;
use std::time::Duration;

use isorun::supervise::{Command, SupervisionResult, invoke};

type TestResult = Result<(), Box<dyn Error>>;

#[tokio::test]
async fn nonexistent_executable_reports_launch_failed() -> TestResult {
    let cmd = Command::new("/nonexistent/binary", vec![]);

    let result = invoke(&cmd, Duration::from_secs(5)).await?;

    match result {
        SupervisionResult::LaunchFailed { message } => {
            assert!(!message.is_empty(), "launch failure must carry a message");
        }
        other => panic!("expected LaunchFailed, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn non_executable_file_reports_launch_failed() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("not-executable");
    std::fs::write(&path, "just data")?;

    let cmd = Command::new(path, vec![]);

    let result = invoke(&cmd, Duration::from_secs(5)).await?;

    assert!(
        matches!(result, SupervisionResult::LaunchFailed { .. }),
        "expected LaunchFailed, got {result:?}"
    );
    Ok(())
}
