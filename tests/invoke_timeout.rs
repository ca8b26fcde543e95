#![cfg(unix)]

use std::error::Error;
use std::fs;
use std::time::Duration;

use isorun::supervise::{Command, SupervisionResult, invoke};

type TestResult = Result<(), Box<dyn Error>>;

/// Whether `pid` still refers to a live (non-zombie) process.
fn process_alive(pid: u32) -> bool {
    use nix::errno::Errno;
    use nix::sys::signal::kill;
    use nix::unistd::Pid;

    match kill(Pid::from_raw(pid as i32), None) {
        Err(Errno::ESRCH) => false,
        Err(_) => true,
        Ok(()) => {
            // An unreaped zombie still answers signal 0; on Linux, read the
            // state field so a dead-but-unreaped child does not count.
            #[cfg(target_os = "linux")]
            {
                match fs::read_to_string(format!("/proc/{pid}/stat")) {
                    Ok(stat) => match stat.rfind(')') {
                        Some(idx) => !matches!(
                            stat[idx + 1..].trim_start().chars().next(),
                            Some('Z') | Some('X')
                        ),
                        None => true,
                    },
                    Err(_) => false,
                }
            }
            #[cfg(not(target_os = "linux"))]
            {
                true
            }
        }
    }
}

/// Poll until `pid` is gone, up to `deadline`.
async fn wait_until_dead(pid: u32, deadline: Duration) -> bool {
    let start = std::time::Instant::now();
    while start.elapsed() < deadline {
        if !process_alive(pid) {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    !process_alive(pid)
}

#[tokio::test]
async fn over_budget_command_times_out() -> TestResult {
    let cmd = Command::new("/bin/sleep", vec!["10".to_string()]);

    let result = invoke(&cmd, Duration::from_millis(300)).await?;

    assert_eq!(result, SupervisionResult::TimedOut);
    Ok(())
}

#[tokio::test]
async fn timeout_kills_spawned_descendants_too() -> TestResult {
    let dir = tempfile::tempdir()?;
    let pid_file = dir.path().join("pids");

    // The shell records its own pid and the pid of a background grandchild,
    // then hangs on `wait` until the supervisor intervenes.
    let script = format!(
        "echo $$ > {p}; sleep 60 & echo $! >> {p}; wait",
        p = pid_file.display()
    );
    let cmd = Command::new("/bin/sh", vec!["-c".to_string(), script]);

    let result = invoke(&cmd, Duration::from_millis(500)).await?;
    assert_eq!(result, SupervisionResult::TimedOut);

    let pids: Vec<u32> = fs::read_to_string(&pid_file)?
        .lines()
        .map(|l| l.trim().parse())
        .collect::<Result<_, _>>()?;
    assert_eq!(pids.len(), 2, "expected shell pid and grandchild pid");

    for pid in pids {
        assert!(
            wait_until_dead(pid, Duration::from_secs(2)).await,
            "pid {pid} from the supervised subtree is still alive after TimedOut"
        );
    }
    Ok(())
}

#[tokio::test]
async fn partial_output_is_discarded_on_timeout() -> TestResult {
    // Output before the hang must not leak into a TimedOut result.
    let cmd = Command::new(
        "/bin/sh",
        vec!["-c".to_string(), "echo partial; sleep 60".to_string()],
    );

    let result = invoke(&cmd, Duration::from_millis(300)).await?;

    assert_eq!(result, SupervisionResult::TimedOut);
    Ok(())
}
