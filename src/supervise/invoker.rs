// src/supervise/invoker.rs

//! Timeout-bounded execution of one subordinate command.

use std::process::Stdio;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use tokio::io::AsyncReadExt;
use tokio::time;
use tracing::{debug, info, warn};

use crate::supervise::command::Command;
use crate::supervise::group::ProcessGroupHandle;

/// Outcome of supervising one subordinate invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SupervisionResult {
    /// The subordinate exited (with any code) inside the budget; `output` is
    /// its complete stdout.
    Completed { output: String },

    /// The budget elapsed; the subordinate's whole process group has been
    /// SIGKILLed before this variant is produced.
    TimedOut,

    /// The subordinate could not be started at all.
    LaunchFailed { message: String },
}

/// Run `command` under supervision, bounded by `timeout`.
///
/// The child is spawned with stdout piped, stderr discarded, stdin null, and
/// as the leader of a fresh session, so that it and any descendants it
/// spawns form one addressable process group. Signals are only ever sent to
/// that group, never to the invoker's own.
///
/// `Err` is reserved for unexpected OS failures during the wait/kill steps;
/// launch failures and timeouts are ordinary [`SupervisionResult`] variants.
pub async fn invoke(command: &Command, timeout: Duration) -> Result<SupervisionResult> {
    info!(
        program = %command.program().display(),
        timeout_secs = timeout.as_secs_f64(),
        "starting supervised process"
    );

    let mut cmd = command.to_tokio_command();
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .kill_on_drop(true);
    new_session(&mut cmd);

    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(err) => {
            debug!(program = %command.program().display(), error = %err, "spawn failed");
            return Ok(SupervisionResult::LaunchFailed {
                message: err.to_string(),
            });
        }
    };

    let pid = child
        .id()
        .ok_or_else(|| anyhow!("child exited before its pid could be observed"))?;
    let group = ProcessGroupHandle::new(pid);

    let mut stdout = child
        .stdout
        .take()
        .context("child stdout pipe was not captured")?;

    // Drain stdout to EOF, then reap. Dropped as a whole if the timer wins,
    // discarding any partial output.
    let mut output = Vec::new();
    let waited = time::timeout(timeout, async {
        stdout
            .read_to_end(&mut output)
            .await
            .context("draining subordinate stdout")?;
        child.wait().await.context("waiting for subordinate process")
    })
    .await;

    match waited {
        Ok(Ok(status)) => {
            info!(
                pid,
                exit_code = status.code().unwrap_or(-1),
                bytes = output.len(),
                "subordinate exited within budget"
            );
            Ok(SupervisionResult::Completed {
                output: String::from_utf8_lossy(&output).into_owned(),
            })
        }
        Ok(Err(err)) => {
            // Unexpected wait/drain failure: take the group down before
            // surfacing.
            warn!(pid, error = %err, "supervision failed mid-wait; killing process group");
            if let Err(kill_err) = group.kill() {
                warn!(pid, error = %kill_err, "process group kill after wait error failed");
            }
            Err(err)
        }
        Err(_elapsed) => {
            warn!(pid, "timeout elapsed; killing subordinate process group");
            // The kill must have been delivered before TimedOut is reported.
            group.kill()?;
            #[cfg(not(unix))]
            let _ = child.start_kill();
            Ok(SupervisionResult::TimedOut)
        }
    }
}

/// Make the child the leader of a new session (and thus of a new process
/// group), distinct from the invoker's own.
#[cfg(unix)]
fn new_session(cmd: &mut tokio::process::Command) {
    unsafe {
        cmd.pre_exec(|| {
            nix::unistd::setsid()
                .map_err(|errno| std::io::Error::from_raw_os_error(errno as i32))?;
            Ok(())
        });
    }
}

#[cfg(not(unix))]
fn new_session(_cmd: &mut tokio::process::Command) {}
