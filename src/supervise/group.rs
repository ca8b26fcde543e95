// src/supervise/group.rs

//! Ownership of the child's process group.

use anyhow::Result;
#[cfg(unix)]
use anyhow::Context;
use tracing::debug;

/// Handle to the process group created for a supervised child.
///
/// The invoker owns this exclusively for the duration of one invocation and
/// consumes it either by letting the group exit or by [`kill`]ing it; it is
/// never handed to the caller.
///
/// [`kill`]: ProcessGroupHandle::kill
#[derive(Debug)]
pub struct ProcessGroupHandle {
    pgid: u32,
}

impl ProcessGroupHandle {
    /// Capture the group of a freshly spawned child.
    ///
    /// The child was started with `setsid`, so its pid doubles as the pgid
    /// of the new group.
    pub fn new(child_pid: u32) -> Self {
        Self { pgid: child_pid }
    }

    pub fn pgid(&self) -> u32 {
        self.pgid
    }

    /// Send SIGKILL to every process in the group.
    ///
    /// A group that no longer exists (ESRCH) counts as killed: nothing from
    /// it can still be running.
    #[cfg(unix)]
    pub fn kill(self) -> Result<()> {
        use nix::errno::Errno;
        use nix::sys::signal::{Signal, killpg};
        use nix::unistd::Pid;

        match killpg(Pid::from_raw(self.pgid as i32), Signal::SIGKILL) {
            Ok(()) | Err(Errno::ESRCH) => {
                debug!(pgid = self.pgid, "process group killed");
                Ok(())
            }
            Err(errno) => Err(anyhow::Error::from(errno))
                .with_context(|| format!("killing process group {}", self.pgid)),
        }
    }

    /// Non-Unix targets have no process group to address; the invoker kills
    /// the direct child instead. This variant only consumes the handle.
    #[cfg(not(unix))]
    pub fn kill(self) -> Result<()> {
        debug!(pgid = self.pgid, "no process-group kill on this platform");
        Ok(())
    }
}
