// src/provision/backend.rs

//! Pluggable provisioning backend abstraction.
//!
//! - `ShellBuildBackend` is the default implementation used by `isorun`.
//!   It runs the configured build command through the platform shell when
//!   the binary is missing.
//! - Tests can provide their own `ProvisionBackend` that, for example,
//!   records which paths were requested without building anything.

use std::future::Future;
use std::path::Path;
use std::pin::Pin;
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, warn};

use crate::errors::{IsorunError, Result};

/// Trait abstracting how the subordinate binary is made present.
///
/// Production code uses [`ShellBuildBackend`]; tests can provide their own
/// implementation. The method is called once, before any supervision.
pub trait ProvisionBackend: Send {
    /// Ensure the binary at `path` exists, building it if the backend knows
    /// how.
    fn ensure_binary<'a>(
        &'a mut self,
        path: &'a Path,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;
}

/// Real provisioning backend: build-if-missing through the platform shell.
///
/// The build runs with stdin, stdout and stderr all null, and its exit
/// status is not treated as fatal: if the build did not produce the binary,
/// the subsequent launch reports that instead. Only a build command that
/// cannot be started at all is an error.
pub struct ShellBuildBackend {
    build_cmd: Option<String>,
}

impl ShellBuildBackend {
    pub fn new(build_cmd: Option<String>) -> Self {
        Self { build_cmd }
    }
}

impl ProvisionBackend for ShellBuildBackend {
    fn ensure_binary<'a>(
        &'a mut self,
        path: &'a Path,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(async move {
            if path.exists() {
                debug!(path = %path.display(), "subordinate binary present; build skipped");
                return Ok(());
            }

            let Some(build_cmd) = self.build_cmd.as_deref() else {
                debug!(
                    path = %path.display(),
                    "binary missing and no build command configured"
                );
                return Ok(());
            };

            debug!(path = %path.display(), cmd = build_cmd, "binary missing; running build command");

            // Build a shell command appropriate for the platform.
            let mut cmd = if cfg!(windows) {
                let mut c = Command::new("cmd");
                c.arg("/C").arg(build_cmd);
                c
            } else {
                let mut c = Command::new("sh");
                c.arg("-c").arg(build_cmd);
                c
            };

            cmd.stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null());

            let status = cmd.status().await.map_err(|err| {
                IsorunError::ProvisionError(format!(
                    "running build command '{build_cmd}': {err}"
                ))
            })?;

            if !status.success() {
                warn!(
                    cmd = build_cmd,
                    exit_code = status.code().unwrap_or(-1),
                    "build command exited nonzero"
                );
            }

            Ok(())
        })
    }
}
