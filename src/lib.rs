// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod provision;
pub mod supervise;

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use tracing::debug;

use crate::cli::CliArgs;
use crate::config::load_or_default;
use crate::provision::{ProvisionBackend, ShellBuildBackend};
use crate::supervise::{Command, SupervisionResult, invoke};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - binary provisioning (build-if-missing)
/// - the supervised invocation itself
/// - outcome relay (stdout passthrough, diagnostics)
///
/// Returns the process exit code for `main` to apply: 0 when the
/// subordinate completed, 1 when it timed out or could not be launched.
pub async fn run(args: CliArgs) -> Result<i32> {
    let config_path = PathBuf::from(&args.config);
    let cfg = load_or_default(&config_path)?;

    let binary: PathBuf = args
        .binary
        .clone()
        .or_else(|| cfg.binary.path.clone())
        .map(PathBuf::from)
        .ok_or_else(|| {
            anyhow!(
                "no subordinate binary configured; pass --binary or set [binary].path in {}",
                config_path.display()
            )
        })?;

    let timeout_secs = args.timeout_secs.unwrap_or(cfg.supervise.timeout_seconds);
    if timeout_secs == 0 {
        return Err(anyhow!("timeout must be at least one second"));
    }
    let timeout = Duration::from_secs(timeout_secs);

    if args.no_provision {
        debug!("provisioning skipped (--no-provision)");
    } else {
        let mut backend = ShellBuildBackend::new(cfg.binary.build.clone());
        backend.ensure_binary(&binary).await?;
    }

    let command = Command::new(&binary, args.args.clone());
    let outcome = invoke(&command, timeout).await?;
    relay_outcome(outcome)
}

/// Map a supervision outcome onto the CLI contract: verbatim stdout relay on
/// completion, a fixed diagnostic line on timeout, `Error: ...` on launch
/// failure.
fn relay_outcome(outcome: SupervisionResult) -> Result<i32> {
    match outcome {
        SupervisionResult::Completed { output } => {
            // No added framing, no added newline.
            let mut stdout = io::stdout();
            stdout
                .write_all(output.as_bytes())
                .context("relaying subordinate output")?;
            stdout.flush().context("flushing relayed output")?;
            Ok(0)
        }
        SupervisionResult::TimedOut => {
            eprintln!("Command timed out");
            Ok(1)
        }
        SupervisionResult::LaunchFailed { message } => {
            eprintln!("Error: {message}");
            Ok(1)
        }
    }
}
