// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! Everything after the options is forwarded verbatim to the subordinate
//! binary; isorun never interprets those arguments itself.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `isorun`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "isorun",
    version,
    about = "Run a subordinate binary in its own process group with a hard wall-clock timeout.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `Isorun.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Isorun.toml")]
    pub config: String,

    /// Subordinate binary to supervise.
    ///
    /// Overrides `[binary].path` from the config file.
    #[arg(long, value_name = "PATH")]
    pub binary: Option<String>,

    /// Wall-clock budget for the subordinate, in seconds.
    ///
    /// Overrides `[supervise].timeout_seconds` from the config file.
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Skip the build-if-missing provisioning step.
    #[arg(long)]
    pub no_provision: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `ISORUN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Arguments passed through to the subordinate binary, verbatim.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
    pub args: Vec<String>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
