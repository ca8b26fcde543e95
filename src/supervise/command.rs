// src/supervise/command.rs

use std::path::{Path, PathBuf};

/// An executable plus the argument vector to hand it, exactly as the caller
/// supplied them.
///
/// Arguments are forwarded verbatim; isorun never parses or rewrites them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    program: PathBuf,
    args: Vec<String>,
}

impl Command {
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Build the `tokio::process::Command` for this invocation.
    ///
    /// Stdio wiring and session setup stay with the invoker; this only maps
    /// program and arguments.
    pub fn to_tokio_command(&self) -> tokio::process::Command {
        let mut cmd = tokio::process::Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}
