// src/config/model.rs

use std::time::Duration;

use serde::Deserialize;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [binary]
/// path = "./target/release/subordinate"
/// build = "cargo build --release"
///
/// [supervise]
/// timeout_seconds = 5
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ConfigFile {
    /// Subordinate binary location and provisioning, from `[binary]`.
    #[serde(default)]
    pub binary: BinarySection,

    /// Supervision behaviour, from `[supervise]`.
    #[serde(default)]
    pub supervise: SuperviseSection,
}

/// `[binary]` section.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct BinarySection {
    /// Path to the subordinate executable.
    ///
    /// If `None`, the binary must be supplied via `--binary`.
    #[serde(default)]
    pub path: Option<String>,

    /// Shell command that produces the binary when it is missing.
    ///
    /// If `None`, a missing binary is left to the launch step, which then
    /// fails with a launch error.
    #[serde(default)]
    pub build: Option<String>,
}

/// `[supervise]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct SuperviseSection {
    /// How long the subordinate may run before its process group is killed.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_timeout_seconds() -> u64 {
    5
}

impl Default for SuperviseSection {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl SuperviseSection {
    /// The configured timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
