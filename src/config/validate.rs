// src/config/validate.rs

use crate::config::model::ConfigFile;
use crate::errors::{IsorunError, Result};

/// Run basic semantic validation against a loaded configuration.
///
/// This checks:
/// - `supervise.timeout_seconds` is at least 1
/// - `binary.path`, if present, is non-empty
/// - `binary.build`, if present, is non-empty
pub fn validate_config(cfg: &ConfigFile) -> Result<()> {
    if cfg.supervise.timeout_seconds == 0 {
        return Err(IsorunError::ConfigError(
            "supervise.timeout_seconds must be at least 1".to_string(),
        ));
    }

    if is_blank(&cfg.binary.path) {
        return Err(IsorunError::ConfigError(
            "binary.path must not be empty".to_string(),
        ));
    }

    if is_blank(&cfg.binary.build) {
        return Err(IsorunError::ConfigError(
            "binary.build must not be empty".to_string(),
        ));
    }

    Ok(())
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| s.trim().is_empty())
}
