// src/provision/mod.rs

//! Subordinate binary provisioning.
//!
//! Before supervision starts, isorun checks that the subordinate binary
//! exists and, if it does not, runs the configured build command once.
//! Callers talk to a [`ProvisionBackend`] instead of invoking the build
//! directly so tests can substitute a backend that never spawns processes.

pub mod backend;

pub use backend::{ProvisionBackend, ShellBuildBackend};
