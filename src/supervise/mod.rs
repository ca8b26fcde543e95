// src/supervise/mod.rs

//! Process supervision layer.
//!
//! This module owns the lifecycle of one subordinate invocation: the child
//! is spawned as the leader of a fresh session, its stdout is drained into a
//! buffer, and the whole process group is SIGKILLed if the wall-clock budget
//! elapses first.
//!
//! - [`command`] is the immutable description of what to run.
//! - [`group`] owns the process group created for the child.
//! - [`invoker`] runs the timeout-bounded wait and produces the
//!   [`SupervisionResult`].

pub mod command;
pub mod group;
pub mod invoker;

pub use command::Command;
pub use group::ProcessGroupHandle;
pub use invoker::{SupervisionResult, invoke};
