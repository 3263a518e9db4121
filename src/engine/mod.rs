// src/engine/mod.rs

//! Burst orchestration.
//!
//! - [`runner`] launches the processes in order, then awaits them one by one
//!   in the same order.
//! - [`report`] renders the human-readable lines written to stdout.

pub mod report;
pub mod runner;

pub use report::Reporter;
pub use runner::{BurstRunner, Phase, ProcessResult, RunOutcome, RunReport};
