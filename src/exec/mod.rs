// src/exec/mod.rs

//! Process launching layer.
//!
//! The runner talks to a [`Launcher`] instead of `tokio::process` directly,
//! so tests can substitute a scripted launcher while production uses
//! [`TokioLauncher`].
//!
//! - [`backend`] defines the `Launcher` / `ProcessHandle` traits.
//! - [`process`] spawns real child processes with `tokio::process::Command`.

pub mod backend;
pub mod process;

pub use backend::{Launcher, ProcessHandle, WaitFuture};
pub use process::{TokioLauncher, TokioProcess, exit_code_of};
