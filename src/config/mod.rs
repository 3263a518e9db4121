// src/config/mod.rs

//! Run configuration for procburst.
//!
//! Responsibilities:
//! - Pick the client command for the host platform (`command.rs`).
//! - Define the optional TOML run profile and the resolved `RunConfig`
//!   (`model.rs`).
//! - Load, validate and merge the profile with CLI arguments (`loader.rs`).

pub mod command;
pub mod loader;
pub mod model;

pub use command::{CommandDescriptor, HostPlatform};
pub use loader::{load_profile, resolve_run_config, validate_profile};
pub use model::{DEFAULT_REPETITIONS, RunConfig, RunProfile};
