// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod logging;

use std::io;

use tracing::debug;

use crate::cli::CliArgs;
use crate::config::{RunConfig, load_profile, resolve_run_config};
use crate::engine::{BurstRunner, RunReport};
use crate::errors::Result;
use crate::exec::TokioLauncher;

/// High-level entry point used by `main.rs`.
///
/// Resolves the run configuration (CLI over profile over defaults) once,
/// then runs a single burst against real processes, printing to stdout.
pub async fn run(args: CliArgs) -> Result<RunReport> {
    let profile = args.profile.as_ref().map(load_profile).transpose()?;
    let config = resolve_run_config(&args, profile.as_ref())?;
    debug!(?config, "resolved run configuration");

    run_burst(config, io::stdout()).await
}

/// Run one burst with the production launcher, writing report lines to `out`.
pub async fn run_burst<W: io::Write>(config: RunConfig, out: W) -> Result<RunReport> {
    let mut runner = BurstRunner::new(config, TokioLauncher::new(), out);
    runner.run().await
}
