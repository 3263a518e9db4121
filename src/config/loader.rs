// src/config/loader.rs

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::cli::CliArgs;
use crate::config::command::CommandDescriptor;
use crate::config::model::{DEFAULT_REPETITIONS, RunConfig, RunProfile};
use crate::errors::{BurstError, Result};

/// Load a run profile from a given path and validate it.
pub fn load_profile(path: impl AsRef<Path>) -> Result<RunProfile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| {
        BurstError::Profile(format!("reading profile at {}: {e}", path.display()))
    })?;

    let profile: RunProfile = toml::from_str(&contents)?;
    validate_profile(&profile)?;

    debug!(path = %path.display(), ?profile, "loaded run profile");
    Ok(profile)
}

pub fn validate_profile(profile: &RunProfile) -> Result<()> {
    if let Some(client) = &profile.client {
        if client.trim().is_empty() {
            return Err(BurstError::Profile(
                "`client` must not be empty".to_string(),
            ));
        }
    }
    Ok(())
}

/// Merge CLI arguments over an optional profile over built-in defaults.
pub fn resolve_run_config(args: &CliArgs, profile: Option<&RunProfile>) -> Result<RunConfig> {
    let repetitions = args
        .repetitions
        .map(clamp_repetitions)
        .or_else(|| profile.and_then(|p| p.repetitions))
        .unwrap_or(DEFAULT_REPETITIONS);

    let command = match args
        .client
        .as_deref()
        .or_else(|| profile.and_then(|p| p.client.as_deref()))
    {
        Some(client) if client.trim().is_empty() => {
            return Err(BurstError::Profile(
                "client path must not be empty".to_string(),
            ));
        }
        Some(client) => CommandDescriptor::new(client),
        None => CommandDescriptor::for_host(),
    };

    let reap_on_abort =
        args.reap_on_abort || profile.and_then(|p| p.reap_on_abort).unwrap_or(false);

    Ok(RunConfig::new(repetitions, command).with_reap_on_abort(reap_on_abort))
}

/// Negative counts mean "launch nothing".
fn clamp_repetitions(count: i64) -> usize {
    if count <= 0 {
        0
    } else {
        usize::try_from(count).unwrap_or(usize::MAX)
    }
}
