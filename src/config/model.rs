// src/config/model.rs

use serde::Deserialize;

use crate::config::command::CommandDescriptor;

/// Number of processes launched when neither the CLI nor a profile says.
pub const DEFAULT_REPETITIONS: usize = 10;

/// Optional run profile as read from a TOML file.
///
/// ```toml
/// repetitions = 25
/// client = "./bin/client"
/// reap_on_abort = false
/// ```
///
/// Every key is optional; CLI arguments take precedence.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunProfile {
    #[serde(default)]
    pub repetitions: Option<usize>,

    /// Client executable path, replacing the host default.
    #[serde(default)]
    pub client: Option<String>,

    #[serde(default)]
    pub reap_on_abort: Option<bool>,
}

/// Fully resolved settings for one burst. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub repetitions: usize,
    pub command: CommandDescriptor,

    /// Await already-launched processes when a later launch reports
    /// "command not found". Off by default: those processes are abandoned.
    pub reap_on_abort: bool,
}

impl RunConfig {
    pub fn new(repetitions: usize, command: CommandDescriptor) -> Self {
        Self {
            repetitions,
            command,
            reap_on_abort: false,
        }
    }

    pub fn with_reap_on_abort(mut self, reap: bool) -> Self {
        self.reap_on_abort = reap;
        self
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(DEFAULT_REPETITIONS, CommandDescriptor::for_host())
    }
}
