// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `procburst`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "procburst",
    version,
    about = "Launch a burst of concurrent client processes and report their exit codes.",
    long_about = None
)]
pub struct CliArgs {
    /// Number of client processes to launch.
    ///
    /// Default: 10 (or `repetitions` from the profile, if one is given).
    /// A negative count launches nothing.
    #[arg(value_name = "REPETITIONS", allow_negative_numbers = true)]
    pub repetitions: Option<i64>,

    /// Optional TOML run profile.
    #[arg(long, value_name = "PATH")]
    pub profile: Option<PathBuf>,

    /// Client executable to launch instead of the host default
    /// (`./client`, or `.\client.exe` on Windows).
    #[arg(long, value_name = "PATH")]
    pub client: Option<String>,

    /// After a "command not found" abort, still wait for the processes that
    /// were already launched and report their exit codes.
    #[arg(long)]
    pub reap_on_abort: bool,

    /// Logging level (error, warn, info, debug, trace). Logs go to stderr.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
