// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BurstError {
    #[error("Profile error: {0}")]
    Profile(String),

    #[error("failed to launch process #{index}: {source}")]
    Launch {
        index: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("failed waiting for process #{index}: {source}")]
    Wait {
        index: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write report line: {0}")]
    Output(#[source] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, BurstError>;
