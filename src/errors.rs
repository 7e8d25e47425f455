// src/errors.rs

//! Crate-wide error type and `Result` alias.
//!
//! Every way a launch can fail maps to one `LaunchError` variant, so callers
//! can tell "the tool is missing" from "the OS refused to start it" from "the
//! tool ran and failed" (the last one is not an error at all: it is a normal
//! exit code).

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::exit_codes;

/// Which child pipe a relay error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    Stdout,
    Stderr,
}

impl fmt::Display for StreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamKind::Stdout => f.write_str("stdout"),
            StreamKind::Stderr => f.write_str("stderr"),
        }
    }
}

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("executable not found at {}", path.display())]
    ExecutableNotFound { path: PathBuf },

    #[error("failed to spawn '{program}': {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("error relaying child {stream}: {source}")]
    StreamRead {
        stream: StreamKind,
        #[source]
        source: io::Error,
    },

    #[error("error waiting for child process: {0}")]
    Wait(#[source] io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LaunchError {
    /// Process exit code the launcher should terminate with for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::ExecutableNotFound { .. } => exit_codes::EXECUTABLE_NOT_FOUND,
            LaunchError::SpawnFailed { .. } => exit_codes::SPAWN_FAILED,
            LaunchError::StreamRead { .. } | LaunchError::Wait(_) => exit_codes::RELAY_FAILED,
            LaunchError::ConfigError(_)
            | LaunchError::TomlError(_)
            | LaunchError::Other(_) => exit_codes::USAGE_ERROR,
        }
    }
}

pub type Result<T> = std::result::Result<T, LaunchError>;
