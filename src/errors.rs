// src/errors.rs

//! Crate-wide error types.
//!
//! - [`MisoError`] is what fallible library calls return (unknown command
//!   names, JSON views, config loading).
//! - [`SpawnFailure`] is never returned by an invocation. It is recorded on
//!   the [`ProcessOutcome`](crate::exec::ProcessOutcome) so callers inspect
//!   it after the fact, the same way they inspect the exit code.

use std::io;
use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MisoError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("JSON deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, MisoError>;

/// Why a process did not run to a normal exit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpawnFailure {
    /// The executable could not be started at all.
    #[error("failed to spawn '{path}': {message}")]
    Spawn {
        path: String,
        kind: io::ErrorKind,
        message: String,
    },

    /// The process outlived its timeout and was killed.
    #[error("process timed out after {limit:?}")]
    TimedOut { limit: Duration },

    /// The process wrote more than `max_buffer` bytes to one stream and was killed.
    #[error("{stream} exceeded max buffer of {limit} bytes")]
    MaxBufferExceeded { stream: Stream, limit: usize },

    /// Reading, writing or waiting on the child failed after it started.
    #[error("i/o error on running process: {message}")]
    Io { kind: io::ErrorKind, message: String },
}

impl SpawnFailure {
    pub(crate) fn spawn(path: &str, err: &io::Error) -> Self {
        SpawnFailure::Spawn {
            path: path.to_string(),
            kind: err.kind(),
            message: err.to_string(),
        }
    }

    pub(crate) fn io(err: &io::Error) -> Self {
        SpawnFailure::Io {
            kind: err.kind(),
            message: err.to_string(),
        }
    }

    /// True for failures where the executable never ran.
    pub fn is_spawn(&self) -> bool {
        matches!(self, SpawnFailure::Spawn { .. })
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, SpawnFailure::TimedOut { .. })
    }
}

/// Captured output stream of a child process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl std::fmt::Display for Stream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stream::Stdout => f.write_str("stdout"),
            Stream::Stderr => f.write_str("stderr"),
        }
    }
}
