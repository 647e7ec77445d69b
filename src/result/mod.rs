// src/result/mod.rs

//! Read-only views over one finished process run.
//!
//! Every accessor re-derives its value from the same immutable
//! [`ProcessOutcome`]; nothing is cached, so calling a view twice always
//! gives the same answer.

pub mod blob;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::{Result, SpawnFailure};
use crate::exec::ProcessOutcome;

pub use blob::Blob;

/// Result of invoking a registered command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MisoCommandResult {
    outcome: ProcessOutcome,
}

impl MisoCommandResult {
    pub fn new(outcome: ProcessOutcome) -> Self {
        Self { outcome }
    }

    /// The raw outcome as reported by the spawner.
    pub fn spawn_result(&self) -> &ProcessOutcome {
        &self.outcome
    }

    /// Exit code, or `None` if the process did not exit on its own.
    pub fn exit_code(&self) -> Option<i32> {
        self.outcome.status
    }

    pub fn signal(&self) -> Option<i32> {
        self.outcome.signal
    }

    pub fn error(&self) -> Option<&SpawnFailure> {
        self.outcome.error.as_ref()
    }

    pub fn success(&self) -> bool {
        self.outcome.success()
    }

    /// Stdout decoded as UTF-8. Invalid sequences become U+FFFD.
    pub fn as_text(&self) -> String {
        String::from_utf8_lossy(&self.outcome.stdout).into_owned()
    }

    pub fn stderr_text(&self) -> String {
        String::from_utf8_lossy(&self.outcome.stderr).into_owned()
    }

    /// Stdout parsed as a JSON document.
    ///
    /// A literal `null` parses to `Value::Null`; anything that is not JSON is
    /// a [`MisoError::Deserialize`](crate::errors::MisoError::Deserialize).
    pub fn as_object(&self) -> Result<Value> {
        self.as_json()
    }

    /// Stdout deserialized into `T`.
    pub fn as_json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.as_text())?)
    }

    /// Raw stdout bytes as a [`Blob`].
    pub fn as_blob(&self, mime_type: Option<&str>) -> Blob {
        Blob::new(self.outcome.stdout.clone(), mime_type)
    }

    /// Stdout split on `'\n'`.
    ///
    /// Empty segments are kept, so output ending in a newline yields a
    /// trailing `""`. `"\r"` is not stripped.
    pub fn as_lines(&self) -> Vec<String> {
        self.as_text().split('\n').map(str::to_string).collect()
    }
}

impl From<ProcessOutcome> for MisoCommandResult {
    fn from(outcome: ProcessOutcome) -> Self {
        Self::new(outcome)
    }
}
