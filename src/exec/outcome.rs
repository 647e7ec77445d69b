// src/exec/outcome.rs

use std::time::Duration;

use crate::errors::SpawnFailure;

/// Raw record of one finished (or failed) process run.
///
/// `status` is `None` whenever the process did not exit on its own: it was
/// killed by a signal, hit its timeout, or never started. `error` says which.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutcome {
    pub status: Option<i32>,
    pub signal: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    pub error: Option<SpawnFailure>,
    pub elapsed: Duration,
}

impl ProcessOutcome {
    /// Outcome for an executable that could not be started.
    pub fn failed_to_spawn(failure: SpawnFailure) -> Self {
        Self {
            error: Some(failure),
            ..Self::default()
        }
    }

    /// Exit status 0 with no recorded failure.
    pub fn success(&self) -> bool {
        self.status == Some(0) && self.error.is_none()
    }
}
