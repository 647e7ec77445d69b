// src/exec/mod.rs

//! Process execution layer.
//!
//! This module is responsible for actually running the configured
//! executable, synchronously, and recording what happened.
//!
//! - [`options`] holds [`SpawnOptions`] and the call > build > default merge.
//! - [`outcome`] is the raw [`ProcessOutcome`] record of one run.
//! - [`spawner`] provides the `Spawner` trait and the concrete
//!   `SystemSpawner` used in production, which tests can replace with a fake.
//! - [`executor`] binds a path and base options to a spawner.

pub mod executor;
pub mod options;
pub mod outcome;
pub mod spawner;

pub use executor::MisoCommandExecutor;
pub use options::SpawnOptions;
pub use outcome::ProcessOutcome;
pub use spawner::{Spawner, SystemSpawner};
