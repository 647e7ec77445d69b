// src/command/mod.rs

//! Named sub-commands and the builder that accumulates them.
//!
//! - [`entry`] is a single [`MisoCommand`]: preset args bound to an executor.
//! - [`registry`] is the flat name -> command mapping plus `combine`.
//! - [`builder`] is the immutable fluent builder that produces registries.
//! - [`set`] is the trait behind `miso_command!` structs.

pub mod builder;
pub mod entry;
pub mod registry;
pub mod set;

pub use builder::{build_miso_command, MisoCommandBuilder};
pub use entry::{MisoCommand, NO_ARGS};
pub use registry::CommandRegistry;
pub use set::MisoCommandSet;
