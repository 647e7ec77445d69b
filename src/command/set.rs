// src/command/set.rs

use std::sync::Arc;

use crate::command::CommandRegistry;
use crate::exec::{MisoCommandExecutor, SpawnOptions};

/// Constructors and registry view for structs declared with
/// [`miso_command!`](crate::miso_command).
///
/// These live on a trait so the struct's inherent namespace holds nothing
/// but the command accessors. A command may be called `new` or `registry`;
/// reach the trait items with `<T as MisoCommandSet>::new(..)` in that case.
pub trait MisoCommandSet: Sized {
    /// Bind every command of the set to one shared executor.
    fn from_executor(executor: Arc<MisoCommandExecutor>) -> Self;

    /// The same commands as a dynamic registry.
    fn registry(&self) -> CommandRegistry;

    fn new(path: impl Into<String>, options: SpawnOptions) -> Self {
        Self::from_executor(Arc::new(MisoCommandExecutor::new(path, options)))
    }
}
