// src/command/registry.rs

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::ops::Index;
use std::sync::Arc;

use crate::command::MisoCommand;
use crate::errors::{MisoError, Result};
use crate::exec::{MisoCommandExecutor, SpawnOptions};
use crate::result::MisoCommandResult;

/// Flat mapping from command name to [`MisoCommand`].
///
/// Registries are values: [`combine`](Self::combine) builds a new one and
/// leaves its inputs alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandRegistry {
    commands: BTreeMap<String, MisoCommand>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-entry registry for `name`.
    pub fn entry(
        name: impl Into<String>,
        args: Vec<String>,
        executor: Arc<MisoCommandExecutor>,
    ) -> Self {
        Self::from_command(MisoCommand::new(name, args, executor))
    }

    pub fn from_command(command: MisoCommand) -> Self {
        let mut commands = BTreeMap::new();
        commands.insert(command.name().to_string(), command);
        Self { commands }
    }

    /// All entries of `first` and `second`; `second` wins on shared names.
    pub fn combine(first: &CommandRegistry, second: &CommandRegistry) -> CommandRegistry {
        let mut commands = first.commands.clone();
        commands.extend(
            second
                .commands
                .iter()
                .map(|(name, cmd)| (name.clone(), cmd.clone())),
        );
        Self { commands }
    }

    pub fn get(&self, name: &str) -> Option<&MisoCommand> {
        self.commands.get(name)
    }

    /// Like [`get`](Self::get), but a missing name is an error.
    pub fn command(&self, name: &str) -> Result<&MisoCommand> {
        self.get(name)
            .ok_or_else(|| MisoError::UnknownCommand(name.to_string()))
    }

    /// Look up `name` and run it.
    pub fn invoke<S: AsRef<str>>(
        &self,
        name: &str,
        extra: &[S],
        options: Option<&SpawnOptions>,
    ) -> Result<MisoCommandResult> {
        Ok(self.command(name)?.invoke(extra, options))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, MisoCommand> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Index<&str> for CommandRegistry {
    type Output = MisoCommand;

    /// Panics on unknown names, like indexing a map.
    fn index(&self, name: &str) -> &MisoCommand {
        match self.commands.get(name) {
            Some(cmd) => cmd,
            None => panic!("unknown command: {name}"),
        }
    }
}

impl<'a> IntoIterator for &'a CommandRegistry {
    type Item = (&'a String, &'a MisoCommand);
    type IntoIter = btree_map::Iter<'a, String, MisoCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}
