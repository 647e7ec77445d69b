//! Statically named command sets.

/// Declare a struct with one accessor per sub-command.
///
/// Unlike a [`CommandRegistry`](crate::CommandRegistry) lookup, a misspelt
/// command name here is a compile error, and so is registering the same name
/// twice. Construction goes through [`MisoCommandSet`](crate::MisoCommandSet),
/// so any identifier is a valid command name.
///
/// ```no_run
/// use misocmd::{miso_command, MisoCommandSet, SpawnOptions, NO_ARGS};
///
/// miso_command! {
///     /// The handful of git commands this tool needs.
///     pub struct Git {
///         status => ["status", "--short"],
///         log => ["log", "--oneline"],
///         raw,
///     }
/// }
///
/// let git = Git::new("git", SpawnOptions::default());
/// let changed = git.status().call(NO_ARGS).as_lines();
/// let head = git.log().call(&["-1"]).as_text();
/// let version = git.raw().call(&["--version"]).as_text();
/// # let _ = (changed, head, version);
/// ```
#[macro_export]
macro_rules! miso_command {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( $cmd:ident $( => [ $( $arg:expr ),* $(,)? ] )? ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $( $cmd: $crate::MisoCommand, )*
        }

        impl $name {
            $(
                pub fn $cmd(&self) -> &$crate::MisoCommand {
                    &self.$cmd
                }
            )*
        }

        impl $crate::MisoCommandSet for $name {
            fn from_executor(executor: ::std::sync::Arc<$crate::MisoCommandExecutor>) -> Self {
                Self {
                    $(
                        $cmd: $crate::MisoCommand::new(
                            ::core::stringify!($cmd),
                            {
                                let args: ::std::vec::Vec<::std::string::String> =
                                    ::std::vec![ $( $( ::std::string::String::from($arg) ),* )? ];
                                args
                            },
                            ::std::sync::Arc::clone(&executor),
                        ),
                    )*
                }
            }

            fn registry(&self) -> $crate::CommandRegistry {
                let registry = $crate::CommandRegistry::new();
                $(
                    let registry = $crate::CommandRegistry::combine(
                        &registry,
                        &$crate::CommandRegistry::from_command(self.$cmd.clone()),
                    );
                )*
                registry
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{MisoCommandSet, SpawnOptions};

    crate::miso_command! {
        struct Listing {
            list,
            long => ["-l"],
            everything => ["-l", "-a",],
        }
    }

    crate::miso_command! {
        struct Project {
            new => ["new"],
            registry => ["login"],
            from_executor,
        }
    }

    #[test]
    fn macro_binds_preset_args_per_command() {
        let listing = Listing::new("ls", SpawnOptions::default());

        assert_eq!(listing.list().name(), "list");
        assert!(listing.list().args().is_empty());
        assert_eq!(listing.long().args(), &["-l".to_string()]);
        assert_eq!(
            listing.everything().args(),
            &["-l".to_string(), "-a".to_string()]
        );
    }

    #[test]
    fn macro_registry_holds_every_command() {
        let listing = Listing::new("ls", SpawnOptions::default());
        let registry = listing.registry();

        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            vec!["everything", "list", "long"]
        );
        assert_eq!(registry["long"], *listing.long());
    }

    #[test]
    fn commands_may_share_names_with_set_methods() {
        let project = <Project as MisoCommandSet>::new("cargo", SpawnOptions::default());

        assert_eq!(project.new().args(), &["new".to_string()]);
        assert_eq!(project.registry().name(), "registry");
        assert!(project.from_executor().args().is_empty());

        let registry = MisoCommandSet::registry(&project);
        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            vec!["from_executor", "new", "registry"]
        );
    }
}
