//! Command Registry
//!
//! Immutable name to command table, built once at startup and handed to the
//! REPL.

use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;

use tracing::debug;

use super::handlers;
use super::Session;
use crate::error::Result;

// == Reply ==
/// What the REPL should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Control {
    #[default]
    Continue,
    Exit,
}

/// Console output of a command plus the loop control signal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    pub lines: Vec<String>,
    pub control: Control,
}

impl Reply {
    pub fn lines(lines: Vec<String>) -> Self {
        Self {
            lines,
            control: Control::Continue,
        }
    }

    pub fn exit(lines: Vec<String>) -> Self {
        Self {
            lines,
            control: Control::Exit,
        }
    }
}

// == Handler Types ==
/// Arguments passed to every handler.
pub struct CommandContext<'a> {
    pub session: &'a mut Session,
    pub registry: &'a CommandRegistry,
    /// First argument after the command name, or `""`
    pub arg: &'a str,
}

pub type CommandFuture<'a> = Pin<Box<dyn Future<Output = Result<Reply>> + Send + 'a>>;

pub type Handler = for<'a> fn(CommandContext<'a>) -> CommandFuture<'a>;

/// A named command.
#[derive(Clone, Copy)]
pub struct Command {
    pub name: &'static str,
    pub description: &'static str,
    pub handler: Handler,
}

// == Command Registry ==
/// Lookup table of commands, ordered by name.
#[derive(Clone)]
pub struct CommandRegistry {
    commands: BTreeMap<&'static str, Command>,
}

impl CommandRegistry {
    // == Constructors ==
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            commands: BTreeMap::new(),
        }
    }

    /// The explorer's command set.
    pub fn builtin() -> Self {
        Self::new()
            .with("catch", "Attempts to catch the given pokemon.", handlers::catch)
            .with("exit", "Exit the Pokedex", handlers::exit)
            .with(
                "explore",
                "Lists pokemon available in the given area.",
                handlers::explore,
            )
            .with("help", "Displays a help message", handlers::help)
            .with(
                "inspect",
                "Shows details of a pokemon you have caught.",
                handlers::inspect,
            )
            .with(
                "map",
                "Displays the next page of location areas.",
                handlers::map,
            )
            .with(
                "mapb",
                "Displays the previous page of location areas.",
                handlers::mapb,
            )
            .with("pokedex", "Lists the pokemon you have caught.", handlers::pokedex)
    }

    /// Adds a command, replacing any existing one with the same name.
    pub fn with(mut self, name: &'static str, description: &'static str, handler: Handler) -> Self {
        self.commands.insert(
            name,
            Command {
                name,
                description,
                handler,
            },
        );
        self
    }

    // == Lookup ==
    pub fn get(&self, name: &str) -> Option<&Command> {
        self.commands.get(name)
    }

    /// Commands in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.values()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    // == Execute ==
    /// Runs the command `name`, or returns `None` if no such command exists.
    pub async fn execute(
        &self,
        session: &mut Session,
        name: &str,
        arg: &str,
    ) -> Option<Result<Reply>> {
        let command = self.get(name)?;
        debug!(command = command.name, arg, "dispatching command");

        let ctx = CommandContext {
            session,
            registry: self,
            arg,
        };
        Some((command.handler)(ctx).await)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_commands() {
        let registry = CommandRegistry::builtin();
        let names: Vec<_> = registry.iter().map(|c| c.name).collect();

        assert_eq!(
            names,
            vec!["catch", "exit", "explore", "help", "inspect", "map", "mapb", "pokedex"]
        );
    }

    #[test]
    fn test_lookup_is_exact() {
        let registry = CommandRegistry::builtin();

        assert!(registry.get("map").is_some());
        assert!(registry.get("MAP").is_none());
        assert!(registry.get("ma").is_none());
    }

    #[test]
    fn test_with_replaces_existing() {
        let registry = CommandRegistry::new()
            .with("help", "first", handlers::help)
            .with("help", "second", handlers::help);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("help").map(|c| c.description), Some("second"));
    }
}
