//! Command registry
//!
//! Maps command names to their fixed arity and handler. Names keep the order
//! in which they were first registered; re-registering a name replaces its
//! descriptor in place.

use crate::{
    core::{
        handler::{CommandContext, CommandHandler},
        tokenizer::DELIMITER,
    },
    error::{ConsoleError, Result},
};
use std::{collections::HashMap, fmt};
use tracing::{debug, instrument};

/// A registered command
pub struct CommandDescriptor {
    name: String,
    arity: usize,
    handler: Box<dyn CommandHandler>,
}

impl CommandDescriptor {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Exact number of arguments the handler takes
    pub const fn arity(&self) -> usize {
        self.arity
    }

    pub fn handler(&self) -> &dyn CommandHandler {
        self.handler.as_ref()
    }
}

impl fmt::Debug for CommandDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDescriptor")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// Registry of console commands
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: Vec<CommandDescriptor>,
    index: HashMap<String, usize>,
}

impl CommandRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a closure as the handler for `name`
    pub fn register<F>(&mut self, name: impl Into<String>, arity: usize, handler: F) -> Result<()>
    where
        F: Fn(&[String], &mut CommandContext<'_>) -> Result<()> + 'static,
    {
        self.register_handler(name, arity, Box::new(handler))
    }

    /// Register any handler object for `name`, overwriting an existing entry
    #[instrument(skip(self, name, handler))]
    pub fn register_handler(
        &mut self,
        name: impl Into<String>,
        arity: usize,
        handler: Box<dyn CommandHandler>,
    ) -> Result<()> {
        let name = name.into();
        Self::validate_name(&name)?;

        let descriptor = CommandDescriptor {
            name: name.clone(),
            arity,
            handler,
        };

        if let Some(&slot) = self.index.get(&name) {
            debug!("Replacing command {} (arity {})", name, arity);
            self.commands[slot] = descriptor;
        } else {
            debug!("Registering command {} (arity {})", name, arity);
            self.index.insert(name, self.commands.len());
            self.commands.push(descriptor);
        }
        Ok(())
    }

    /// Remove a command, returning its descriptor if it was registered
    #[instrument(skip(self))]
    pub fn unregister(&mut self, name: &str) -> Option<CommandDescriptor> {
        let slot = self.index.remove(name)?;
        let removed = self.commands.remove(slot);
        for position in self.index.values_mut() {
            if *position > slot {
                *position -= 1;
            }
        }
        debug!("Unregistered command {}", name);
        Some(removed)
    }

    /// Look up a command by exact name
    pub fn lookup(&self, name: &str) -> Option<&CommandDescriptor> {
        self.index.get(name).map(|&slot| &self.commands[slot])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Registered names in registration order. Call again to restart.
    pub fn names(&self) -> impl Iterator<Item = &str> + Clone + '_ {
        self.commands.iter().map(CommandDescriptor::name)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Reject names the tokenizer could never produce
    fn validate_name(name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(ConsoleError::invalid_command_name(name, "name is empty"));
        }
        if name.contains(DELIMITER) {
            return Err(ConsoleError::invalid_command_name(
                name,
                format!("name contains the delimiter '{DELIMITER}'"),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_: &[String], _: &mut CommandContext<'_>) -> Result<()> {
        Ok(())
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = CommandRegistry::new();
        registry.register("clear", 0, noop).unwrap();
        registry.register("set_y_level", 1, noop).unwrap();

        let descriptor = registry.lookup("set_y_level").unwrap();
        assert_eq!(descriptor.name(), "set_y_level");
        assert_eq!(descriptor.arity(), 1);
        assert!(registry.lookup("Clear").is_none());
    }

    #[test]
    fn test_names_follow_registration_order() {
        let mut registry = CommandRegistry::new();
        for name in ["b", "a", "c"] {
            registry.register(name, 0, noop).unwrap();
        }
        let names = registry.names();
        assert_eq!(names.clone().collect::<Vec<_>>(), vec!["b", "a", "c"]);
        assert_eq!(names.count(), 3);
    }

    #[test]
    fn test_reregister_overwrites_in_place() {
        let mut registry = CommandRegistry::new();
        registry.register("a", 0, noop).unwrap();
        registry.register("b", 0, noop).unwrap();
        registry.register("a", 2, noop).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.lookup("a").unwrap().arity(), 2);
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_unregister_reindexes() {
        let mut registry = CommandRegistry::new();
        for name in ["a", "b", "c"] {
            registry.register(name, 0, noop).unwrap();
        }
        let removed = registry.unregister("a").unwrap();
        assert_eq!(removed.name(), "a");
        assert!(registry.unregister("a").is_none());
        assert_eq!(registry.lookup("c").unwrap().name(), "c");
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["b", "c"]);
    }

    #[test]
    fn test_rejects_untypeable_names() {
        let mut registry = CommandRegistry::new();
        for name in ["", "a~b", "~"] {
            let err = registry.register(name, 0, noop).unwrap_err();
            assert!(matches!(err, ConsoleError::InvalidCommandName { .. }));
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn test_accepts_names_with_whitespace() {
        let mut registry = CommandRegistry::new();
        registry.register("open world", 1, noop).unwrap();
        registry.register(" padded ", 0, noop).unwrap();

        assert_eq!(registry.lookup("open world").unwrap().arity(), 1);
        assert!(registry.contains(" padded "));
        assert!(!registry.contains("padded"));
    }
}
