//! Single-field entry capture for menu-driven commands
//!
//! A prompt is bound to one registered command that takes exactly one
//! argument. Confirming passes the captured value to that command as if it
//! had been typed with one `~` argument, without an input echo. Cancelling
//! leaves the console untouched.

use crate::core::console::{Console, DispatchOutcome};
use tracing::{debug, instrument};

/// A pending entry prompt
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "an entry prompt does nothing until it is confirmed or cancelled"]
pub struct EntryPrompt {
    command: String,
    value: String,
}

impl EntryPrompt {
    pub(crate) fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            value: String::new(),
        }
    }

    /// Command the prompt is bound to
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Value captured so far
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn push_str(&mut self, text: &str) {
        self.value.push_str(text);
    }

    /// Hand the captured value to the bound command
    #[instrument(skip_all, fields(command = %self.command))]
    pub fn confirm(self, console: &mut Console) -> DispatchOutcome {
        debug!("Entry prompt confirmed");
        console.dispatch(&self.command, &[self.value])
    }

    /// Abandon the prompt
    pub fn cancel(self) {
        debug!("Entry prompt for {} cancelled", self.command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::ErrorStyle, core::handler::CommandContext};

    fn console_with_directory_command() -> Console {
        let mut console = Console::new(ErrorStyle::Collapsed);
        console
            .registry_mut()
            .register(
                "set_minecraft_directory",
                1,
                |args: &[String], ctx: &mut CommandContext<'_>| {
                    ctx.session_mut().set_save_directory(args[0].clone());
                    ctx.emit(&format!("set to {}", args[0]));
                    Ok(())
                },
            )
            .unwrap();
        console
    }

    #[test]
    fn test_confirm_passes_value_without_echo() {
        let mut console = console_with_directory_command();
        let mut prompt = console.open_prompt("set_minecraft_directory").unwrap();
        prompt.push_str("C:\\Saves");
        prompt.push_str("~with tilde");

        assert_eq!(prompt.confirm(&mut console), DispatchOutcome::Invoked);
        assert_eq!(
            console.session().save_directory(),
            Some("C:\\Saves~with tilde")
        );
        assert_eq!(
            console.transcript().lines().collect::<Vec<_>>(),
            vec!["set to C:\\Saves~with tilde"]
        );
    }

    #[test]
    fn test_cancel_leaves_console_untouched() {
        let console = console_with_directory_command();
        let mut prompt = console.open_prompt("set_minecraft_directory").unwrap();
        prompt.set_value("/tmp/saves");
        prompt.cancel();

        assert_eq!(console.session().save_directory(), None);
        assert!(console.transcript().is_empty());
    }

    #[test]
    fn test_confirm_after_unregister_reports_unknown_command() {
        let mut console = console_with_directory_command();
        let prompt = console.open_prompt("set_minecraft_directory").unwrap();
        console.registry_mut().unregister("set_minecraft_directory");

        assert_eq!(prompt.confirm(&mut console), DispatchOutcome::UnknownCommand);
        assert_eq!(console.session().save_directory(), None);
    }
}
