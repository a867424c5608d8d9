//! Handler contract shared by every registered command

use crate::{
    core::{
        registry::CommandRegistry,
        session::SessionState,
        transcript::{EntryKind, Transcript},
    },
    error::Result,
};

/// Something that can run a command with its positional arguments.
///
/// The dispatcher only invokes a handler after checking that `args.len()`
/// equals the arity the command was registered with.
pub trait CommandHandler {
    fn invoke(&self, args: &[String], ctx: &mut CommandContext<'_>) -> Result<()>;
}

impl<F> CommandHandler for F
where
    F: Fn(&[String], &mut CommandContext<'_>) -> Result<()>,
{
    fn invoke(&self, args: &[String], ctx: &mut CommandContext<'_>) -> Result<()> {
        self(args, ctx)
    }
}

/// Console state lent to a handler for the duration of one call
pub struct CommandContext<'a> {
    command: &'a str,
    session: &'a mut SessionState,
    transcript: &'a mut Transcript,
    registry: &'a CommandRegistry,
}

impl<'a> CommandContext<'a> {
    pub(crate) fn new(
        command: &'a str,
        session: &'a mut SessionState,
        transcript: &'a mut Transcript,
        registry: &'a CommandRegistry,
    ) -> Self {
        Self {
            command,
            session,
            transcript,
            registry,
        }
    }

    /// Name the handler was dispatched under
    pub fn command(&self) -> &str {
        self.command
    }

    /// Write output text to the transcript
    pub fn emit(&mut self, text: &str) {
        self.transcript.append(EntryKind::Output, text);
    }

    pub fn session(&self) -> &SessionState {
        &*self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionState {
        &mut *self.session
    }

    pub fn transcript_mut(&mut self) -> &mut Transcript {
        &mut *self.transcript
    }

    /// Names of all registered commands, in registration order
    pub fn command_names(&self) -> impl Iterator<Item = &str> + Clone + '_ {
        self.registry.names()
    }
}
