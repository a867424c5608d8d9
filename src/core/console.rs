//! Command dispatch
//!
//! A `Console` owns the registry, session state and transcript. Each submitted
//! line is echoed, tokenized, resolved against the registry, checked for arity
//! and handed to its handler. Every failure ends up as transcript text; nothing
//! escapes `submit`.

use crate::{
    config::{Config, ErrorStyle},
    core::{
        builtins::{self, HELP_COMMAND},
        entry::EntryPrompt,
        handler::CommandContext,
        registry::{CommandDescriptor, CommandRegistry},
        session::SessionState,
        tokenizer::LineTokenizer,
        transcript::{EntryKind, Transcript},
    },
    error::{ConsoleError, Result},
};
use tracing::{debug, instrument, warn};

/// Prefix written before every echoed input line
pub const ECHO_PREFIX: &str = "> ";

/// First line written for an unknown command
pub const UNKNOWN_COMMAND_MESSAGE: &str = "ERROR: Unknown command!";

/// What happened to one dispatched line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The handler ran and returned successfully
    Invoked,
    /// The handler ran and reported an error
    HandlerFailed,
    /// No command with that name is registered
    UnknownCommand,
    /// The command exists but the argument count is wrong
    ArityMismatch,
}

/// Command console: registry, session state and transcript behind one dispatcher
#[derive(Debug)]
pub struct Console {
    registry: CommandRegistry,
    tokenizer: LineTokenizer,
    session: SessionState,
    transcript: Transcript,
    error_style: ErrorStyle,
}

impl Console {
    /// Create a console with no commands registered
    pub fn new(error_style: ErrorStyle) -> Self {
        Self {
            registry: CommandRegistry::new(),
            tokenizer: LineTokenizer::new(),
            session: SessionState::new(),
            transcript: Transcript::new(),
            error_style,
        }
    }

    /// Create a console with the default commands registered
    pub fn with_defaults(config: &Config) -> Result<Self> {
        let mut console = Self::new(config.error_style);
        builtins::register_defaults(&mut console.registry, &config.help_file)?;
        Ok(console)
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Registry access for collaborators that add or remove commands
    pub fn registry_mut(&mut self) -> &mut CommandRegistry {
        &mut self.registry
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub const fn error_style(&self) -> ErrorStyle {
        self.error_style
    }

    /// Process one raw input line
    #[instrument(skip(self))]
    pub fn submit(&mut self, raw: &str) -> DispatchOutcome {
        self.transcript
            .append(EntryKind::Input, &format!("{ECHO_PREFIX}{raw}"));

        let parsed = self.tokenizer.tokenize(raw);
        debug!(
            "Parsed command {:?} with {} argument(s)",
            parsed.command,
            parsed.arg_count()
        );

        self.dispatch(&parsed.command, &parsed.args)
    }

    /// Open an out-of-band entry prompt bound to a one-argument command
    pub fn open_prompt(&self, command: &str) -> Result<EntryPrompt> {
        let descriptor = self
            .registry
            .lookup(command)
            .ok_or_else(|| ConsoleError::unknown_command(command))?;

        if descriptor.arity() != 1 {
            return Err(ConsoleError::arity_mismatch(command, descriptor.arity(), 1));
        }

        Ok(EntryPrompt::new(command))
    }

    /// Resolve and invoke `command` without echoing anything
    pub(crate) fn dispatch(&mut self, command: &str, args: &[String]) -> DispatchOutcome {
        let descriptor = match resolve(&self.registry, command, args.len()) {
            Ok(descriptor) => descriptor,
            Err(err) => {
                debug!("Dispatch rejected: {}", err);
                let outcome = match err {
                    ConsoleError::ArityMismatch { .. } => DispatchOutcome::ArityMismatch,
                    _ => DispatchOutcome::UnknownCommand,
                };
                report_resolution_error(&mut self.transcript, self.error_style, &err);
                return outcome;
            }
        };

        let mut ctx = CommandContext::new(
            descriptor.name(),
            &mut self.session,
            &mut self.transcript,
            &self.registry,
        );

        match descriptor.handler().invoke(args, &mut ctx) {
            Ok(()) => DispatchOutcome::Invoked,
            Err(err) => {
                warn!("Command {} failed: {}", command, err);
                self.transcript
                    .append(EntryKind::Error, &format!("ERROR: {err}"));
                DispatchOutcome::HandlerFailed
            }
        }
    }
}

/// Find the descriptor for `command` and check that it takes `arg_count` arguments
fn resolve<'r>(
    registry: &'r CommandRegistry,
    command: &str,
    arg_count: usize,
) -> Result<&'r CommandDescriptor> {
    let descriptor = registry
        .lookup(command)
        .ok_or_else(|| ConsoleError::unknown_command(command))?;

    if descriptor.arity() != arg_count {
        return Err(ConsoleError::arity_mismatch(
            command,
            descriptor.arity(),
            arg_count,
        ));
    }

    Ok(descriptor)
}

fn report_resolution_error(transcript: &mut Transcript, style: ErrorStyle, err: &ConsoleError) {
    let message = match (style, err) {
        (ErrorStyle::Detailed, ConsoleError::ArityMismatch { .. }) => format!("ERROR: {err}"),
        _ => UNKNOWN_COMMAND_MESSAGE.to_string(),
    };
    transcript.append(EntryKind::Error, &message);
    transcript.append(
        EntryKind::Error,
        &format!("Type \"{HELP_COMMAND}\" for a list of commands and assistance."),
    );
}
