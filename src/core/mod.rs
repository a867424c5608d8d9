//! Core console engine
//!
//! Contains the command registry, line tokenizer, dispatcher, session state,
//! transcript and the default commands. Nothing here renders anything.

pub mod builtins;
pub mod console;
pub mod entry;
pub mod handler;
pub mod registry;
pub mod session;
pub mod tokenizer;
pub mod transcript;

pub use console::{Console, DispatchOutcome};
pub use entry::EntryPrompt;
pub use handler::{CommandContext, CommandHandler};
pub use registry::{CommandDescriptor, CommandRegistry};
pub use session::SessionState;
pub use tokenizer::{LineTokenizer, ParsedInvocation};
pub use transcript::{EntryKind, Transcript, TranscriptEntry};
