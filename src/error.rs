//! Error types for the command console
//!
//! Every failure the dispatcher detects is turned into transcript text, so
//! these errors describe what went wrong rather than terminating anything.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the console engine
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// The tokenized command name has no registry entry
    #[error("Unknown command: {name:?}")]
    UnknownCommand { name: String },

    /// The argument count does not match the registered arity
    #[error("Command \"{name}\" expects {expected} argument(s), got {actual}")]
    ArityMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    /// A command name that the tokenizer could never produce
    #[error("Invalid command name {name:?}: {reason}")]
    InvalidCommandName { name: String, reason: String },

    /// A handler reported a failure while running
    #[error("{command}: {message}")]
    Handler {
        command: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// File system operation errors
    #[error("File system error: {operation} failed on {path}")]
    FileSystem {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Validation errors
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl ConsoleError {
    /// Create a new unknown command error
    pub fn unknown_command(name: impl Into<String>) -> Self {
        Self::UnknownCommand { name: name.into() }
    }

    /// Create a new arity mismatch error
    pub fn arity_mismatch(name: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::ArityMismatch {
            name: name.into(),
            expected,
            actual,
        }
    }

    /// Create a new invalid command name error
    pub fn invalid_command_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidCommandName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a new handler error
    pub fn handler(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Handler {
            command: command.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a handler error wrapping an underlying cause
    pub fn handler_with_source<E>(
        command: impl Into<String>,
        message: impl Into<String>,
        source: E,
    ) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Handler {
            command: command.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new file system error
    pub fn file_system<P: Into<PathBuf>>(
        operation: impl Into<String>,
        path: P,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Whether this error came out of command resolution (name or arity)
    pub const fn is_resolution_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownCommand { .. } | Self::ArityMismatch { .. }
        )
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ConsoleError>;
