//! Configuration management for the console
//!
//! Centralizes configuration options and provides validation.

use crate::{cli::Args, error::ConsoleError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

/// Default location of the world help text asset
pub const DEFAULT_HELP_FILE: &str = "resources/minecraft_world_help.txt";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Static text asset printed by `minecraft_world_help`
    pub help_file: PathBuf,
    /// How resolution failures are reported in the transcript
    pub error_style: ErrorStyle,
    /// Save directory applied through the entry prompt at startup
    pub initial_save_directory: Option<String>,
    /// Where to write the transcript when the session ends
    pub transcript_file: Option<PathBuf>,
}

/// Reporting style for unknown commands and arity mismatches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ErrorStyle {
    /// One generic "Unknown command" message for both failures
    #[default]
    Collapsed,
    /// Arity mismatches report the expected argument count
    Detailed,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            help_file: PathBuf::from(DEFAULT_HELP_FILE),
            error_style: ErrorStyle::default(),
            initial_save_directory: None,
            transcript_file: None,
        }
    }
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, ConsoleError> {
        let config = Self {
            debug: args.debug,
            help_file: args.help_file.clone(),
            error_style: if args.detailed_errors {
                ErrorStyle::Detailed
            } else {
                ErrorStyle::Collapsed
            },
            initial_save_directory: args.save_dir.clone(),
            transcript_file: args.transcript.clone(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConsoleError> {
        if self.help_file.as_os_str().is_empty() {
            return Err(ConsoleError::config("help file path is empty"));
        }

        if self.help_file.is_dir() {
            return Err(ConsoleError::validation(format!(
                "Help file is a directory: {}",
                self.help_file.display()
            )));
        }

        if !self.help_file.exists() {
            warn!(
                "Help file not found: {} (minecraft_world_help will report an error)",
                self.help_file.display()
            );
        }

        if let Some(path) = &self.transcript_file {
            if path.is_dir() {
                return Err(ConsoleError::validation(format!(
                    "Transcript file is a directory: {}",
                    path.display()
                )));
            }
        }

        Ok(())
    }
}
