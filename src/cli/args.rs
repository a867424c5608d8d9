//! Command-line argument parsing and validation

use crate::config::DEFAULT_HELP_FILE;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Redstone Synthesis console - type `command~arg1~arg2` lines to run commands
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "redstone-console")]
pub struct Args {
    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Text file shown by `minecraft_world_help`
    #[arg(long = "help-file", global = true, default_value = DEFAULT_HELP_FILE)]
    pub help_file: PathBuf,

    /// Set the Minecraft saves directory before the first command
    #[arg(long = "save-dir", global = true)]
    pub save_dir: Option<String>,

    /// Report wrong argument counts separately from unknown commands
    #[arg(long = "detailed-errors", global = true)]
    pub detailed_errors: bool,

    /// Write the full transcript to this file on exit
    #[arg(long, global = true)]
    pub transcript: Option<PathBuf>,

    /// Subcommand to execute (defaults to `repl`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Default, PartialEq, Eq)]
pub enum Command {
    /// Read console lines from stdin until EOF
    #[default]
    Repl,

    /// Run each argument as one console line
    Run {
        /// Console lines, e.g. `set_minecraft_directory~/saves`
        #[arg(required = true)]
        lines: Vec<String>,
    },

    /// Run every line of a file as a console line
    Script {
        /// File with one console line per line
        file: PathBuf,
    },
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults_to_repl() {
        let args = Args::try_parse_from(["redstone-console"]).unwrap();
        assert!(!args.debug);
        assert_eq!(args.help_file, PathBuf::from(DEFAULT_HELP_FILE));
        assert_eq!(args.command.unwrap_or_default(), Command::Repl);
    }

    #[test]
    fn test_parse_debug_flag_after_subcommand() {
        let args = Args::try_parse_from(["redstone-console", "repl", "--debug"]).unwrap();
        assert!(args.debug);
    }

    #[test]
    fn test_parse_run_lines() {
        let args = Args::try_parse_from([
            "redstone-console",
            "run",
            "set_minecraft_directory~C:\\Saves",
            "terminal_commands_help",
        ])
        .unwrap();
        match args.command {
            Some(Command::Run { lines }) => {
                assert_eq!(lines.len(), 2);
                assert_eq!(lines[0], "set_minecraft_directory~C:\\Saves");
            }
            other => panic!("Expected Run command, got {other:?}"),
        }
    }

    #[test]
    fn test_run_requires_lines() {
        assert!(Args::try_parse_from(["redstone-console", "run"]).is_err());
    }
}
