//! Console line tokenization
//!
//! Splits `command[~arg1[~arg2...]]` into a command name and positional
//! arguments. There is no escaping: a literal `~` always separates fields.

use serde::{Deserialize, Serialize};

/// Field separator for console input lines
pub const DELIMITER: char = '~';

/// A single tokenized input line
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParsedInvocation {
    /// Command name, empty when the line was empty
    pub command: String,
    /// Arguments in input order, verbatim
    pub args: Vec<String>,
}

impl ParsedInvocation {
    /// Number of arguments supplied
    pub fn arg_count(&self) -> usize {
        self.args.len()
    }
}

/// Tokenizer for delimiter-separated console lines
#[derive(Debug, Clone, Copy, Default)]
pub struct LineTokenizer;

impl LineTokenizer {
    /// Create a new tokenizer
    pub const fn new() -> Self {
        Self
    }

    /// Split a raw line into a command and its arguments.
    ///
    /// Never fails. Fields are neither trimmed nor coerced, so empty
    /// arguments (`cmd~~x`) and surrounding whitespace survive as typed.
    pub fn tokenize(&self, raw: &str) -> ParsedInvocation {
        let mut fields = raw.split(DELIMITER);
        let command = fields.next().unwrap_or_default().to_string();
        let args = fields.map(str::to_string).collect();
        ParsedInvocation { command, args }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_command_only() {
        let parsed = LineTokenizer::new().tokenize("clear");
        assert_eq!(parsed.command, "clear");
        assert!(parsed.args.is_empty());
    }

    #[test]
    fn test_tokenize_keeps_spaces_in_arguments() {
        let parsed = LineTokenizer::new().tokenize("set_minecraft_directory~C:\\My Saves\\world 1");
        assert_eq!(parsed.command, "set_minecraft_directory");
        assert_eq!(parsed.args, vec!["C:\\My Saves\\world 1".to_string()]);
    }

    #[test]
    fn test_tokenize_empty_line() {
        let parsed = LineTokenizer::new().tokenize("");
        assert_eq!(parsed.command, "");
        assert_eq!(parsed.arg_count(), 0);
    }

    #[test]
    fn test_tokenize_preserves_empty_and_padded_fields() {
        let parsed = LineTokenizer::new().tokenize(" cmd ~~ a ~");
        assert_eq!(parsed.command, " cmd ");
        assert_eq!(
            parsed.args,
            vec![String::new(), " a ".to_string(), String::new()]
        );
    }
}
