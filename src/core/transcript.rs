//! Append-only record of everything shown in the console output area

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What produced a transcript line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    /// Echo of a submitted input line
    Input,
    /// Regular command output
    Output,
    /// Error text written by the dispatcher
    Error,
}

/// One line of the transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    /// Sequence number, unique for the lifetime of the transcript
    pub seq: u64,
    /// Source of the line
    pub kind: EntryKind,
    /// Line text without a trailing newline
    pub text: String,
    /// When the line was appended
    pub at: DateTime<Utc>,
}

/// Ordered, append-only console log that can only be cleared as a whole
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
    next_seq: u64,
}

impl Transcript {
    /// Create an empty transcript
    pub fn new() -> Self {
        Self::default()
    }

    /// Append text, one entry per `\n`-separated line.
    ///
    /// A single trailing `\n` terminates the last line rather than opening a new
    /// one. Everything else is kept as is: blank lines, `\r` from CRLF text, and
    /// one empty entry for empty text.
    pub fn append(&mut self, kind: EntryKind, text: &str) {
        let body = text.strip_suffix('\n').unwrap_or(text);
        for line in body.split('\n') {
            self.push_line(kind, line.to_string());
        }
    }

    fn push_line(&mut self, kind: EntryKind, text: String) {
        self.entries.push(TranscriptEntry {
            seq: self.next_seq,
            kind,
            text,
            at: Utc::now(),
        });
        self.next_seq += 1;
    }

    /// Remove every entry. Sequence numbers keep counting.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// All current entries in order
    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    /// Entries appended at or after `seq` that are still present
    pub fn entries_since(&self, seq: u64) -> &[TranscriptEntry] {
        let start = self.entries.partition_point(|entry| entry.seq < seq);
        &self.entries[start..]
    }

    /// Sequence number the next appended entry will receive
    pub const fn cursor(&self) -> u64 {
        self.next_seq
    }

    /// Line texts in order
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.text.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the transcript as text, one timestamped line per entry
    pub fn render_timestamped(&self) -> String {
        self.entries
            .iter()
            .map(|entry| format!("{} {}\n", entry.at.to_rfc3339(), entry.text))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_splits_lines() {
        let mut transcript = Transcript::new();
        transcript.append(EntryKind::Output, "one\ntwo\n");
        assert_eq!(transcript.lines().collect::<Vec<_>>(), vec!["one", "two"]);
    }

    #[test]
    fn test_append_keeps_blank_lines_and_carriage_returns() {
        let mut transcript = Transcript::new();
        transcript.append(EntryKind::Output, "title\r\n\r\nbody\n\n");
        assert_eq!(
            transcript.lines().collect::<Vec<_>>(),
            vec!["title\r", "\r", "body", ""]
        );
    }

    #[test]
    fn test_append_empty_text_keeps_a_line() {
        let mut transcript = Transcript::new();
        transcript.append(EntryKind::Input, "");
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.entries()[0].text, "");
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut transcript = Transcript::new();
        transcript.append(EntryKind::Output, "hello");
        transcript.clear();
        assert!(transcript.is_empty());
        transcript.clear();
        assert!(transcript.is_empty());
    }

    #[test]
    fn test_entries_since_survives_clear() {
        let mut transcript = Transcript::new();
        transcript.append(EntryKind::Output, "a\nb");
        let cursor = transcript.cursor();
        assert_eq!(cursor, 2);
        transcript.clear();
        transcript.append(EntryKind::Error, "c");

        let fresh = transcript.entries_since(cursor);
        assert_eq!(fresh.len(), 1);
        assert_eq!(fresh[0].text, "c");
        assert_eq!(fresh[0].seq, 2);
        assert!(transcript.entries_since(transcript.cursor()).is_empty());
    }

    #[test]
    fn test_render_timestamped() {
        let mut transcript = Transcript::new();
        transcript.append(EntryKind::Input, "> clear");
        let rendered = transcript.render_timestamped();
        assert!(rendered.ends_with(" > clear\n"));
        assert_eq!(rendered.lines().count(), 1);
    }
}
