//! Command implementations for the CLI
//!
//! Each front end drives one `Console` and prints the transcript lines that
//! every submitted line produced.

use crate::{
    cli::Command,
    config::Config,
    core::{Console, EntryKind, Transcript, builtins::SET_DIRECTORY_COMMAND},
    utils::fs::FileSystemUtils,
};
use anyhow::Context;
use std::{
    borrow::Cow,
    io::{self, BufRead, IsTerminal, Write},
};
use tracing::{debug, info, instrument};

/// Execute the appropriate command based on CLI arguments
#[instrument(skip(config))]
pub fn execute_command(config: &Config, command: &Command) -> anyhow::Result<()> {
    let mut console = Console::with_defaults(config).context("Failed to set up console")?;
    let result = run_front_end(config, command, &mut console);

    // The transcript is written even when input handling stopped early.
    if let Some(path) = &config.transcript_file {
        write_transcript(console.transcript(), path)?;
    }

    result
}

fn run_front_end(config: &Config, command: &Command, console: &mut Console) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Repl => {
            let mut printer = TranscriptPrinter::new(false);
            apply_initial_save_directory(config, console, &mut printer, &mut out)?;
            let stdin = io::stdin();
            let prompt = stdin.is_terminal();
            run_repl(console, &mut printer, stdin.lock(), &mut out, prompt)
        }
        Command::Run { lines } => {
            let mut printer = TranscriptPrinter::new(true);
            apply_initial_save_directory(config, console, &mut printer, &mut out)?;
            run_lines(console, &mut printer, lines.iter().map(String::as_str), &mut out)
        }
        Command::Script { file } => {
            let content = FileSystemUtils::new()
                .read_file(file)
                .with_context(|| format!("Failed to read script {}", file.display()))?;
            let mut printer = TranscriptPrinter::new(true);
            apply_initial_save_directory(config, console, &mut printer, &mut out)?;
            for line in split_raw_lines(&content) {
                console.submit(&line);
                printer.flush(console.transcript(), &mut out)?;
            }
            Ok(())
        }
    }
}

/// Apply `--save-dir` through the entry prompt, as the File menu does
fn apply_initial_save_directory<W: Write>(
    config: &Config,
    console: &mut Console,
    printer: &mut TranscriptPrinter,
    out: &mut W,
) -> anyhow::Result<()> {
    let Some(dir) = &config.initial_save_directory else {
        return Ok(());
    };

    let mut prompt = console
        .open_prompt(SET_DIRECTORY_COMMAND)
        .context("Save directory command is not available")?;
    prompt.set_value(dir.clone());
    let outcome = prompt.confirm(console);
    debug!("Initial save directory applied: {:?}", outcome);

    printer.flush(console.transcript(), out)?;
    Ok(())
}

/// Submit lines read from `input` until EOF
pub fn run_repl<R: BufRead, W: Write>(
    console: &mut Console,
    printer: &mut TranscriptPrinter,
    mut input: R,
    out: &mut W,
    prompt: bool,
) -> anyhow::Result<()> {
    info!("Console ready");
    if prompt {
        write!(out, "> ")?;
        out.flush()?;
    }

    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .context("Failed to read console input")?;
        if read == 0 {
            break;
        }

        let line = decode_line(&buf);
        console.submit(&line);
        printer.flush(console.transcript(), out)?;

        if prompt {
            write!(out, "> ")?;
            out.flush()?;
        }
    }

    if prompt {
        writeln!(out)?;
    }
    info!("Input closed, leaving console");
    Ok(())
}

/// Submit each line in order
pub fn run_lines<'a, I, W>(
    console: &mut Console,
    printer: &mut TranscriptPrinter,
    lines: I,
    out: &mut W,
) -> anyhow::Result<()>
where
    I: IntoIterator<Item = &'a str>,
    W: Write,
{
    for line in lines {
        console.submit(line);
        printer.flush(console.transcript(), out)?;
    }
    Ok(())
}

/// Decode one raw input line, dropping its `\n` or `\r\n` terminator.
///
/// Invalid UTF-8 is replaced rather than rejected so a stray byte cannot end
/// the session.
fn decode_line(raw: &[u8]) -> Cow<'_, str> {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw)
}

/// Split raw file content into decoded console lines
fn split_raw_lines(content: &[u8]) -> Vec<Cow<'_, str>> {
    if content.is_empty() {
        return Vec::new();
    }
    content
        .split_inclusive(|&b| b == b'\n')
        .map(decode_line)
        .collect()
}

fn write_transcript(transcript: &Transcript, path: &std::path::Path) -> anyhow::Result<()> {
    info!("Writing transcript to: {}", path.display());
    FileSystemUtils::new()
        .write_file(path, transcript.render_timestamped())
        .with_context(|| format!("Failed to write transcript {}", path.display()))
}

/// Prints transcript entries that have not been printed yet
#[derive(Debug)]
pub struct TranscriptPrinter {
    cursor: u64,
    show_input: bool,
}

impl TranscriptPrinter {
    /// `show_input` controls whether `> line` echoes are printed
    pub const fn new(show_input: bool) -> Self {
        Self {
            cursor: 0,
            show_input,
        }
    }

    /// Print entries appended since the last flush
    pub fn flush<W: Write>(&mut self, transcript: &Transcript, out: &mut W) -> io::Result<()> {
        for entry in transcript.entries_since(self.cursor) {
            if entry.kind == EntryKind::Input && !self.show_input {
                continue;
            }
            writeln!(out, "{}", entry.text)?;
        }
        self.cursor = transcript.cursor();
        out.flush()
    }
}
