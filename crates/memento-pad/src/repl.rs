//! Line-oriented command loop driving a document and its history.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use memento_pad_core::History;

const HELP: &str = "\
Commands:
  set <text>   replace the document content
  show         print the document content
  save         snapshot the document
  undo         step back one snapshot
  redo         step forward one snapshot
  history      list snapshots (* marks the cursor)
  clear        drop all snapshots
  help         show this message
  quit         leave (also: exit)";

/// A parsed REPL command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set(String),
    Show,
    Save,
    Undo,
    Redo,
    History,
    Clear,
    Help,
    Quit,
}

impl Command {
    /// Parses one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return Ok(None);
        }

        let trimmed = line.trim_start();
        let (word, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim_start()),
            None => (trimmed, ""),
        };

        let command = match word {
            "set" => Self::Set(rest.to_string()),
            "show" => Self::Show,
            "save" => Self::Save,
            "undo" => Self::Undo,
            "redo" => Self::Redo,
            "history" => Self::History,
            "clear" => Self::Clear,
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => bail!("unknown command `{other}` (type `help`)"),
        };
        Ok(Some(command))
    }
}

/// Reads commands from `input` until EOF or `quit`, applying them to
/// `history` and writing results to `out`.
pub fn run(
    input: impl BufRead,
    out: &mut impl Write,
    history: &mut History<'_>,
    prompt: &str,
) -> Result<()> {
    let mut lines = input.lines();
    loop {
        write!(out, "{prompt}")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read command")?;

        match Command::parse(&line) {
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => execute(command, out, history)?,
            Ok(None) => {}
            Err(e) => writeln!(out, "{e}")?,
        }
    }
    Ok(())
}

/// Applies a single command.
pub fn execute(command: Command, out: &mut impl Write, history: &mut History<'_>) -> Result<()> {
    match command {
        Command::Set(text) => {
            history.document_mut().set_content(text);
        }
        Command::Show => {
            writeln!(out, "{}", history.document().content())?;
        }
        Command::Save => {
            history.save();
            write_position(out, history)?;
        }
        Command::Undo => {
            if history.can_undo() {
                history.undo();
                writeln!(out, "{}", history.document().content())?;
            } else {
                writeln!(out, "nothing to undo")?;
            }
        }
        Command::Redo => {
            if history.can_redo() {
                history.redo();
                writeln!(out, "{}", history.document().content())?;
            } else {
                writeln!(out, "nothing to redo")?;
            }
        }
        Command::History => {
            if history.is_empty() {
                writeln!(out, "(no snapshots)")?;
            }
            for (i, snapshot) in history.snapshots().iter().enumerate() {
                let marker = if history.cursor() == Some(i) { '*' } else { ' ' };
                writeln!(out, "{marker} {i}: {}", snapshot.state())?;
            }
        }
        Command::Clear => {
            history.clear();
            writeln!(out, "history cleared")?;
        }
        Command::Help => {
            writeln!(out, "{HELP}")?;
        }
        Command::Quit => {}
    }
    Ok(())
}

fn write_position(out: &mut impl Write, history: &History<'_>) -> Result<()> {
    match history.cursor() {
        Some(cursor) => writeln!(out, "saved [{}/{}]", cursor + 1, history.len())?,
        None => writeln!(out, "saved")?,
    }
    Ok(())
}
