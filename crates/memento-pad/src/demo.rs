//! Scripted walk through save, undo and redo on a sample document.

use std::io::Write;

use anyhow::Result;
use memento_pad_core::{Document, History, HistoryConfig};

/// Replays the canonical editing session and reports the content after
/// each undo and redo.
pub fn run(out: &mut impl Write, config: HistoryConfig) -> Result<()> {
    let mut doc = Document::from("Initial content");
    let mut history = History::with_config(&mut doc, config);

    history.save();
    history
        .document_mut()
        .set_content("Updated content".to_string());
    history.save();
    history.document_mut().set_content("More changes".to_string());
    history.save();
    history
        .document_mut()
        .set_content("Even more changes".to_string());
    writeln!(out, "Current content: {}", history.document().content())?;

    history.undo();
    writeln!(out, "Undone content: {}", history.document().content())?;
    history.undo();
    writeln!(out, "Undone content: {}", history.document().content())?;

    history.redo();
    writeln!(out, "Redone content: {}", history.document().content())?;
    history.redo();
    writeln!(out, "Redone content: {}", history.document().content())?;

    Ok(())
}
