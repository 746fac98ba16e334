//! The editable subject of the undo/redo history.
//!
//! A `Document` is a single mutable cell of content. It can export that
//! content into a [`Snapshot`] and import it back, but never keeps the
//! snapshots it hands out.

use crate::history::Snapshot;

/// A mutable single-value document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document<C = String> {
    content: C,
}

impl<C> Document<C> {
    /// Creates a document holding `content`.
    pub fn new(content: C) -> Self {
        Self { content }
    }

    /// Returns the current content.
    pub fn content(&self) -> &C {
        &self.content
    }

    /// Replaces the current content unconditionally.
    pub fn set_content(&mut self, content: C) {
        self.content = content;
    }

    /// Consumes the document, yielding its content.
    pub fn into_content(self) -> C {
        self.content
    }
}

impl<C: Clone> Document<C> {
    /// Captures the current content into a new snapshot.
    pub fn save_to_snapshot(&self) -> Snapshot<C> {
        Snapshot::new(self.content.clone())
    }

    /// Overwrites the current content with the snapshot's value.
    ///
    /// Whatever was there before is discarded; save it first if it needs
    /// to be recoverable.
    pub fn restore_from_snapshot(&mut self, snapshot: &Snapshot<C>) {
        self.content = snapshot.state().clone();
        tracing::trace!("Restored document from snapshot");
    }
}

impl From<&str> for Document {
    fn from(content: &str) -> Self {
        Self::new(content.to_string())
    }
}
