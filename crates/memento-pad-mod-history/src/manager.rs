/// Linear undo/redo over a sequence of snapshots.
///
/// The history owns every snapshot it saves and keeps a cursor pointing at
/// the active one. Undo and redo move the cursor and push the snapshot
/// under it back into the borrowed originator. Out-of-range moves are
/// silent no-ops.
use crate::config::{HistoryConfig, SavePolicy};
use crate::snapshot::Snapshot;

/// An editable subject whose content can be captured and restored.
pub trait Originator {
    /// The content captured by a snapshot.
    type State;

    /// Captures the current content. The originator keeps no reference
    /// to the returned snapshot.
    fn save_to_snapshot(&self) -> Snapshot<Self::State>;

    /// Replaces the current content with the snapshot's value.
    fn restore_from_snapshot(&mut self, snapshot: &Snapshot<Self::State>);
}

/// Manages undo/redo history for a single originator.
///
/// The originator is borrowed exclusively for the lifetime of the history;
/// edits go through [`History::document_mut`].
pub struct History<'d, D: Originator> {
    /// The subject being checkpointed. Never owned.
    document: &'d mut D,
    /// Saved snapshots in save order (oldest first).
    snapshots: Vec<Snapshot<D::State>>,
    /// Index of the active snapshot; `None` until the first save.
    cursor: Option<usize>,
    /// Configuration parameters.
    config: HistoryConfig,
}

impl<D: Originator> std::fmt::Debug for History<'_, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("History")
            .field("len", &self.snapshots.len())
            .field("cursor", &self.cursor)
            .field("config", &self.config)
            .finish()
    }
}

impl<'d, D: Originator> History<'d, D> {
    /// Creates an empty history bound to `document` with default config.
    pub fn new(document: &'d mut D) -> Self {
        Self::with_config(document, HistoryConfig::default())
    }

    /// Creates an empty history bound to `document`.
    pub fn with_config(document: &'d mut D, config: HistoryConfig) -> Self {
        Self {
            document,
            snapshots: Vec::new(),
            cursor: None,
            config,
        }
    }

    /// Captures the document and makes the new snapshot the active one.
    ///
    /// With [`SavePolicy::Append`] the snapshot always goes at the end,
    /// even after an undo; anything between the old cursor and the end
    /// stays in the sequence but is no longer reachable by redo.
    /// With [`SavePolicy::TruncateRedo`] those snapshots are dropped first.
    pub fn save(&mut self) {
        if self.config.save_policy == SavePolicy::TruncateRedo {
            let keep = self.cursor.map_or(0, |c| c + 1);
            if keep < self.snapshots.len() {
                tracing::debug!(
                    dropped = self.snapshots.len() - keep,
                    "Discarding redo snapshots before save"
                );
                self.snapshots.truncate(keep);
            }
        }

        let snapshot = self.document.save_to_snapshot();
        self.snapshots.push(snapshot);
        let cursor = self.snapshots.len() - 1;
        self.cursor = Some(cursor);
        tracing::debug!(cursor, len = self.snapshots.len(), "Saved snapshot");
    }

    /// Steps back one snapshot and restores it into the document.
    ///
    /// Does nothing when no snapshot exists or the cursor is already at
    /// the oldest one.
    pub fn undo(&mut self) {
        let Some(cursor) = self.cursor.filter(|&c| c > 0) else {
            tracing::trace!(cursor = ?self.cursor, "Nothing to undo");
            return;
        };

        let target = cursor - 1;
        self.cursor = Some(target);
        self.document.restore_from_snapshot(&self.snapshots[target]);
        tracing::debug!(cursor = target, "Undo");
    }

    /// Steps forward one snapshot and restores it into the document.
    ///
    /// Does nothing when the cursor is at the newest snapshot or the
    /// history is empty.
    pub fn redo(&mut self) {
        let target = self.cursor.map_or(0, |c| c + 1);
        if target >= self.snapshots.len() {
            tracing::trace!(cursor = ?self.cursor, "Nothing to redo");
            return;
        }

        self.cursor = Some(target);
        self.document.restore_from_snapshot(&self.snapshots[target]);
        tracing::debug!(cursor = target, "Redo");
    }

    /// Whether `undo` would move the cursor.
    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|c| c > 0)
    }

    /// Whether `redo` would move the cursor.
    pub fn can_redo(&self) -> bool {
        self.cursor.map_or(0, |c| c + 1) < self.snapshots.len()
    }

    /// Index of the active snapshot, or `None` before the first save.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Number of saved snapshots, including unreachable ones.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// The snapshot under the cursor.
    pub fn current(&self) -> Option<&Snapshot<D::State>> {
        self.cursor.and_then(|c| self.snapshots.get(c))
    }

    /// All saved snapshots in save order.
    pub fn snapshots(&self) -> &[Snapshot<D::State>] {
        &self.snapshots
    }

    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    /// The bound document.
    pub fn document(&self) -> &D {
        &*self.document
    }

    /// Mutable access to the bound document for direct edits.
    pub fn document_mut(&mut self) -> &mut D {
        &mut *self.document
    }

    /// Drops every snapshot and resets the cursor. The document keeps its
    /// current content.
    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.cursor = None;
        tracing::debug!("Cleared history");
    }
}
