/// Linear undo/redo history built on immutable snapshots.
///
/// A `History` borrows an `Originator` (the editable subject) for its whole
/// lifetime, keeps every `Snapshot` it has been asked to save, and walks a
/// cursor back and forth over them. Content is opaque: the only requirement
/// is that the originator can export it into a snapshot and import it back.
pub mod config;
pub mod manager;
pub mod snapshot;

pub use config::{HistoryConfig, SavePolicy};
pub use manager::{History, Originator};
pub use snapshot::Snapshot;
