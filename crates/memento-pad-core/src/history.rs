// Re-exports from memento-pad-mod-history and the `Originator` bridge.
// Lets callers checkpoint a `Document` without depending on the history crate.
pub use memento_pad_mod_history::{HistoryConfig, Originator, SavePolicy, Snapshot};

use crate::document::Document;

/// History bound to a [`Document`].
pub type History<'d, C = String> = memento_pad_mod_history::History<'d, Document<C>>;

impl<C: Clone> Originator for Document<C> {
    type State = C;

    fn save_to_snapshot(&self) -> Snapshot<C> {
        Document::save_to_snapshot(self)
    }

    fn restore_from_snapshot(&mut self, snapshot: &Snapshot<C>) {
        Document::restore_from_snapshot(self, snapshot)
    }
}
