/// Configuration for the history system.
use serde::{Deserialize, Serialize};

/// What `History::save` does with snapshots beyond the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SavePolicy {
    /// Always append at the end and move the cursor there. Snapshots that
    /// were ahead of the cursor after an undo stay in the sequence but can
    /// no longer be reached by redo.
    #[default]
    Append,
    /// Drop every snapshot after the cursor before appending, the way most
    /// editors discard the redo branch on a new edit.
    TruncateRedo,
}

/// Configuration for a `History`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Behaviour of `save` after one or more undos.
    pub save_policy: SavePolicy,
}

impl HistoryConfig {
    /// Config that discards the redo branch on save.
    pub fn truncating() -> Self {
        Self {
            save_policy: SavePolicy::TruncateRedo,
        }
    }
}
