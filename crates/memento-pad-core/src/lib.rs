pub mod document;
pub mod history;

pub use document::Document;
pub use history::{History, HistoryConfig, Originator, SavePolicy, Snapshot};
