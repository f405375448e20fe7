pub mod entry;
pub mod indexer;
