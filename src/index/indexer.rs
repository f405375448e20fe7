use std::sync::Arc;

use futures::future::join_all;

use crate::analysis::analyzer::Analyzer;
use crate::core::error::Result;
use crate::core::types::{Document, FieldValue};
use crate::index::entry;
use crate::store::ordered_set::OrderedSetStore;

/// How a field value turns into index entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Normalize the value into stemmed, stopword-filtered tokens and write
    /// one entry per token.
    #[default]
    Tokenized,
    /// Index the lowercased value verbatim as a phrase, then re-index each
    /// suffix obtained by dropping the leading word. Enables prefix search
    /// starting at any word boundary inside the phrase.
    NoTokens,
}

#[derive(Debug, Clone, Default)]
pub struct IndexOptions {
    pub strategy: Strategy,
}

impl IndexOptions {
    pub fn no_tokens() -> Self {
        IndexOptions {
            strategy: Strategy::NoTokens,
        }
    }
}

/// Turns document fields into ordered-set entries and writes them.
pub struct Indexer<S> {
    store: Arc<S>,
    analyzer: Analyzer,
}

impl<S: OrderedSetStore> Indexer<S> {
    pub fn new(store: Arc<S>, analyzer: Analyzer) -> Self {
        Indexer { store, analyzer }
    }

    /// Index the named fields of `doc` into the group's ordered set and
    /// return the number of entries written.
    ///
    /// Every entry write is dispatched concurrently; the call completes only
    /// once all of them have been acknowledged. On failure the first error
    /// is returned after the remaining writes finish, and already-written
    /// siblings are not rolled back. Re-indexing a document does not remove
    /// its previous entries; callers that need that must `del` first.
    pub async fn index(
        &self,
        group: &str,
        doc: &Document,
        keys: &[&str],
        options: &IndexOptions,
    ) -> Result<usize> {
        if keys.is_empty() {
            return Ok(0);
        }

        let mut entries = Vec::new();
        for key in keys {
            match doc.get_field(key) {
                Some(FieldValue::Single(value)) => {
                    self.collect_entries(value, &doc.id, options, &mut entries);
                }
                Some(FieldValue::Many(values)) => {
                    for value in values {
                        self.collect_entries(value, &doc.id, options, &mut entries);
                    }
                }
                // Missing field: skip silently.
                None => {}
            }
        }

        let set = entry::set_name(group);
        let written = entries.len();
        let results = join_all(
            entries
                .iter()
                .map(|member| self.store.add_member(&set, member)),
        )
        .await;
        for result in results {
            result?;
        }

        log::debug!("indexed {written} entries for doc {} in {set}", doc.id);
        Ok(written)
    }

    fn collect_entries(
        &self,
        value: &str,
        doc_id: &str,
        options: &IndexOptions,
        out: &mut Vec<String>,
    ) {
        match options.strategy {
            Strategy::Tokenized => {
                for token in self.analyzer.analyze(value) {
                    out.push(entry::encode(&token.text, doc_id));
                }
            }
            Strategy::NoTokens => {
                let mut phrase = value.to_lowercase();
                // Split on single spaces, matching how suffixes are carved.
                let words = phrase.split(' ').count();
                // Runs words - 1 times: the final standalone word is never
                // written on its own, and a one-word phrase writes nothing.
                for _ in 1..words {
                    out.push(entry::encode(&phrase, doc_id));
                    if let Some(at) = phrase.find(' ') {
                        phrase = phrase[at + 1..].to_string();
                    }
                }
            }
        }
    }
}
