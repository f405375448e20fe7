use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::core::config::SearchConfig;
use crate::core::error::Result;
use crate::core::types::Document;
use crate::index::entry;
use crate::index::indexer::{IndexOptions, Indexer};
use crate::query::planner::QueryPlanner;
use crate::store::ordered_set::OrderedSetStore;

/// Prefix search over one ordered-set store.
///
/// Owns the write path (`Indexer` + `Analyzer`) and the read path
/// (`QueryPlanner`); the store itself is an injected capability.
pub struct Search<S: OrderedSetStore> {
    config: SearchConfig,
    store: Arc<S>,
    indexer: Indexer<S>,
    planner: QueryPlanner,
}

impl<S: OrderedSetStore> Search<S> {
    /// Fails before any operation if the config names no store host.
    pub fn open(config: SearchConfig, store: S) -> Result<Self> {
        config.validate()?;
        log::debug!(
            "search opened against {}:{}",
            config.host.as_deref().unwrap_or_default(),
            config.port
        );

        let store = Arc::new(store);
        Ok(Search {
            indexer: Indexer::new(store.clone(), Analyzer::english()),
            planner: QueryPlanner::new(),
            store,
            config,
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Index the named fields of `doc` into `group`; returns the number of
    /// entries written. See [`Indexer::index`] for completion and failure
    /// semantics.
    pub async fn index(
        &self,
        group: &str,
        doc: &Document,
        keys: &[&str],
        options: &IndexOptions,
    ) -> Result<usize> {
        self.indexer.index(group, doc, keys, options).await
    }

    /// Entries whose fragment starts with the query prefix, ascending by
    /// full entry string (fragment first, doc id as tiebreaker), at most
    /// `limit` of them. Callers recover doc ids with [`entry::doc_id`].
    pub async fn search(&self, group: &str, query: &str, limit: usize) -> Result<Vec<String>> {
        let plan = self.planner.plan(query);
        self.store
            .range_by_lex(&entry::set_name(group), &plan.lower, &plan.upper, limit)
            .await
    }

    /// Drop the group's entire index.
    pub async fn del(&self, group: &str) -> Result<()> {
        self.store.delete_set(&entry::set_name(group)).await
    }
}
