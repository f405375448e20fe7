use std::collections::{BTreeSet, HashMap};
use std::ops::Bound;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::core::error::Result;
use crate::store::ordered_set::OrderedSetStore;

/// In-process ordered-set store.
///
/// Members are kept as byte strings in a `BTreeSet`, so range queries with
/// sentinel-byte bounds compare the same way they would against a remote
/// backend. Useful for tests and for embedding without a server.
#[derive(Default)]
pub struct MemoryStore {
    sets: RwLock<HashMap<String, BTreeSet<Vec<u8>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    pub fn set_len(&self, set: &str) -> usize {
        self.sets.read().get(set).map_or(0, |members| members.len())
    }
}

#[async_trait]
impl OrderedSetStore for MemoryStore {
    async fn add_member(&self, set: &str, member: &str) -> Result<()> {
        self.sets
            .write()
            .entry(set.to_string())
            .or_default()
            .insert(member.as_bytes().to_vec());
        Ok(())
    }

    async fn range_by_lex(
        &self,
        set: &str,
        lower: &[u8],
        upper: &[u8],
        limit: usize,
    ) -> Result<Vec<String>> {
        let sets = self.sets.read();
        let Some(members) = sets.get(set) else {
            return Ok(Vec::new());
        };

        Ok(members
            .range::<[u8], _>((Bound::Included(lower), Bound::Excluded(upper)))
            .take(limit)
            .map(|member| String::from_utf8_lossy(member).into_owned())
            .collect())
    }

    async fn delete_set(&self, set: &str) -> Result<()> {
        self.sets.write().remove(set);
        Ok(())
    }
}
