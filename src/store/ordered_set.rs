use async_trait::async_trait;

use crate::core::error::Result;

/// Ordered string-set storage capability.
///
/// One named set per group holds distinct member strings retrievable in
/// ascending lexicographic order. Members carry no score; byte order of the
/// member string is the only order. Backends are expected to serialize
/// conflicting writes to the same set internally, so callers impose no
/// additional locking.
#[async_trait]
pub trait OrderedSetStore: Send + Sync {
    /// Insert a member. Inserting an already-present member is a no-op.
    async fn add_member(&self, set: &str, member: &str) -> Result<()>;

    /// Members in `[lower, upper)` by byte order, ascending, at most
    /// `limit` of them. Bounds are raw bytes so a maximal sentinel byte can
    /// express an open-ended prefix range.
    async fn range_by_lex(
        &self,
        set: &str,
        lower: &[u8],
        upper: &[u8],
        limit: usize,
    ) -> Result<Vec<String>>;

    /// Drop the whole set and every member in it.
    async fn delete_set(&self, set: &str) -> Result<()>;
}
