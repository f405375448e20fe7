use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::json;

use lexset::core::config::SearchConfig;
use lexset::core::error::{Error, Result};
use lexset::core::search::Search;
use lexset::core::types::{Document, FieldValue};
use lexset::index::indexer::IndexOptions;
use lexset::store::memory::MemoryStore;
use lexset::store::ordered_set::OrderedSetStore;

fn search(store: MemoryStore) -> Search<MemoryStore> {
    Search::open(SearchConfig::new("localhost"), store).unwrap()
}

fn doc(value: serde_json::Value) -> Document {
    serde_json::from_value(value).unwrap()
}

#[tokio::test]
async fn tokenized_indexing_drops_stopwords_and_stems() {
    let search = search(MemoryStore::new());
    let doc = doc(json!({
        "id": "d1",
        "fields": { "title": "The Quick Brown Fox" }
    }));

    let written = search
        .index("animals", &doc, &["title"], &IndexOptions::default())
        .await
        .unwrap();
    assert_eq!(written, 3); // "the" is a stopword

    let hits = search.search("animals", "quick", 10).await.unwrap();
    assert_eq!(hits, vec!["quick::d1"]);
}

#[tokio::test]
async fn no_tokens_indexing_writes_progressive_suffixes() {
    let search = search(MemoryStore::new());
    let doc = doc(json!({
        "id": "a9",
        "fields": { "title": "red fox jumps" }
    }));

    let written = search
        .index("phrases", &doc, &["title"], &IndexOptions::no_tokens())
        .await
        .unwrap();
    assert_eq!(written, 2);

    let from_start = search.search("phrases", "red fox", 10).await.unwrap();
    assert_eq!(from_start, vec!["red fox jumps::a9"]);

    let from_middle = search.search("phrases", "fox jumps", 10).await.unwrap();
    assert_eq!(from_middle, vec!["fox jumps::a9"]);

    // The trailing word alone was never written under this strategy.
    let last_word = search.search("phrases", "jumps", 10).await.unwrap();
    assert!(last_word.is_empty());
}

#[tokio::test]
async fn no_tokens_single_word_phrase_writes_no_entries() {
    let search = search(MemoryStore::new());
    let doc = doc(json!({
        "id": "s1",
        "fields": { "title": "solo" }
    }));

    let written = search
        .index("phrases", &doc, &["title"], &IndexOptions::no_tokens())
        .await
        .unwrap();
    assert_eq!(written, 0);
}

#[tokio::test]
async fn multi_valued_fields_union_entry_counts() {
    let search = search(MemoryStore::new());
    let doc = doc(json!({
        "id": "m1",
        "fields": {
            "tags": ["running shoes", "trail"],
            "title": "marathon"
        }
    }));

    let written = search
        .index("gear", &doc, &["tags", "title"], &IndexOptions::default())
        .await
        .unwrap();
    // tags: run, shoe, trail; title: marathon
    assert_eq!(written, 4);

    let hits = search.search("gear", "trail", 10).await.unwrap();
    assert_eq!(hits, vec!["trail::m1"]);
    let hits = search.search("gear", "marathon", 10).await.unwrap();
    assert_eq!(hits, vec!["marathon::m1"]);
}

#[tokio::test]
async fn missing_fields_are_skipped_silently() {
    let search = search(MemoryStore::new());
    let doc = Document::new("d2").with_field("title", FieldValue::Single("fox".into()));

    let written = search
        .index("g", &doc, &["title", "body", "summary"], &IndexOptions::default())
        .await
        .unwrap();
    assert_eq!(written, 1);
}

/// Counts store calls so the empty-key short circuit is observable.
#[derive(Default)]
struct CountingStore {
    inner: MemoryStore,
    calls: AtomicUsize,
}

#[async_trait]
impl OrderedSetStore for CountingStore {
    async fn add_member(&self, set: &str, member: &str) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.add_member(set, member).await
    }

    async fn range_by_lex(
        &self,
        set: &str,
        lower: &[u8],
        upper: &[u8],
        limit: usize,
    ) -> Result<Vec<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.range_by_lex(set, lower, upper, limit).await
    }

    async fn delete_set(&self, set: &str) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.delete_set(set).await
    }
}

/// Forwards the trait through an `Arc` so a test can keep a handle on the
/// wrapped store after handing it to the facade.
struct ArcStore(Arc<CountingStore>);

#[async_trait]
impl OrderedSetStore for ArcStore {
    async fn add_member(&self, set: &str, member: &str) -> Result<()> {
        self.0.add_member(set, member).await
    }

    async fn range_by_lex(
        &self,
        set: &str,
        lower: &[u8],
        upper: &[u8],
        limit: usize,
    ) -> Result<Vec<String>> {
        self.0.range_by_lex(set, lower, upper, limit).await
    }

    async fn delete_set(&self, set: &str) -> Result<()> {
        self.0.delete_set(set).await
    }
}

#[tokio::test]
async fn empty_key_list_completes_without_contacting_store() {
    let store = Arc::new(CountingStore::default());
    let search = Search::open(SearchConfig::new("localhost"), ArcStore(store.clone())).unwrap();
    let doc = Document::new("d3").with_field("title", FieldValue::Single("fox".into()));

    let written = search
        .index("g", &doc, &[], &IndexOptions::default())
        .await
        .unwrap();
    assert_eq!(written, 0);
    assert_eq!(store.calls.load(Ordering::SeqCst), 0);
}

/// Fails writes for members starting with a marker; successful siblings
/// must still land.
#[derive(Default)]
struct FlakyStore {
    inner: MemoryStore,
}

#[async_trait]
impl OrderedSetStore for FlakyStore {
    async fn add_member(&self, set: &str, member: &str) -> Result<()> {
        if member.starts_with("poison") {
            return Err(Error::store(format!("write rejected: {member}")));
        }
        self.inner.add_member(set, member).await
    }

    async fn range_by_lex(
        &self,
        set: &str,
        lower: &[u8],
        upper: &[u8],
        limit: usize,
    ) -> Result<Vec<String>> {
        self.inner.range_by_lex(set, lower, upper, limit).await
    }

    async fn delete_set(&self, set: &str) -> Result<()> {
        self.inner.delete_set(set).await
    }
}

#[tokio::test]
async fn partial_failure_surfaces_error_and_keeps_siblings() {
    let search = Search::open(SearchConfig::new("localhost"), FlakyStore::default()).unwrap();
    let doc = Document::new("d4")
        .with_field("title", FieldValue::Single("poisonous marathon".into()));

    let result = search
        .index("g", &doc, &["title"], &IndexOptions::default())
        .await;
    assert!(result.is_err());

    // The sibling write was not rolled back.
    let hits = search.search("g", "marathon", 10).await.unwrap();
    assert_eq!(hits, vec!["marathon::d4"]);
}

#[test]
fn open_requires_a_host() {
    assert!(Search::open(SearchConfig::default(), MemoryStore::new()).is_err());
}
