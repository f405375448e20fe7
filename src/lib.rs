pub mod core;
pub mod analysis;
pub mod index;
pub mod query;
pub mod store;

/*
┌──────────────────────────────── LEXSET ARCHITECTURE ────────────────────────────────┐
│                                                                                      │
│  write path:                                                                         │
│    Document field ──> Analyzer (tokenize → lowercase → stopword → stem) ──> Token    │
│         │                                                                            │
│         └──noTokens──> progressive phrase suffixes (drop leading word, repeat)       │
│                                                                                      │
│    Token / suffix ──> entry::encode ──> "<fragment>::<docId>" ──> OrderedSetStore    │
│                       (zero-scored member of the "<group>-search" ordered set)       │
│                                                                                      │
│  read path:                                                                          │
│    query string ──> QueryPlanner ──> [prefix, prefix + 0xFF) byte bounds             │
│                 ──> OrderedSetStore::range_by_lex ──> ascending entries              │
│                                                                                      │
│  Search<S> ──owns──> Indexer<S> ──uses──> Analyzer                                   │
│      │                                                                               │
│      ├──owns──> QueryPlanner                                                         │
│      └──owns──> Arc<S: OrderedSetStore>  (MemoryStore, or any backend binding)       │
└──────────────────────────────────────────────────────────────────────────────────────┘
*/
