use rust_stemmers::{Algorithm, Stemmer};

/// Lexicographic range bounds for one prefix query.
///
/// Bounds are byte strings rather than `String`s: the exclusive upper bound
/// carries a trailing 0xFF sentinel, which is not valid UTF-8 on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPlan {
    /// Inclusive lower bound: the prefix itself.
    pub lower: Vec<u8>,
    /// Exclusive upper bound: the prefix with a maximal byte appended, so
    /// the range covers every fragment starting with the prefix and nothing
    /// lexicographically later.
    pub upper: Vec<u8>,
}

/// Turns a raw query string into range bounds over stored entries.
pub struct QueryPlanner {
    stemmer: Stemmer,
}

impl Default for QueryPlanner {
    fn default() -> Self {
        QueryPlanner {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }
}

impl QueryPlanner {
    pub fn new() -> Self {
        QueryPlanner::default()
    }

    /// A query containing whitespace is a phrase and is used verbatim,
    /// matching how the whole-phrase strategy stores fragments. A single
    /// word is stemmed first, matching tokenized fragments. Lowercasing
    /// happens after stemming either way.
    pub fn plan(&self, query: &str) -> QueryPlan {
        let prefix = if query.chars().any(char::is_whitespace) {
            query.to_lowercase()
        } else {
            self.stemmer.stem(query).to_lowercase()
        };

        let lower = prefix.clone().into_bytes();
        let mut upper = prefix.into_bytes();
        upper.push(0xFF);
        QueryPlan { lower, upper }
    }
}
