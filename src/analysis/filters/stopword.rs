use std::collections::HashSet;
use crate::analysis::filter::TokenFilter;
use crate::analysis::stopwords::STOP_WORDS;
use crate::analysis::token::Token;

/// Drops tokens present in the stopword set. Runs after lowercasing and
/// before stemming: membership is checked against the lowercased,
/// unstemmed token.
pub struct StopWordFilter {
    stop_words: HashSet<&'static str>,
}

impl StopWordFilter {
    pub fn english() -> Self {
        StopWordFilter {
            stop_words: STOP_WORDS.iter().copied().collect(),
        }
    }
}

impl TokenFilter for StopWordFilter {
    fn filter(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens
            .into_iter()
            .filter(|token| !self.stop_words.contains(token.text.as_str()))
            .collect()
    }

    fn name(&self) -> &str {
        "stop_words"
    }
}
