use crate::analysis::token::Token;
use regex::Regex;

pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<Token>;

    fn name(&self) -> &str;
}

/// Splits text into contiguous runs of word characters. Underscores count
/// as separators, so `snake_case` field content splits into its words the
/// same way dashed or spaced content does.
pub struct WordTokenizer {
    word_run: Regex,
}

impl Default for WordTokenizer {
    fn default() -> Self {
        WordTokenizer {
            // \w minus underscore
            word_run: Regex::new(r"[^\W_]+").unwrap(),
        }
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        self.word_run
            .find_iter(text)
            .enumerate()
            .map(|(position, word)| Token::new(word.as_str().to_string(), position as u32))
            .collect()
    }

    fn name(&self) -> &str {
        "word"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_punctuation_and_whitespace() {
        let tokenizer = WordTokenizer::default();
        let tokens = tokenizer.tokenize("Hello, world! foo-bar");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Hello", "world", "foo", "bar"]);
    }

    #[test]
    fn underscores_separate_words() {
        let tokenizer = WordTokenizer::default();
        let tokens = tokenizer.tokenize("quick_brown_fox");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["quick", "brown", "fox"]);
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        let tokenizer = WordTokenizer::default();
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize("  ...  ").is_empty());
    }

    #[test]
    fn positions_are_sequential() {
        let tokenizer = WordTokenizer::default();
        let tokens = tokenizer.tokenize("one two three");
        let positions: Vec<u32> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }
}
