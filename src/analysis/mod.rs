pub mod analyzer;
pub mod filter;
pub mod filters;
pub mod stopwords;
pub mod token;
pub mod tokenizer;
