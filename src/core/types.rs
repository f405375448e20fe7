use serde::{Serialize, Deserialize};
use std::collections::HashMap;

/// A field holds either one string or an ordered sequence of strings.
/// The indexer treats the two forms uniformly; anything else a caller
/// might hold on a document simply has no representation here and is
/// never indexed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Single(String),
    Many(Vec<String>),
}

/// The caller owns the document; the index only ever derives entries
/// from it and keeps no copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub fields: HashMap<String, FieldValue>,
}

impl Document {
    pub fn new(id: impl Into<String>) -> Self {
        Document {
            id: id.into(),
            fields: HashMap::new(),
        }
    }

    pub fn add_field(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.insert(name.into(), value);
    }

    pub fn with_field(mut self, name: impl Into<String>, value: FieldValue) -> Self {
        self.add_field(name, value);
        self
    }

    pub fn get_field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }
}
