use serde::{Serialize, Deserialize};

/// Token representation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,  // The token text
    pub position: u32, // Position within the source value
}

impl Token {
    pub fn new(text: String, position: u32) -> Self {
        Token { text, position }
    }
}
