//! Token types for text analysis.
//!
//! A [`Token`] is one word of an utterance together with its position in the
//! stream. Tokens flow through the analysis chain as a [`TokenStream`].
//!
//! # Examples
//!
//! ```
//! use parts_triage::analysis::token::Token;
//!
//! let token = Token::new("fridge", 3);
//! assert_eq!(token.text, "fridge");
//! assert_eq!(token.position, 3);
//! ```

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
        }
    }

    /// Create a token at the same position carrying different text.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        Token::new(text, self.position)
    }
}

/// A stream of tokens, as produced by tokenizers and consumed by filters.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("leak", 0);
        assert_eq!(token.text, "leak");
        assert_eq!(token.position, 0);
    }

    #[test]
    fn test_with_text_keeps_position() {
        let token = Token::new("Fridge", 1);
        let lowered = token.with_text("fridge");

        assert_eq!(lowered, Token::new("fridge", 1));
    }
}
