//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step of the token pipeline: they split text into
//! an ordered stream of [`Token`](crate::analysis::token::Token)s.
//!
//! # Examples
//!
//! ```
//! use parts_triage::analysis::tokenizer::Tokenizer;
//! use parts_triage::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
//!
//! let tokenizer = UnicodeWordTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Ice maker, broken!").collect();
//! assert_eq!(tokens.len(), 3);
//! ```

use crate::analysis::token::TokenStream;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so one tokenizer can serve concurrent
/// classification calls.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> TokenStream;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod unicode_word;
