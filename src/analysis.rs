//! Text analysis primitives shared by the sanitizer and the classifiers.
//!
//! The layout follows a classic analysis chain:
//!
//! ```text
//! raw text → CharFilter* → Tokenizer → Filter* → tokens
//! ```
//!
//! The sanitizer runs only the char filter stage; the utterance analyzer runs
//! the tokenizer and token filters over already-sanitized text.

pub mod analyzer;
pub mod char_filter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::*;
pub use token::*;
