//! Token filter implementations for token transformation.
//!
//! # Examples
//!
//! ```
//! use parts_triage::analysis::token_filter::Filter;
//! use parts_triage::analysis::token_filter::lowercase::LowercaseFilter;
//! use parts_triage::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Dishwasher", 0), Token::new("RACK", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter())).collect();
//!
//! assert_eq!(filtered[0].text, "dishwasher");
//! assert_eq!(filtered[1].text, "rack");
//! ```

use crate::analysis::token::TokenStream;

/// Trait for filters that transform token streams.
///
/// Filters receive a stream of tokens and produce a new stream. The trait
/// requires `Send + Sync` to allow use in concurrent contexts.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> TokenStream;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod lowercase;

pub use lowercase::LowercaseFilter;
