//! Analyzers combine a tokenizer with a chain of token filters.
//!
//! ```text
//! Sanitized Text → Analyzer → Token Stream → Scope / Intent scoring
//!                    ↓
//!                Tokenizer
//!                    ↓
//!                Filter 1 … Filter N
//! ```
//!
//! # Available Implementations
//!
//! - [`PipelineAnalyzer`](pipeline::PipelineAnalyzer) - Custom tokenizer + filter chains
//! - [`UtteranceAnalyzer`](utterance::UtteranceAnalyzer) - Lowercase word terms of an utterance

use crate::analysis::token::TokenStream;

/// Trait for analyzers that convert text into processed tokens.
///
/// Analysis is total: any `&str` yields a (possibly empty) stream.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> TokenStream;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Analyze the text and keep only the token texts, in stream order.
    fn terms(&self, text: &str) -> Vec<String> {
        self.analyze(text).map(|token| token.text).collect()
    }
}

pub mod pipeline;
pub mod utterance;

pub use pipeline::PipelineAnalyzer;
pub use utterance::UtteranceAnalyzer;
