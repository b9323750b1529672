//! Analyzer for chat utterances.
//!
//! Produces the ordered, lowercase word terms that both the scope detector and
//! the intent classifier score against their keyword tables.

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;

/// Unicode word tokenization followed by lowercasing.
///
/// # Examples
///
/// ```
/// use parts_triage::analysis::analyzer::{Analyzer, UtteranceAnalyzer};
///
/// let analyzer = UtteranceAnalyzer::new();
/// let terms = analyzer.terms("My fridge won't stop LEAKING!");
/// assert_eq!(terms, vec!["my", "fridge", "won't", "stop", "leaking"]);
/// ```
#[derive(Clone, Debug)]
pub struct UtteranceAnalyzer {
    inner: PipelineAnalyzer,
}

impl UtteranceAnalyzer {
    pub fn new() -> Self {
        let inner = PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()));
        UtteranceAnalyzer { inner }
    }
}

impl Default for UtteranceAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for UtteranceAnalyzer {
    fn analyze(&self, text: &str) -> TokenStream {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "utterance"
    }
}
