//! End-to-end triage of one utterance.
//!
//! ```text
//! raw ─► Sanitizer ─► cleaned ─┬─► EntityExtractor ─► entities ─┐
//!                              └─► UtteranceAnalyzer ─► tokens ─┴─► ScopeDetector
//!                                                                       │ in scope
//!                                                                       ▼
//!                                                               IntentClassifier
//! ```
//!
//! A [`TriagePipeline`] is built once from a validated [`TriageConfig`] and
//! is then immutable, so one instance can serve any number of threads.
//!
//! # Examples
//!
//! ```
//! use parts_triage::intent::Intent;
//! use parts_triage::pipeline::TriagePipeline;
//!
//! let pipeline = TriagePipeline::default();
//! let outcome = pipeline.analyze("How do I install PS11752778?");
//!
//! assert!(outcome.scope.in_scope);
//! let intent = outcome.intent.unwrap();
//! assert_eq!(intent.intent, Intent::InstallationGuide);
//! assert_eq!(intent.context.part_number.as_deref(), Some("PS11752778"));
//! ```

use std::sync::{Arc, LazyLock};

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::analysis::analyzer::{Analyzer, UtteranceAnalyzer};
use crate::config::{PatternSet, TriageConfig};
use crate::entity::{EntityExtractor, EntitySet};
use crate::error::Result;
use crate::intent::{IntentClassifier, IntentResult, KeywordIntentClassifier};
use crate::sanitize::{SanitizedMessage, Sanitizer};
use crate::scope::{ScopeDetector, ScopeResult};

static DEFAULT_PIPELINE: LazyLock<TriagePipeline> = LazyLock::new(TriagePipeline::default);

/// The shared pipeline over the built-in tables.
pub fn default_pipeline() -> &'static TriagePipeline {
    &DEFAULT_PIPELINE
}

/// Everything produced for one utterance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageOutcome {
    pub message: SanitizedMessage,
    pub entities: EntitySet,
    pub tokens: Vec<String>,
    pub scope: ScopeResult,
    /// Absent when the utterance is out of scope.
    pub intent: Option<IntentResult>,
}

/// Sanitizer, extractor, analyzer, scope detector and intent classifier
/// sharing one immutable configuration.
#[derive(Debug, Clone)]
pub struct TriagePipeline {
    config: Arc<TriageConfig>,
    patterns: Arc<PatternSet>,
    sanitizer: Sanitizer,
    analyzer: UtteranceAnalyzer,
    extractor: EntityExtractor,
    scope: ScopeDetector,
    intent: Arc<dyn IntentClassifier>,
}

impl TriagePipeline {
    /// Validate `config` and build every component from it.
    pub fn new(config: TriageConfig) -> Result<Self> {
        config.validate()?;

        let patterns = Arc::new(PatternSet::compile(&config.patterns)?);
        let scope = ScopeDetector::new(&config.keywords, Arc::clone(&patterns))?;
        let intent = Arc::new(KeywordIntentClassifier::new(&config.keywords.intents)?);

        Ok(TriagePipeline {
            sanitizer: Sanitizer::new()?,
            analyzer: UtteranceAnalyzer::new(),
            extractor: EntityExtractor::new(Arc::clone(&patterns)),
            scope,
            intent,
            patterns,
            config: Arc::new(config),
        })
    }

    /// Swap in a different intent classifier.
    pub fn with_intent_classifier(mut self, classifier: Arc<dyn IntentClassifier>) -> Self {
        self.intent = classifier;
        self
    }

    /// The configuration this pipeline was built from.
    pub fn config(&self) -> &TriageConfig {
        &self.config
    }

    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    pub fn sanitizer(&self) -> &Sanitizer {
        &self.sanitizer
    }

    pub fn extractor(&self) -> &EntityExtractor {
        &self.extractor
    }

    pub fn scope_detector(&self) -> &ScopeDetector {
        &self.scope
    }

    pub fn intent_classifier(&self) -> &dyn IntentClassifier {
        self.intent.as_ref()
    }

    /// Lowercase word tokens of already-cleaned text.
    pub fn tokenize(&self, cleaned: &str) -> Vec<String> {
        self.analyzer.terms(cleaned)
    }

    /// Run the full pipeline over one raw utterance.
    pub fn analyze(&self, raw: &str) -> TriageOutcome {
        let message = self.sanitizer.sanitize(raw);
        self.analyze_sanitized(message)
    }

    /// Run the full pipeline over a value received at an integration boundary.
    ///
    /// Non-string values fail with
    /// [`TriageError::InvalidInput`](crate::error::TriageError::InvalidInput).
    pub fn analyze_value(&self, value: &Value) -> Result<TriageOutcome> {
        let message = self.sanitizer.sanitize_value(value)?;
        Ok(self.analyze_sanitized(message))
    }

    /// Analyze independent utterances in parallel, preserving input order.
    pub fn analyze_batch<S: AsRef<str> + Sync>(&self, utterances: &[S]) -> Vec<TriageOutcome> {
        utterances
            .par_iter()
            .map(|raw| self.analyze(raw.as_ref()))
            .collect()
    }

    fn analyze_sanitized(&self, message: SanitizedMessage) -> TriageOutcome {
        let entities = self.extractor.extract(&message.cleaned);
        let tokens = self.tokenize(&message.cleaned);
        let scope = self.scope.detect(&message.cleaned, &tokens, &entities);

        let intent = if scope.in_scope {
            Some(self.intent.classify(&tokens, &entities))
        } else {
            None
        };

        debug!(
            "triaged {:?}: scope {} ({:.2}), intent {:?}",
            message.cleaned,
            scope.category,
            scope.confidence,
            intent.as_ref().map(|i| i.intent)
        );

        TriageOutcome {
            message,
            entities,
            tokens,
            scope,
            intent,
        }
    }
}

impl Default for TriagePipeline {
    fn default() -> Self {
        Self::new(TriageConfig::default()).expect("Built-in triage configuration should be valid")
    }
}
