//! Intent classifier trait definition.

use crate::entity::EntitySet;
use crate::intent::types::IntentResult;

/// Trait for intent classifiers.
///
/// Implementations are fail-soft: `classify` always returns a usable result,
/// substituting [`IntentResult::fallback`] when something goes wrong inside.
pub trait IntentClassifier: Send + Sync + std::fmt::Debug {
    /// Classify an in-scope utterance from its lowercase tokens and entities.
    fn classify(&self, tokens: &[String], entities: &EntitySet) -> IntentResult;

    /// Get the name of this classifier.
    fn name(&self) -> &str;
}
