//! Rule-based intent classification for in-scope utterances.
//!
//! Each of the five scored intents owns a trigger table. Tokens earn points
//! against every table, the highest clamped score wins, and ties go to the
//! intent declared first in [`Intent`]. When nothing scores, the result is
//! [`Intent::GeneralInquiry`].
//!
//! # Architecture
//!
//! - [`IntentClassifier`] trait: Common interface for all classifiers
//! - [`KeywordIntentClassifier`]: Trigger-table scoring implementation
//! - [`ContextExtractor`]: Representative identifiers and appliance type
//! - [`IntentResult`]: Serializable outcome

mod classifier;
mod context;
mod keyword_classifier;
mod types;

pub use classifier::IntentClassifier;
pub use context::ContextExtractor;
pub use keyword_classifier::KeywordIntentClassifier;
pub use types::{ApplianceType, Intent, IntentContext, IntentResult};
