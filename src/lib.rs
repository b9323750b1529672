//! # Parts Triage
//!
//! Rule-based front end for an appliance-parts support chat. Every incoming
//! utterance is sanitized, mined for part and model numbers, tokenized, and
//! checked against the refrigerator/dishwasher parts domain. In-scope
//! utterances are then assigned one of six intents.
//!
//! ## Features
//!
//! - Pure Rust, deterministic, no model files
//! - Char filter / tokenizer / token filter analysis pipeline
//! - Keyword tables and identifier patterns loaded from JSON
//! - Fail-soft scope and intent stages
//! - Parallel batch triage
//!
//! ## Quick start
//!
//! ```
//! use parts_triage::pipeline::default_pipeline;
//!
//! let outcome = default_pipeline().analyze("My dishwasher is leaking water");
//! assert!(outcome.scope.in_scope);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod entity;
pub mod error;
pub mod intent;
pub mod pipeline;
pub mod sanitize;
pub mod scope;
pub mod scoring;

pub mod prelude {
    pub use crate::config::TriageConfig;
    pub use crate::entity::EntitySet;
    pub use crate::error::{Result, TriageError};
    pub use crate::intent::{Intent, IntentResult};
    pub use crate::pipeline::{TriageOutcome, TriagePipeline, default_pipeline};
    pub use crate::scope::{ScopeCategory, ScopeResult};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
