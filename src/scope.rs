//! Domain scope detection.
//!
//! Decides whether an utterance belongs to the appliance-parts domain. The
//! decision is a short-circuit tree, not a weighted blend:
//!
//! 1. an explicit part or model number in the text is in scope outright;
//! 2. otherwise in-scope and out-of-scope keyword scores are compared with
//!    asymmetric margins, and anything in between defaults to in scope.
//!
//! The default-permissive middle band trades false "in scope" answers for
//! never turning away a real parts question.

use std::fmt;
use std::sync::Arc;

use log::{debug, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::{KeywordTables, PatternSet};
use crate::entity::EntitySet;
use crate::error::Result;
use crate::scoring::{KeywordMatcher, MatchWeights, clamp_score};

/// Weights for in-scope keyword matches.
pub const IN_SCOPE_WEIGHTS: MatchWeights = MatchWeights::new(10, 3);
/// Weights for out-of-scope keyword matches.
pub const OUT_OF_SCOPE_WEIGHTS: MatchWeights = MatchWeights::new(15, 5);

pub const PART_PATTERN_POINTS: u32 = 40;
pub const MODEL_PATTERN_POINTS: u32 = 30;
pub const APPLIANCE_WORD_POINTS: u32 = 20;

/// Out-of-scope must beat in-scope by more than this to reject.
pub const OUT_OF_SCOPE_MARGIN: u32 = 20;
/// In-scope must beat out-of-scope by more than this to sub-classify.
pub const IN_SCOPE_MARGIN: u32 = 10;

pub const MAX_CONFIDENCE: f64 = 0.95;
pub const AMBIGUOUS_CONFIDENCE: f64 = 0.5;
pub const FALLBACK_CONFIDENCE: f64 = 0.3;

const APPLIANCE_WORD_PATTERN: &str = r"(?i)refrigerator|fridge|dishwasher";

/// Sub-categories of in-scope traffic, tested in order against the joined
/// token stream.
const SUBCATEGORY_PATTERNS: &[(ScopeCategory, &str)] = &[
    (
        ScopeCategory::InstallationInquiry,
        r"install|setup|assemble|attach|how to",
    ),
    (
        ScopeCategory::CompatibilityCheck,
        r"compatible|fit|work with|support|match",
    ),
    (
        ScopeCategory::TroubleshootingInquiry,
        r"broken|not working|fix|repair|problem|issue|leak|freeze|noise",
    ),
    (
        ScopeCategory::OrderSupport,
        r"order|price|cost|buy|cart|checkout|shipping",
    ),
];

/// What kind of traffic a message is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopeCategory {
    PartsInquiry,
    InstallationInquiry,
    CompatibilityCheck,
    TroubleshootingInquiry,
    OrderSupport,
    GeneralInquiry,
    OutOfScope,
}

impl ScopeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScopeCategory::PartsInquiry => "parts_inquiry",
            ScopeCategory::InstallationInquiry => "installation_inquiry",
            ScopeCategory::CompatibilityCheck => "compatibility_check",
            ScopeCategory::TroubleshootingInquiry => "troubleshooting_inquiry",
            ScopeCategory::OrderSupport => "order_support",
            ScopeCategory::GeneralInquiry => "general_inquiry",
            ScopeCategory::OutOfScope => "out_of_scope",
        }
    }
}

impl fmt::Display for ScopeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three scores behind a scope decision, each in `0..=100`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopeScore {
    pub in_scope: u32,
    pub out_of_scope: u32,
    /// Informational only; identifiers gate the decision through the override.
    pub patterns: u32,
}

/// Outcome of scope detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopeResult {
    pub in_scope: bool,
    pub confidence: f64,
    pub reason: String,
    pub category: ScopeCategory,
    pub score: ScopeScore,
}

impl ScopeResult {
    /// The permissive default used when detection fails internally.
    pub fn fallback() -> Self {
        ScopeResult {
            in_scope: true,
            confidence: FALLBACK_CONFIDENCE,
            reason: "scope detection failed, defaulting to in scope".to_string(),
            category: ScopeCategory::GeneralInquiry,
            score: ScopeScore::default(),
        }
    }
}

/// Branch of the keyword comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeDecision {
    OutOfScope,
    InScope,
    Ambiguous,
}

/// Compare keyword scores. Both margins are strict.
///
/// ```
/// use parts_triage::scope::{decide, ScopeDecision};
///
/// assert_eq!(decide(31, 20), ScopeDecision::InScope);
/// assert_eq!(decide(30, 20), ScopeDecision::Ambiguous);
/// assert_eq!(decide(0, 21), ScopeDecision::OutOfScope);
/// assert_eq!(decide(0, 20), ScopeDecision::Ambiguous);
/// ```
pub fn decide(in_scope: u32, out_of_scope: u32) -> ScopeDecision {
    if out_of_scope > in_scope + OUT_OF_SCOPE_MARGIN {
        ScopeDecision::OutOfScope
    } else if in_scope > out_of_scope + IN_SCOPE_MARGIN {
        ScopeDecision::InScope
    } else {
        ScopeDecision::Ambiguous
    }
}

fn confidence_from(score: u32) -> f64 {
    (f64::from(score) / 100.0).min(MAX_CONFIDENCE)
}

/// Scope detector over injected keyword tables and patterns.
#[derive(Debug, Clone)]
pub struct ScopeDetector {
    in_scope: KeywordMatcher,
    out_of_scope: KeywordMatcher,
    patterns: Arc<PatternSet>,
    appliance_word: Regex,
    subcategories: Vec<(ScopeCategory, Regex)>,
}

impl ScopeDetector {
    /// Build a detector. Tables are not validated here; a bad table surfaces
    /// as a fail-soft fallback at detection time.
    pub fn new(tables: &KeywordTables, patterns: Arc<PatternSet>) -> Result<Self> {
        let subcategories = SUBCATEGORY_PATTERNS
            .iter()
            .map(|(category, pattern)| -> Result<(ScopeCategory, Regex)> {
                Ok((*category, Regex::new(pattern)?))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ScopeDetector {
            in_scope: KeywordMatcher::new(&tables.in_scope),
            out_of_scope: KeywordMatcher::new(&tables.out_of_scope),
            patterns,
            appliance_word: Regex::new(APPLIANCE_WORD_PATTERN)?,
            subcategories,
        })
    }

    /// Decide scope. Never fails: internal errors yield [`ScopeResult::fallback`].
    pub fn detect(&self, cleaned: &str, tokens: &[String], entities: &EntitySet) -> ScopeResult {
        match self.try_detect(cleaned, tokens, entities) {
            Ok(result) => result,
            Err(e) => {
                warn!("scope detection failed, defaulting to in scope: {e}");
                ScopeResult::fallback()
            }
        }
    }

    /// Decide scope, propagating internal failures.
    pub fn try_detect(
        &self,
        cleaned: &str,
        tokens: &[String],
        entities: &EntitySet,
    ) -> Result<ScopeResult> {
        let has_part = self.patterns.part_number().is_match(cleaned);
        let has_model = self.patterns.model_number().is_match(cleaned);
        let patterns = self.pattern_score(cleaned, has_part, has_model);

        if has_part || has_model {
            debug!("scope override: identifier in {cleaned:?}");
            return Ok(ScopeResult {
                in_scope: true,
                confidence: 1.0,
                reason: override_reason(entities),
                category: ScopeCategory::PartsInquiry,
                score: ScopeScore {
                    in_scope: 0,
                    out_of_scope: 0,
                    patterns,
                },
            });
        }

        let in_score = self.in_scope.score(tokens, IN_SCOPE_WEIGHTS)?;
        let out_score = self.out_of_scope.score(tokens, OUT_OF_SCOPE_WEIGHTS)?;
        let score = ScopeScore {
            in_scope: in_score,
            out_of_scope: out_score,
            patterns,
        };

        let result = match decide(in_score, out_score) {
            ScopeDecision::OutOfScope => ScopeResult {
                in_scope: false,
                confidence: confidence_from(out_score),
                reason: format!(
                    "out-of-scope keywords dominate ({out_score} vs {in_score})"
                ),
                category: ScopeCategory::OutOfScope,
                score,
            },
            ScopeDecision::InScope => ScopeResult {
                in_scope: true,
                confidence: confidence_from(in_score),
                reason: format!("in-scope keywords dominate ({in_score} vs {out_score})"),
                category: self.subcategory(tokens),
                score,
            },
            ScopeDecision::Ambiguous => ScopeResult {
                in_scope: true,
                confidence: AMBIGUOUS_CONFIDENCE,
                reason: format!(
                    "ambiguous keyword scores ({in_score} vs {out_score}), defaulting to in scope"
                ),
                category: ScopeCategory::GeneralInquiry,
                score,
            },
        };

        debug!(
            "scope {} (in {}, out {}, patterns {})",
            result.category, in_score, out_score, patterns
        );
        Ok(result)
    }

    fn pattern_score(&self, cleaned: &str, has_part: bool, has_model: bool) -> u32 {
        let mut score = 0;
        if has_part {
            score += PART_PATTERN_POINTS;
        }
        if has_model {
            score += MODEL_PATTERN_POINTS;
        }
        if self.appliance_word.is_match(cleaned) {
            score += APPLIANCE_WORD_POINTS;
        }
        clamp_score(score)
    }

    fn subcategory(&self, tokens: &[String]) -> ScopeCategory {
        let joined = tokens.join(" ");
        self.subcategories
            .iter()
            .find(|(_, pattern)| pattern.is_match(&joined))
            .map(|(category, _)| *category)
            .unwrap_or(ScopeCategory::PartsInquiry)
    }
}

fn override_reason(entities: &EntitySet) -> String {
    match (entities.first_part_number(), entities.first_model_number()) {
        (Some(part), _) => format!("explicit part number {part}"),
        (None, Some(model)) => format!("explicit model number {model}"),
        (None, None) => "explicit part or model number pattern".to_string(),
    }
}
