//! Keyword-based intent classifier.

use std::collections::BTreeMap;

use log::{debug, warn};

use crate::config::IntentTriggers;
use crate::entity::EntitySet;
use crate::error::Result;
use crate::intent::classifier::IntentClassifier;
use crate::intent::context::ContextExtractor;
use crate::intent::types::{Intent, IntentResult};
use crate::scoring::{KeywordMatcher, clamp_score};

/// Points for a token equal to a trigger phrase.
pub const EXACT_MATCH_POINTS: u32 = 15;
/// Points for a token contained in a trigger phrase.
pub const PARTIAL_MATCH_POINTS: u32 = 5;
/// Bonus per distinct trigger when more than one trigger matched.
pub const MULTI_MATCH_POINTS: u32 = 5;
/// Tokens this short or shorter never earn partial points.
pub const MIN_PARTIAL_TOKEN_CHARS: usize = 2;
/// Confidence ceiling for intent results.
pub const MAX_CONFIDENCE: f64 = 0.99;

/// Scores every intent's trigger table against the tokens and keeps the best.
///
/// # Examples
///
/// ```
/// use parts_triage::config::IntentTriggers;
/// use parts_triage::entity::EntitySet;
/// use parts_triage::intent::{Intent, IntentClassifier, KeywordIntentClassifier};
///
/// let classifier = KeywordIntentClassifier::new(&IntentTriggers::default()).unwrap();
/// let tokens: Vec<String> = ["where", "can", "i", "track", "my", "order"]
///     .iter()
///     .map(|s| s.to_string())
///     .collect();
///
/// let result = classifier.classify(&tokens, &EntitySet::default());
/// assert_eq!(result.intent, Intent::OrderSupport);
/// ```
#[derive(Debug, Clone)]
pub struct KeywordIntentClassifier {
    triggers: Vec<(Intent, KeywordMatcher)>,
    context: ContextExtractor,
}

impl KeywordIntentClassifier {
    /// Build a classifier over the given trigger tables.
    ///
    /// Tables are not validated here; a bad table surfaces as a fail-soft
    /// fallback at classification time.
    pub fn new(triggers: &IntentTriggers) -> Result<Self> {
        Ok(KeywordIntentClassifier {
            triggers: Intent::SCORED
                .iter()
                .map(|&intent| (intent, KeywordMatcher::new(triggers.get(intent))))
                .collect(),
            context: ContextExtractor::new()?,
        })
    }

    /// Classify, propagating internal failures instead of substituting the
    /// fallback.
    pub fn try_classify(&self, tokens: &[String], entities: &EntitySet) -> Result<IntentResult> {
        let mut scores = BTreeMap::new();
        let mut best_intent = Intent::GeneralInquiry;
        let mut best_score = 0;
        let mut best_matcher: Option<&KeywordMatcher> = None;

        for (intent, matcher) in &self.triggers {
            let score = score_intent(matcher, tokens)?;
            scores.insert(*intent, score);

            // Strictly greater: ties keep the earlier intent.
            if score > best_score {
                best_intent = *intent;
                best_score = score;
                best_matcher = Some(matcher);
            }
        }

        let keywords = best_matcher
            .map(|matcher| matched_keywords(matcher, tokens))
            .unwrap_or_default();
        let confidence = (f64::from(best_score) / 100.0).min(MAX_CONFIDENCE);

        debug!(
            "intent {} (score {}, confidence {:.2}, keywords {:?})",
            best_intent, best_score, confidence, keywords
        );

        Ok(IntentResult {
            intent: best_intent,
            confidence,
            keywords,
            context: self.context.extract(tokens, entities),
            scores,
        })
    }
}

impl IntentClassifier for KeywordIntentClassifier {
    fn classify(&self, tokens: &[String], entities: &EntitySet) -> IntentResult {
        match self.try_classify(tokens, entities) {
            Ok(result) => result,
            Err(e) => {
                warn!("intent classification failed, using general_inquiry: {e}");
                IntentResult::fallback()
            }
        }
    }

    fn name(&self) -> &str {
        "keyword"
    }
}

/// Score one intent's trigger table.
///
/// Per token: exact points if it equals a trigger (spaces removed), partial
/// points if a trigger contains it and it is longer than two characters.
/// More than one distinct matched trigger adds a bonus per trigger.
fn score_intent(matcher: &KeywordMatcher, tokens: &[String]) -> Result<u32> {
    matcher.check()?;

    let mut score = 0u32;
    let mut distinct: Vec<&str> = Vec::new();

    for token in tokens.iter().filter(|t| !t.is_empty()) {
        let exact: Vec<&str> = matcher.exact_matches(token).collect();
        if !exact.is_empty() {
            score = score.saturating_add(EXACT_MATCH_POINTS);
            extend_unique(&mut distinct, exact);
        }

        if token.chars().count() > MIN_PARTIAL_TOKEN_CHARS {
            let containing: Vec<&str> = matcher.containing(token).collect();
            if !containing.is_empty() {
                score = score.saturating_add(PARTIAL_MATCH_POINTS);
                extend_unique(&mut distinct, containing);
            }
        }
    }

    if distinct.len() > 1 {
        let triggers = u32::try_from(distinct.len()).unwrap_or(u32::MAX);
        score = score.saturating_add(MULTI_MATCH_POINTS.saturating_mul(triggers));
    }

    Ok(clamp_score(score))
}

/// Trigger phrases that contain (or equal) any token, in first-seen order.
fn matched_keywords(matcher: &KeywordMatcher, tokens: &[String]) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();
    for token in tokens.iter().filter(|t| !t.is_empty()) {
        for phrase in matcher.containing(token) {
            if !keywords.iter().any(|k| k == phrase) {
                keywords.push(phrase.to_string());
            }
        }
    }
    keywords
}

fn extend_unique<'a>(seen: &mut Vec<&'a str>, phrases: Vec<&'a str>) {
    for phrase in phrases {
        if !seen.contains(&phrase) {
            seen.push(phrase);
        }
    }
}
