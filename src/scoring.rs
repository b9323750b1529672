//! Keyword scoring shared by the scope detector and the intent classifier.
//!
//! Tokens are single lowercase words while table entries may be phrases
//! ("ice maker"). An *exact* match compares the token against the phrase with
//! its internal spaces removed; a *partial* match is plain substring
//! containment in either direction.

use crate::error::{Result, TriageError};

/// Upper bound for every keyword and pattern score.
pub const MAX_SCORE: u32 = 100;

/// Clamp a raw score into `0..=MAX_SCORE`.
pub fn clamp_score(score: u32) -> u32 {
    score.min(MAX_SCORE)
}

/// Points awarded per token for exact and partial matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchWeights {
    pub exact: u32,
    pub partial: u32,
}

impl MatchWeights {
    pub const fn new(exact: u32, partial: u32) -> Self {
        MatchWeights { exact, partial }
    }
}

/// An ordered phrase list with the lookups both classifiers need.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    phrases: Vec<String>,
    compact: Vec<String>,
}

impl KeywordMatcher {
    pub fn new(phrases: &[String]) -> Self {
        KeywordMatcher {
            compact: phrases.iter().map(|p| p.replace(' ', "")).collect(),
            phrases: phrases.to_vec(),
        }
    }

    /// The phrases in table order.
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// Fails if the table holds an empty phrase, which would match every token.
    pub fn check(&self) -> Result<()> {
        match self.phrases.iter().position(|p| p.trim().is_empty()) {
            Some(index) => Err(TriageError::classification(format!(
                "empty keyword phrase at index {index}"
            ))),
            None => Ok(()),
        }
    }

    /// Phrases equal to `token` once their spaces are removed.
    pub fn exact_matches<'a>(&'a self, token: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.phrases
            .iter()
            .zip(&self.compact)
            .filter(move |(_, compact)| compact.as_str() == token)
            .map(|(phrase, _)| phrase.as_str())
    }

    /// Phrases that contain `token` as a substring.
    pub fn containing<'a>(&'a self, token: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.phrases
            .iter()
            .filter(move |phrase| phrase.contains(token))
            .map(String::as_str)
    }

    pub fn is_exact(&self, token: &str) -> bool {
        self.compact.iter().any(|c| c == token)
    }

    /// True if `token` is a substring of, or contains, any phrase.
    pub fn is_partial(&self, token: &str) -> bool {
        self.phrases
            .iter()
            .any(|phrase| phrase.contains(token) || token.contains(phrase.as_str()))
    }

    /// Sum per-token points: `weights.exact` for an exact match plus
    /// `weights.partial` for a partial one, each at most once per token.
    pub fn score(&self, tokens: &[String], weights: MatchWeights) -> Result<u32> {
        self.check()?;

        let mut score = 0u32;
        for token in tokens.iter().filter(|t| !t.is_empty()) {
            if self.is_exact(token) {
                score = score.saturating_add(weights.exact);
            }
            if self.is_partial(token) {
                score = score.saturating_add(weights.partial);
            }
        }

        Ok(clamp_score(score))
    }
}
