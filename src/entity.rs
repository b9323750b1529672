//! Extraction of part numbers and model numbers from free text.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::PatternSet;

const PART_NUMBER_PREFIX: &str = "PS";

/// Identifiers found in one message, de-duplicated in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitySet {
    pub part_numbers: Vec<String>,
    pub model_numbers: Vec<String>,
}

impl EntitySet {
    /// Build a set from known identifiers, normalizing and de-duplicating them.
    pub fn from_parts<I, J, S, T>(part_numbers: I, model_numbers: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let mut entities = EntitySet::default();
        for part in part_numbers {
            push_unique(&mut entities.part_numbers, part.as_ref());
        }
        for model in model_numbers {
            push_unique(&mut entities.model_numbers, model.as_ref());
        }
        entities
    }

    pub fn is_empty(&self) -> bool {
        self.part_numbers.is_empty() && self.model_numbers.is_empty()
    }

    /// The first part number in extraction order.
    pub fn first_part_number(&self) -> Option<&str> {
        self.part_numbers.first().map(String::as_str)
    }

    /// The first model number in extraction order.
    pub fn first_model_number(&self) -> Option<&str> {
        self.model_numbers.first().map(String::as_str)
    }
}

fn push_unique(values: &mut Vec<String>, raw: &str) {
    let normalized = raw.to_uppercase();
    if !values.contains(&normalized) {
        values.push(normalized);
    }
}

/// Applies the part and model number patterns to cleaned text.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use parts_triage::config::{PatternConfig, PatternSet};
/// use parts_triage::entity::EntityExtractor;
///
/// let patterns = Arc::new(PatternSet::compile(&PatternConfig::default()).unwrap());
/// let extractor = EntityExtractor::new(patterns);
///
/// let entities = extractor.extract("Is PS11752778 compatible with WDT780SAEM1?");
/// assert_eq!(entities.part_numbers, vec!["PS11752778"]);
/// assert_eq!(entities.model_numbers, vec!["WDT780SAEM1"]);
/// ```
#[derive(Debug, Clone)]
pub struct EntityExtractor {
    patterns: Arc<PatternSet>,
}

impl EntityExtractor {
    pub fn new(patterns: Arc<PatternSet>) -> Self {
        EntityExtractor { patterns }
    }

    /// Extract identifiers from `cleaned`. Matches are uppercased; model
    /// matches that start with the part-number prefix are dropped.
    pub fn extract(&self, cleaned: &str) -> EntitySet {
        let mut entities = EntitySet::default();

        for m in self.patterns.part_number().find_iter(cleaned) {
            push_unique(&mut entities.part_numbers, m.as_str());
        }

        for m in self.patterns.model_number().find_iter(cleaned) {
            let candidate = m.as_str().to_uppercase();
            if candidate.starts_with(PART_NUMBER_PREFIX) {
                continue;
            }
            push_unique(&mut entities.model_numbers, &candidate);
        }

        entities
    }
}
