//! Context extraction for classified intents.

use regex::Regex;

use crate::entity::EntitySet;
use crate::error::Result;
use crate::intent::types::{ApplianceType, IntentContext};

const REFRIGERATOR_PATTERN: &str = r"(?i)refrigerator|fridge|ice maker|freezer";
// Broad: "filter" or "wash" alone count as dishwasher hints.
const DISHWASHER_PATTERN: &str = r"(?i)dishwasher|wash|spray arm|filter|rinse";

/// Picks representative identifiers and the appliance family.
#[derive(Debug, Clone)]
pub struct ContextExtractor {
    refrigerator: Regex,
    dishwasher: Regex,
}

impl ContextExtractor {
    pub fn new() -> Result<Self> {
        Ok(ContextExtractor {
            refrigerator: Regex::new(REFRIGERATOR_PATTERN)?,
            dishwasher: Regex::new(DISHWASHER_PATTERN)?,
        })
    }

    /// Refrigerator terms win over dishwasher terms.
    pub fn appliance_type(&self, text: &str) -> Option<ApplianceType> {
        if self.refrigerator.is_match(text) {
            Some(ApplianceType::Refrigerator)
        } else if self.dishwasher.is_match(text) {
            Some(ApplianceType::Dishwasher)
        } else {
            None
        }
    }

    pub fn extract(&self, tokens: &[String], entities: &EntitySet) -> IntentContext {
        IntentContext {
            part_number: entities.first_part_number().map(str::to_string),
            model_number: entities.first_model_number().map(str::to_string),
            appliance_type: self.appliance_type(&tokens.join(" ")),
        }
    }
}
