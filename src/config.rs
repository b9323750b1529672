//! Keyword tables and identifier patterns.
//!
//! Classification is driven entirely by static, versionable data: two scope
//! keyword lists, one trigger list per intent, and three identifier regexes.
//! A [`TriageConfig`] is loaded once (built-in defaults or a JSON file),
//! validated, and then shared read-only by every component.
//!
//! Fields missing from a JSON file keep their built-in values, so a file may
//! override a single table.
//!
//! # Examples
//!
//! ```
//! use parts_triage::config::TriageConfig;
//!
//! let config = TriageConfig::default();
//! assert!(config.keywords.in_scope.iter().any(|k| k == "dishwasher"));
//! config.validate().unwrap();
//!
//! let json = serde_json::to_string(&config).unwrap();
//! let reloaded = TriageConfig::from_json_str(&json).unwrap();
//! assert_eq!(config, reloaded);
//! ```

pub mod defaults;

use std::fs;
use std::path::Path;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::config::defaults::to_owned_list;
use crate::error::{Result, TriageError};
use crate::intent::Intent;

/// Complete configuration for one pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriageConfig {
    /// Scope keywords and intent triggers.
    pub keywords: KeywordTables,
    /// Identifier patterns.
    pub patterns: PatternConfig,
}

impl TriageConfig {
    /// Load a configuration from a JSON file and validate it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Parse a configuration from JSON text and validate it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: TriageConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every phrase is usable and every pattern compiles.
    pub fn validate(&self) -> Result<()> {
        self.keywords.validate()?;
        PatternSet::compile(&self.patterns)?;
        Ok(())
    }
}

/// The ordered phrase lists used for scope and intent scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordTables {
    /// Phrases signalling the appliance-parts domain.
    pub in_scope: Vec<String>,
    /// Phrases signalling an unrelated topic.
    pub out_of_scope: Vec<String>,
    /// Trigger phrases per intent.
    pub intents: IntentTriggers,
}

impl Default for KeywordTables {
    fn default() -> Self {
        KeywordTables {
            in_scope: to_owned_list(defaults::IN_SCOPE_KEYWORDS),
            out_of_scope: to_owned_list(defaults::OUT_OF_SCOPE_KEYWORDS),
            intents: IntentTriggers::default(),
        }
    }
}

impl KeywordTables {
    fn validate(&self) -> Result<()> {
        validate_phrases("in_scope", &self.in_scope)?;
        validate_phrases("out_of_scope", &self.out_of_scope)?;
        for intent in Intent::SCORED {
            validate_phrases(intent.as_str(), self.intents.get(intent))?;
        }
        Ok(())
    }
}

/// Trigger phrases for each scored intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntentTriggers {
    pub product_search: Vec<String>,
    pub compatibility_check: Vec<String>,
    pub installation_guide: Vec<String>,
    pub troubleshooting: Vec<String>,
    pub order_support: Vec<String>,
}

impl Default for IntentTriggers {
    fn default() -> Self {
        IntentTriggers {
            product_search: to_owned_list(defaults::PRODUCT_SEARCH_TRIGGERS),
            compatibility_check: to_owned_list(defaults::COMPATIBILITY_CHECK_TRIGGERS),
            installation_guide: to_owned_list(defaults::INSTALLATION_GUIDE_TRIGGERS),
            troubleshooting: to_owned_list(defaults::TROUBLESHOOTING_TRIGGERS),
            order_support: to_owned_list(defaults::ORDER_SUPPORT_TRIGGERS),
        }
    }
}

impl IntentTriggers {
    /// Trigger phrases for `intent`. `GeneralInquiry` has none.
    pub fn get(&self, intent: Intent) -> &[String] {
        match intent {
            Intent::ProductSearch => &self.product_search,
            Intent::CompatibilityCheck => &self.compatibility_check,
            Intent::InstallationGuide => &self.installation_guide,
            Intent::Troubleshooting => &self.troubleshooting,
            Intent::OrderSupport => &self.order_support,
            Intent::GeneralInquiry => &[],
        }
    }
}

/// Identifier regexes, matched case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    pub part_number: String,
    pub model_number: String,
    pub sku: String,
}

impl Default for PatternConfig {
    fn default() -> Self {
        PatternConfig {
            part_number: defaults::PART_NUMBER_PATTERN.to_string(),
            model_number: defaults::MODEL_NUMBER_PATTERN.to_string(),
            sku: defaults::SKU_PATTERN.to_string(),
        }
    }
}

/// Compiled form of [`PatternConfig`].
#[derive(Debug, Clone)]
pub struct PatternSet {
    part_number: Regex,
    model_number: Regex,
    sku: Regex,
}

impl PatternSet {
    /// Compile all three patterns case-insensitively.
    pub fn compile(config: &PatternConfig) -> Result<Self> {
        Ok(PatternSet {
            part_number: case_insensitive(&config.part_number)?,
            model_number: case_insensitive(&config.model_number)?,
            sku: case_insensitive(&config.sku)?,
        })
    }

    pub fn part_number(&self) -> &Regex {
        &self.part_number
    }

    pub fn model_number(&self) -> &Regex {
        &self.model_number
    }

    pub fn sku(&self) -> &Regex {
        &self.sku
    }
}

fn case_insensitive(pattern: &str) -> Result<Regex> {
    Ok(RegexBuilder::new(pattern).case_insensitive(true).build()?)
}

fn validate_phrases(table: &str, phrases: &[String]) -> Result<()> {
    for phrase in phrases {
        if phrase.trim().is_empty() {
            return Err(TriageError::config(format!(
                "table '{table}' contains an empty phrase"
            )));
        }
        if phrase.chars().any(char::is_uppercase) {
            return Err(TriageError::config(format!(
                "table '{table}' phrase '{phrase}' must be lowercase"
            )));
        }
    }
    Ok(())
}
