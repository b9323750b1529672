//! Common types for intent classification.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The user's high-level goal for one utterance.
///
/// Declaration order is the tie-break order: when two intents score the same,
/// the one declared first wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    ProductSearch,
    CompatibilityCheck,
    InstallationGuide,
    Troubleshooting,
    OrderSupport,
    /// Default when no trigger phrase scores.
    GeneralInquiry,
}

impl Intent {
    /// Intents that carry trigger tables, in tie-break order.
    pub const SCORED: [Intent; 5] = [
        Intent::ProductSearch,
        Intent::CompatibilityCheck,
        Intent::InstallationGuide,
        Intent::Troubleshooting,
        Intent::OrderSupport,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::ProductSearch => "product_search",
            Intent::CompatibilityCheck => "compatibility_check",
            Intent::InstallationGuide => "installation_guide",
            Intent::Troubleshooting => "troubleshooting",
            Intent::OrderSupport => "order_support",
            Intent::GeneralInquiry => "general_inquiry",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Appliance family mentioned in an utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplianceType {
    Refrigerator,
    Dishwasher,
}

impl fmt::Display for ApplianceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplianceType::Refrigerator => f.write_str("refrigerator"),
            ApplianceType::Dishwasher => f.write_str("dishwasher"),
        }
    }
}

/// Identifiers and appliance hints carried along with the intent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentContext {
    pub part_number: Option<String>,
    pub model_number: Option<String>,
    pub appliance_type: Option<ApplianceType>,
}

/// Outcome of intent classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentResult {
    pub intent: Intent,
    /// `min(score / 100, 0.99)` of the winning intent.
    pub confidence: f64,
    /// Trigger phrases of the winning intent that matched, first-seen order.
    pub keywords: Vec<String>,
    pub context: IntentContext,
    /// Clamped score per scored intent.
    pub scores: BTreeMap<Intent, u32>,
}

impl IntentResult {
    /// Confidence substituted when classification fails internally.
    pub const FALLBACK_CONFIDENCE: f64 = 0.3;

    /// The low-confidence default returned when classification fails.
    pub fn fallback() -> Self {
        IntentResult {
            intent: Intent::GeneralInquiry,
            confidence: Self::FALLBACK_CONFIDENCE,
            keywords: Vec::new(),
            context: IntentContext::default(),
            scores: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_order() {
        let mut intents = vec![
            Intent::OrderSupport,
            Intent::ProductSearch,
            Intent::Troubleshooting,
        ];
        intents.sort();
        assert_eq!(
            intents,
            vec![Intent::ProductSearch, Intent::Troubleshooting, Intent::OrderSupport]
        );
    }

    #[test]
    fn test_serialization() {
        let mut scores = BTreeMap::new();
        scores.insert(Intent::InstallationGuide, 50);
        let result = IntentResult {
            intent: Intent::InstallationGuide,
            confidence: 0.5,
            keywords: vec!["install".to_string()],
            context: IntentContext {
                part_number: Some("PS11752778".to_string()),
                model_number: None,
                appliance_type: Some(ApplianceType::Dishwasher),
            },
            scores,
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["intent"], "installation_guide");
        assert_eq!(value["context"]["partNumber"], "PS11752778");
        assert!(value["context"]["modelNumber"].is_null());
        assert_eq!(value["context"]["applianceType"], "dishwasher");
        assert_eq!(value["scores"]["installation_guide"], 50);
    }

    #[test]
    fn test_fallback() {
        let fallback = IntentResult::fallback();
        assert_eq!(fallback.intent, Intent::GeneralInquiry);
        assert_eq!(fallback.confidence, 0.3);
        assert!(fallback.keywords.is_empty());
        assert!(fallback.scores.is_empty());
        assert_eq!(fallback.context, IntentContext::default());
    }
}
