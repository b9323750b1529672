//! End-to-end triage scenarios over the built-in tables.

use parts_triage::intent::{ApplianceType, Intent};
use parts_triage::prelude::*;
use serde_json::json;

#[test]
fn test_sanitize_is_idempotent() {
    let pipeline = default_pipeline();
    let inputs = [
        "  My   fridge\u{7}\u{0} is <b>loud</b>\t\n",
        "plain text",
        "\u{1b}[31m dishwasher \u{7f}",
        "",
    ];

    for raw in inputs {
        let once = pipeline.sanitizer().sanitize(raw);
        let twice = pipeline.sanitizer().sanitize(&once.cleaned);
        assert_eq!(once.cleaned, twice.cleaned, "input {raw:?}");
    }
}

#[test]
fn test_sanitized_forms() {
    let outcome = default_pipeline().analyze("  Is <b>PS11752778</b>   O'Brien's part? ");
    let message = &outcome.message;

    assert_eq!(message.cleaned, "Is <b>PS11752778</b> O'Brien's part?");
    assert_eq!(
        message.sanitized,
        "Is &lt;b&gt;PS11752778&lt;&#x2F;b&gt; O&#x27;Brien&#x27;s part?"
    );
    assert_eq!(message.lowercase, "is <b>ps11752778</b> o'brien's part?");
}

#[test]
fn test_analysis_is_deterministic() {
    let pipeline = TriagePipeline::default();
    let text = "Is this part compatible with my fridge?";
    let first = pipeline.analyze(text);

    for _ in 0..10 {
        assert_eq!(pipeline.analyze(text), first);
    }
    assert_eq!(default_pipeline().analyze(text), first);
}

#[test]
fn test_identifier_overrides_out_of_scope_words() {
    let outcome = default_pipeline().analyze("PS123456 weather joke");

    assert!(outcome.scope.in_scope);
    assert_eq!(outcome.scope.confidence, 1.0);
    assert_eq!(outcome.scope.category, ScopeCategory::PartsInquiry);
    assert_eq!(outcome.scope.score.in_scope, 0);
    assert_eq!(outcome.scope.score.out_of_scope, 0);
    assert_eq!(outcome.entities.part_numbers, vec!["PS123456"]);
    assert!(outcome.entities.model_numbers.is_empty());
}

#[test]
fn test_entity_extraction() {
    let text = "Is ps11752778 compatible with my wdt780saem1 dishwasher?";
    let outcome = default_pipeline().analyze(text);

    assert_eq!(outcome.entities.part_numbers, vec!["PS11752778"]);
    assert_eq!(outcome.entities.model_numbers, vec!["WDT780SAEM1"]);

    let intent = outcome.intent.unwrap();
    assert_eq!(intent.context.part_number.as_deref(), Some("PS11752778"));
    assert_eq!(intent.context.model_number.as_deref(), Some("WDT780SAEM1"));
    assert_eq!(intent.context.appliance_type, Some(ApplianceType::Dishwasher));
}

#[test]
fn test_out_of_scope() {
    let outcome = default_pipeline().analyze("Tell me a joke about the weather");

    assert!(!outcome.scope.in_scope);
    assert_eq!(outcome.scope.category, ScopeCategory::OutOfScope);
    assert_eq!(outcome.scope.score.in_scope, 9);
    assert_eq!(outcome.scope.score.out_of_scope, 55);
    assert_eq!(outcome.scope.confidence, 0.55);
    assert!(outcome.intent.is_none());

    let outcome = default_pipeline().analyze("What is the best movie this year");
    assert!(!outcome.scope.in_scope);
    assert_eq!(outcome.scope.confidence, 0.3);
}

#[test]
fn test_troubleshooting() {
    let outcome = default_pipeline().analyze("My dishwasher is leaking water");

    assert!(outcome.scope.in_scope);
    assert_eq!(outcome.scope.category, ScopeCategory::TroubleshootingInquiry);
    assert_eq!(outcome.scope.confidence, 0.32);

    let intent = outcome.intent.unwrap();
    assert_eq!(intent.intent, Intent::Troubleshooting);
    assert_eq!(intent.confidence, 0.2);
    assert_eq!(intent.context.appliance_type, Some(ApplianceType::Dishwasher));
}

#[test]
fn test_installation_guide() {
    let outcome = default_pipeline().analyze("How do I install PS11752778?");

    let intent = outcome.intent.unwrap();
    assert_eq!(intent.intent, Intent::InstallationGuide);
    assert_eq!(intent.confidence, 0.5);
    assert_eq!(intent.context.part_number.as_deref(), Some("PS11752778"));
}

#[test]
fn test_order_support() {
    let outcome = default_pipeline().analyze("Where can I track my order?");

    assert!(outcome.scope.in_scope);
    assert_eq!(outcome.scope.category, ScopeCategory::OrderSupport);
    assert_eq!(outcome.scope.confidence, 0.19);

    let intent = outcome.intent.unwrap();
    assert_eq!(intent.intent, Intent::OrderSupport);
    assert_eq!(intent.confidence, 0.7);
    assert_eq!(intent.scores[&Intent::ProductSearch], 10);
}

#[test]
fn test_compatibility_beats_product_search() {
    let outcome = default_pipeline().analyze("Is this part compatible with my fridge?");

    assert_eq!(outcome.scope.category, ScopeCategory::CompatibilityCheck);
    let intent = outcome.intent.unwrap();
    assert_eq!(intent.intent, Intent::CompatibilityCheck);
    assert_eq!(intent.scores[&Intent::CompatibilityCheck], 40);
    assert_eq!(intent.scores[&Intent::ProductSearch], 35);
    assert_eq!(intent.context.appliance_type, Some(ApplianceType::Refrigerator));
}

#[test]
fn test_product_search_defaults_to_parts_inquiry() {
    let outcome = default_pipeline().analyze("I need a replacement door shelf bin");

    assert_eq!(outcome.scope.category, ScopeCategory::PartsInquiry);
    assert_eq!(outcome.scope.confidence, 0.45);
    assert_eq!(outcome.intent.unwrap().intent, Intent::ProductSearch);
}

#[test]
fn test_ambiguous_defaults_to_in_scope() {
    for text in ["zzz", "hello there", "my laptop fridge"] {
        let outcome = default_pipeline().analyze(text);
        assert!(outcome.scope.in_scope, "{text}");
        assert_eq!(outcome.scope.confidence, 0.5, "{text}");
        assert_eq!(outcome.scope.category, ScopeCategory::GeneralInquiry, "{text}");
    }

    let outcome = default_pipeline().analyze("zzz");
    let intent = outcome.intent.unwrap();
    assert_eq!(intent.intent, Intent::GeneralInquiry);
    assert_eq!(intent.confidence, 0.0);
}

#[test]
fn test_ambiguous_scope_still_classifies_intent() {
    // in 18 vs out 10
    let outcome = default_pipeline().analyze("The ice maker is not working");
    assert_eq!(outcome.scope.category, ScopeCategory::GeneralInquiry);

    let intent = outcome.intent.unwrap();
    assert_eq!(intent.intent, Intent::Troubleshooting);
    assert_eq!(intent.confidence, 0.1);
    assert_eq!(intent.context.appliance_type, Some(ApplianceType::Refrigerator));
}

#[test]
fn test_empty_input() {
    let outcome = default_pipeline().analyze("   ");

    assert_eq!(outcome.message.cleaned, "");
    assert!(outcome.tokens.is_empty());
    assert!(outcome.entities.is_empty());
    assert!(outcome.scope.in_scope);
    assert_eq!(outcome.scope.category, ScopeCategory::GeneralInquiry);
}

#[test]
fn test_non_string_input_is_rejected() {
    let pipeline = default_pipeline();

    for value in [json!(null), json!(42), json!(["fridge"]), json!({"text": "fridge"})] {
        let result = pipeline.analyze_value(&value);
        assert!(matches!(result, Err(TriageError::InvalidInput(_))), "{value}");
    }

    let outcome = pipeline.analyze_value(&json!("fridge shelf")).unwrap();
    assert_eq!(outcome, pipeline.analyze("fridge shelf"));
}

#[test]
fn test_batch_matches_sequential() {
    let inputs: Vec<String> = (0..64)
        .map(|i| match i % 4 {
            0 => format!("How do I install PS{:08}?", 11752778 + i),
            1 => "Tell me a joke about the weather".to_string(),
            2 => "My dishwasher is leaking water".to_string(),
            _ => format!("order {i} status"),
        })
        .collect();

    let pipeline = default_pipeline();
    let batch = pipeline.analyze_batch(&inputs);

    assert_eq!(batch.len(), inputs.len());
    for (input, outcome) in inputs.iter().zip(&batch) {
        assert_eq!(outcome, &pipeline.analyze(input));
    }
}

#[test]
fn test_outcome_json_shape() {
    let outcome = default_pipeline().analyze("How do I install PS11752778?");
    let value = serde_json::to_value(&outcome).unwrap();

    assert_eq!(value["message"]["cleaned"], "How do I install PS11752778?");
    assert_eq!(value["entities"]["partNumbers"][0], "PS11752778");
    assert_eq!(value["scope"]["inScope"], true);
    assert_eq!(value["scope"]["category"], "parts_inquiry");
    assert_eq!(value["intent"]["intent"], "installation_guide");
    assert_eq!(value["intent"]["context"]["partNumber"], "PS11752778");
}
