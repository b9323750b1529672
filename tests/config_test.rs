//! Loading keyword tables and patterns from JSON files.

use std::io::Write;

use parts_triage::config::{IntentTriggers, KeywordTables, PatternConfig};
use parts_triage::intent::{Intent, IntentClassifier, KeywordIntentClassifier};
use parts_triage::prelude::*;
use tempfile::NamedTempFile;

fn write_config(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_round_trip_through_file() -> Result<()> {
    let file = write_config(&serde_json::to_string_pretty(&TriageConfig::default())?);
    let config = TriageConfig::from_file(file.path())?;

    assert_eq!(config, TriageConfig::default());
    Ok(())
}

#[test]
fn test_custom_tables_drive_classification() -> Result<()> {
    let file = write_config(
        r#"{
            "keywords": {
                "in_scope": ["kettle", "element"],
                "out_of_scope": ["weather"],
                "intents": {
                    "order_support": ["kettle"]
                }
            }
        }"#,
    );
    let pipeline = TriagePipeline::new(TriageConfig::from_file(file.path())?)?;

    let outcome = pipeline.analyze("kettle element");
    assert!(outcome.scope.in_scope);
    // kettle: exact 10 + partial 3, element: exact 10 + partial 3
    assert_eq!(outcome.scope.score.in_scope, 26);
    assert_eq!(outcome.intent.unwrap().intent, Intent::OrderSupport);

    // built-in tables no longer apply to scope
    let outcome = pipeline.analyze("dishwasher");
    assert_eq!(outcome.scope.score.in_scope, 0);
    assert_eq!(outcome.scope.category, ScopeCategory::GeneralInquiry);

    // intent tables left out of the file keep their defaults
    assert_eq!(
        pipeline.config().keywords.intents.troubleshooting,
        IntentTriggers::default().troubleshooting
    );
    Ok(())
}

#[test]
fn test_custom_part_pattern() -> Result<()> {
    let file = write_config(r#"{"patterns": {"part_number": "WP\\d{5,}"}}"#);
    let config = TriageConfig::from_file(file.path())?;
    assert_eq!(config.patterns.model_number, PatternConfig::default().model_number);

    let pipeline = TriagePipeline::new(config)?;
    let outcome = pipeline.analyze("wp12345 weather joke");
    assert_eq!(outcome.entities.part_numbers, vec!["WP12345"]);
    assert_eq!(outcome.scope.confidence, 1.0);
    Ok(())
}

#[test]
fn test_invalid_files_are_rejected() {
    let cases = [
        r#"{"keywords": {"in_scope": [""]}}"#,
        r#"{"keywords": {"out_of_scope": ["Weather"]}}"#,
        r#"{"patterns": {"sku": "(unclosed"}}"#,
        r#"{"keywords": "#,
    ];

    for json in cases {
        let file = write_config(json);
        assert!(TriageConfig::from_file(file.path()).is_err(), "{json}");
    }
}

#[test]
fn test_empty_phrase_is_a_config_error() {
    let result = TriageConfig::from_json_str(r#"{"keywords": {"in_scope": ["fridge", " "]}}"#);
    assert!(matches!(result, Err(TriageError::Config(_))));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = TriageConfig::from_file(dir.path().join("absent.json"));
    assert!(matches!(result, Err(TriageError::Io(_))));
}

#[test]
fn test_unvalidated_tables_fail_soft() -> Result<()> {
    // Constructed in code, so from_json_str validation is bypassed.
    let mut tables = KeywordTables::default();
    tables.intents.compatibility_check.push(String::new());
    let config = TriageConfig {
        keywords: tables,
        patterns: PatternConfig::default(),
    };
    assert!(TriagePipeline::new(config.clone()).is_err());

    let classifier = KeywordIntentClassifier::new(&config.keywords.intents)?;
    let result = classifier.classify(&["fit".to_string()], &EntitySet::default());
    assert_eq!(result.intent, Intent::GeneralInquiry);
    assert_eq!(result.confidence, 0.3);
    Ok(())
}
