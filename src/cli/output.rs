//! Output formatting for CLI commands.

use std::io::Write;

use serde::Serialize;

use crate::cli::args::{OutputFormat, TriageArgs};
use crate::entity::EntitySet;
use crate::error::Result;
use crate::pipeline::TriageOutcome;
use crate::sanitize::SanitizedMessage;

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &TriageArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output a triage outcome.
pub fn output_outcome(
    outcome: &TriageOutcome,
    show_tokens: bool,
    args: &TriageArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            print!("{}", format_outcome(outcome, show_tokens || args.verbosity() > 1));
            Ok(())
        }
        OutputFormat::Json => output_json(outcome, args),
    }
}

/// Output batch outcomes, one per line in input order.
///
/// JSON output is always one compact document per line.
pub fn output_batch<W: Write>(
    outcomes: &[TriageOutcome],
    args: &TriageArgs,
    out: &mut W,
) -> Result<()> {
    for outcome in outcomes {
        match args.output_format {
            OutputFormat::Human => writeln!(out, "{}", format_outcome_line(outcome))?,
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(outcome)?)?,
        }
    }
    Ok(())
}

/// Output extracted identifiers.
pub fn output_entities(entities: &EntitySet, args: &TriageArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            print!("{}", format_entities(entities));
            Ok(())
        }
        OutputFormat::Json => output_json(entities, args),
    }
}

/// Output the sanitized forms of an utterance.
pub fn output_sanitized(message: &SanitizedMessage, args: &TriageArgs) -> Result<()> {
    output_result("Sanitized message", message, args)
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &TriageArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                let formatted_val = format_value(&val);
                println!("{key}: {formatted_val}");
            }
        }
        _ => {
            let formatted_value = format_value(&value);
            println!("{formatted_value}");
        }
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &TriageArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Multi-line human rendering of one outcome.
pub fn format_outcome(outcome: &TriageOutcome, show_tokens: bool) -> String {
    let scope = &outcome.scope;
    let mut out = String::new();

    out.push_str("Triage Result:\n");
    out.push_str("══════════════\n");
    out.push_str(&format!("Message:    {}\n", outcome.message.cleaned));
    out.push_str(&format!(
        "Scope:      {} ({}, confidence {:.2})\n",
        if scope.in_scope { "in scope" } else { "out of scope" },
        scope.category,
        scope.confidence
    ));
    out.push_str(&format!("Reason:     {}\n", scope.reason));
    out.push_str(&format!(
        "Scores:     in {} / out {} / patterns {}\n",
        scope.score.in_scope, scope.score.out_of_scope, scope.score.patterns
    ));

    if let Some(intent) = &outcome.intent {
        out.push_str(&format!(
            "Intent:     {} (confidence {:.2})\n",
            intent.intent, intent.confidence
        ));
        if !intent.keywords.is_empty() {
            out.push_str(&format!("Keywords:   {}\n", intent.keywords.join(", ")));
        }
        if let Some(appliance) = intent.context.appliance_type {
            out.push_str(&format!("Appliance:  {appliance}\n"));
        }
    }

    if !outcome.entities.is_empty() {
        out.push_str(&format_entities(&outcome.entities));
    }

    if show_tokens {
        out.push_str(&format!("Tokens:     [{}]\n", outcome.tokens.join(", ")));
    }

    out
}

/// Single-line human rendering used by batch output.
pub fn format_outcome_line(outcome: &TriageOutcome) -> String {
    let intent = outcome
        .intent
        .as_ref()
        .map(|i| format!("{} {:.2}", i.intent, i.confidence))
        .unwrap_or_else(|| "-".to_string());

    format!(
        "{:<24} {:.2}  {:<26} {}",
        outcome.scope.category.as_str(),
        outcome.scope.confidence,
        intent,
        outcome.message.cleaned
    )
}

fn format_entities(entities: &EntitySet) -> String {
    let list = |items: &[String]| {
        if items.is_empty() {
            "(none)".to_string()
        } else {
            items.join(", ")
        }
    };

    format!(
        "Parts:      {}\nModels:     {}\n",
        list(&entities.part_numbers),
        list(&entities.model_numbers)
    )
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}
