//! Input sanitization.
//!
//! Every inbound utterance is normalized once into a [`SanitizedMessage`]
//! holding the four forms the rest of the pipeline needs. The cleaning steps
//! run as a chain of char filters, in this order:
//!
//! 1. delete control characters (U+0000–U+0008, U+000B–U+000C, U+000E–U+001F, U+007F)
//! 2. trim leading and trailing whitespace
//! 3. collapse internal whitespace runs to one ASCII space
//!
//! The HTML-escaped and lowercase forms are both derived from the step-3
//! output. Cleaning is a fixed point: sanitizing `cleaned` again yields the
//! same `cleaned`.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::analysis::char_filter::CharFilter;
use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
use crate::analysis::char_filter::trim::TrimCharFilter;
use crate::error::{Result, TriageError};

/// The canonical forms of one inbound message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SanitizedMessage {
    /// The text exactly as received.
    pub original: String,
    /// Control characters removed, trimmed, whitespace collapsed.
    pub cleaned: String,
    /// `cleaned` with HTML-significant characters entity-escaped.
    pub sanitized: String,
    /// `cleaned` lowercased.
    pub lowercase: String,
}

/// Runs the cleaning char filters and derives the escaped and lowercase forms.
#[derive(Clone)]
pub struct Sanitizer {
    char_filters: Vec<Arc<dyn CharFilter>>,
}

impl std::fmt::Debug for Sanitizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sanitizer")
            .field(
                "char_filters",
                &self.char_filters.iter().map(|c| c.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Sanitizer {
    /// Build the standard cleaning chain.
    pub fn new() -> Result<Self> {
        Ok(Sanitizer {
            char_filters: vec![
                Arc::new(PatternReplaceCharFilter::control_chars()?),
                Arc::new(TrimCharFilter::new()),
                Arc::new(PatternReplaceCharFilter::collapse_whitespace()?),
            ],
        })
    }

    /// Clean `raw` into a [`SanitizedMessage`]. Never fails on text content.
    ///
    /// # Examples
    ///
    /// ```
    /// use parts_triage::sanitize::Sanitizer;
    ///
    /// let sanitizer = Sanitizer::new().unwrap();
    /// let message = sanitizer.sanitize("  Is <PS11752778>\u{0}  in   stock? ");
    ///
    /// assert_eq!(message.cleaned, "Is <PS11752778> in stock?");
    /// assert_eq!(message.sanitized, "Is &lt;PS11752778&gt; in stock?");
    /// assert_eq!(message.lowercase, "is <ps11752778> in stock?");
    /// ```
    pub fn sanitize(&self, raw: &str) -> SanitizedMessage {
        let mut cleaned = raw.to_string();
        for char_filter in &self.char_filters {
            cleaned = char_filter.filter(&cleaned);
        }

        SanitizedMessage {
            original: raw.to_string(),
            sanitized: escape_html(&cleaned),
            lowercase: cleaned.to_lowercase(),
            cleaned,
        }
    }

    /// Sanitize a dynamically typed value received at an integration boundary.
    ///
    /// Anything other than a JSON string is a contract violation by the
    /// caller and is reported as [`TriageError::InvalidInput`].
    pub fn sanitize_value(&self, value: &Value) -> Result<SanitizedMessage> {
        match value {
            Value::String(raw) => Ok(self.sanitize(raw)),
            other => Err(TriageError::invalid_input(format!(
                "message must be a string, got {}",
                json_type_name(other)
            ))),
        }
    }
}

/// Escape `& < > " ' /` as HTML entities.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            '/' => escaped.push_str("&#x2F;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
