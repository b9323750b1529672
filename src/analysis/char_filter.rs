//! Char filters that rewrite raw text before it is tokenized or stored.
//!
//! # Available Filters
//!
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement
//! - [`trim::TrimCharFilter`] - Strips leading and trailing whitespace
//!
//! # Examples
//!
//! ```
//! use parts_triage::analysis::char_filter::CharFilter;
//! use parts_triage::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
//!
//! let filter = PatternReplaceCharFilter::new(r"\s+", " ").unwrap();
//! assert_eq!(filter.filter("ice \t maker"), "ice maker");
//! ```

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod pattern_replace;
pub mod trim;
