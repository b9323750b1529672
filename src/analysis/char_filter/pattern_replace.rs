use regex::Regex;

use super::CharFilter;
use crate::error::Result;

/// Pattern matching the C0 control characters and DEL, minus tab, line feed
/// and carriage return, which are left for whitespace collapsing.
pub const CONTROL_CHARS_PATTERN: &str = r"[\x{00}-\x{08}\x{0B}\x{0C}\x{0E}-\x{1F}\x{7F}]";

/// Pattern matching any run of whitespace.
pub const WHITESPACE_RUN_PATTERN: &str = r"\s+";

/// A char filter that replaces text matching a regex pattern.
#[derive(Clone, Debug)]
pub struct PatternReplaceCharFilter {
    pattern: Regex,
    replacement: String,
}

impl PatternReplaceCharFilter {
    /// Create a new pattern replace char filter.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            replacement: replacement.to_string(),
        })
    }

    /// Filter that deletes control characters.
    pub fn control_chars() -> Result<Self> {
        Self::new(CONTROL_CHARS_PATTERN, "")
    }

    /// Filter that collapses whitespace runs to a single ASCII space.
    pub fn collapse_whitespace() -> Result<Self> {
        Self::new(WHITESPACE_RUN_PATTERN, " ")
    }
}

impl CharFilter for PatternReplaceCharFilter {
    fn filter(&self, input: &str) -> String {
        // Replacement is literal; `$` in it must not expand capture groups.
        self.pattern
            .replace_all(input, regex::NoExpand(&self.replacement))
            .into_owned()
    }

    fn name(&self) -> &'static str {
        "pattern_replace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_replace() {
        let filter = PatternReplaceCharFilter::new(r"\d+", "NUM").unwrap();
        assert_eq!(filter.filter("Year 2024"), "Year NUM");
    }

    #[test]
    fn test_remove_pattern() {
        let filter = PatternReplaceCharFilter::new(r"-", "").unwrap();
        assert_eq!(filter.filter("123-456-789"), "123456789");
    }

    #[test]
    fn test_literal_replacement() {
        let filter = PatternReplaceCharFilter::new(r"x", "$1").unwrap();
        assert_eq!(filter.filter("axb"), "a$1b");
    }

    #[test]
    fn test_control_chars() {
        let filter = PatternReplaceCharFilter::control_chars().unwrap();
        assert_eq!(filter.filter("a\u{0}b\u{8}c\u{7f}d"), "abcd");
        assert_eq!(filter.filter("keep\ttab\nand\rbreaks"), "keep\ttab\nand\rbreaks");
        assert_eq!(filter.filter("\u{b}\u{c}\u{e}\u{1f}"), "");
    }

    #[test]
    fn test_collapse_whitespace() {
        let filter = PatternReplaceCharFilter::collapse_whitespace().unwrap();
        assert_eq!(filter.filter("door \t\n  gasket"), "door gasket");
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(PatternReplaceCharFilter::new("(", "").is_err());
    }
}
