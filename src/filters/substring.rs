//! Case-insensitive substring filter

use crate::core::Filter;

/// Approves messages containing a fixed substring, ignoring case
///
/// # Example
///
/// ```
/// use pipeline_logger::filters::SubstringFilter;
/// use pipeline_logger::Filter;
///
/// let filter = SubstringFilter::new("ERROR");
/// assert!(filter.matches("Error occurred"));
/// assert!(!filter.matches("all good"));
/// ```
#[derive(Debug, Clone)]
pub struct SubstringFilter {
    pattern: String,
    needle: String,
}

impl SubstringFilter {
    pub fn new(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let needle = pattern.to_lowercase();
        Self { pattern, needle }
    }

    /// The substring as it was configured
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Filter for SubstringFilter {
    fn matches(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.needle)
    }

    fn name(&self) -> &str {
        "substring"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_match() {
        let filter = SubstringFilter::new("ERROR");
        assert!(filter.matches("Error occurred"));
        assert!(filter.matches("error occurred"));
        assert!(filter.matches("2025-06-08 ERROR: disk full"));
    }

    #[test]
    fn test_lowercase_pattern_matches_uppercase_text() {
        let filter = SubstringFilter::new("warn");
        assert!(filter.matches("WARNING: low memory"));
    }

    #[test]
    fn test_no_match() {
        let filter = SubstringFilter::new("ERROR");
        assert!(!filter.matches("2025-06-08 INFO: ok"));
        assert!(!filter.matches(""));
    }

    #[test]
    fn test_empty_pattern_matches_everything() {
        let filter = SubstringFilter::new("");
        assert!(filter.matches("anything"));
        assert!(filter.matches(""));
    }

    #[test]
    fn test_unicode_case_folding() {
        let filter = SubstringFilter::new("ОШИБКА");
        assert!(filter.matches("произошла ошибка записи"));
    }

    #[test]
    fn test_pattern_is_kept_verbatim() {
        let filter = SubstringFilter::new("Disk Full");
        assert_eq!(filter.pattern(), "Disk Full");
        assert_eq!(filter.name(), "substring");
    }
}
