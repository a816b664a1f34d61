//! Regular-expression filter

use crate::core::{Filter, LoggerError, Result};
use regex::Regex;

/// Approves messages in which a regular expression finds a match
///
/// The pattern is compiled once, at construction. An invalid pattern is
/// rejected there, before the filter can join a pipeline.
///
/// # Example
///
/// ```
/// use pipeline_logger::filters::PatternFilter;
/// use pipeline_logger::Filter;
///
/// let filter = PatternFilter::new(r"\d{4}-\d{2}-\d{2}")?;
/// assert!(filter.matches("log at 2025-06-08"));
/// assert!(!filter.matches("log at no-date-here"));
/// # Ok::<(), pipeline_logger::LoggerError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PatternFilter {
    regex: Regex,
}

impl PatternFilter {
    /// Compile `pattern`
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::InvalidPattern`] if the pattern does not compile.
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|e| LoggerError::pattern(pattern, e))?;
        Ok(Self { regex })
    }

    /// Wrap an already compiled expression
    pub fn from_regex(regex: Regex) -> Self {
        Self { regex }
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

impl Filter for PatternFilter {
    fn matches(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    fn name(&self) -> &str {
        "pattern"
    }
}
