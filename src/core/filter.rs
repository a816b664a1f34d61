//! Filter trait for deciding which messages reach the handlers

/// A predicate over log message text.
///
/// Filters hold their configuration from construction onward and carry no
/// per-call state, so a single filter may be evaluated from many threads.
pub trait Filter: Send + Sync {
    /// Return `true` if `text` should proceed to the handlers.
    fn matches(&self, text: &str) -> bool;

    fn name(&self) -> &str {
        "filter"
    }
}

impl<F> Filter for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn matches(&self, text: &str) -> bool {
        self(text)
    }

    fn name(&self) -> &str {
        "fn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_filter() {
        let short = |text: &str| text.len() < 10;
        assert!(short.matches("tiny"));
        assert!(!short.matches("definitely too long"));
        assert_eq!(Filter::name(&short), "fn");
    }

    #[test]
    fn test_boxed_closure_filter() {
        let filter: Box<dyn Filter> = Box::new(|text: &str| text.starts_with('!'));
        assert!(filter.matches("!alert"));
        assert!(!filter.matches("quiet"));
    }
}
