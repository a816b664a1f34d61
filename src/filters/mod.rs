//! Filter implementations

pub mod pattern;
pub mod substring;

pub use pattern::PatternFilter;
pub use substring::SubstringFilter;

// Re-export trait for convenience
pub use crate::core::Filter;
