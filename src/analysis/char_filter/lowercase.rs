//! Lowercase char filter.
//!
//! Lowercases the whole input before any other filtering, so the
//! normalized tokenizer pass sees the same characters as the
//! case-preserving one, only folded.

use super::CharFilter;

/// A char filter that converts the entire text to lowercase.
#[derive(Clone, Debug, Default)]
pub struct LowercaseCharFilter;

impl LowercaseCharFilter {
    /// Create a new lowercase char filter.
    pub fn new() -> Self {
        LowercaseCharFilter
    }
}

impl CharFilter for LowercaseCharFilter {
    fn filter(&self, input: &str) -> String {
        if input.is_ascii() {
            input.to_ascii_lowercase()
        } else {
            input.to_lowercase()
        }
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
