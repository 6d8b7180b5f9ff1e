//! Char filters that rewrite raw text before it reaches the tokenizer.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseCharFilter`] - Lowercases the whole input
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement,
//!   used to strip the fixed punctuation set
//!
//! # Examples
//!
//! ```
//! use exude::analysis::char_filter::CharFilter;
//! use exude::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
//!
//! let filter = PatternReplaceCharFilter::punctuation().unwrap();
//! assert_eq!(filter.filter("Hello, world!"), "Hello world");
//! ```

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod pattern_replace;

pub use lowercase::LowercaseCharFilter;
pub use pattern_replace::PatternReplaceCharFilter;
