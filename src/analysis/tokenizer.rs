//! Tokenizer implementations for text annotation.
//!
//! Tokenizers run after the char filters and split the filtered text into
//! words. The sentence splitter works on raw text and feeds the summary
//! extractor.
//!
//! # Available Tokenizers
//!
//! - [`whitespace::WhitespaceTokenizer`] - Splits on runs of whitespace
//! - [`sentence::SentenceSplitter`] - Splits on runs of `.`, `!`, `?`
//!
//! # Examples
//!
//! ```
//! use exude::analysis::tokenizer::Tokenizer;
//! use exude::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens = tokenizer.tokenize("Hello \t world");
//! assert_eq!(tokens, vec!["Hello", "world"]);
//! ```

/// Trait for tokenizers that split filtered text into words.
///
/// Tokenization never fails: empty or blank input yields an empty vector.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text.
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod sentence;
pub mod whitespace;

pub use sentence::SentenceSplitter;
pub use whitespace::WhitespaceTokenizer;
