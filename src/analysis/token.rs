//! Token types for text annotation.
//!
//! Every analyzer walks the input as a sequence of aligned token pairs: the
//! case-preserving form is what gets rendered back to the user, the
//! normalized form is what gets matched against lexicons.
//!
//! ```text
//! Input:      "The Foxes, running!"
//! original:   ["The", "Foxes", "running"]
//! normalized: ["the", "foxes", "running"]
//! ```
//!
//! # Examples
//!
//! ```
//! use exude::analysis::token::Token;
//!
//! let token = Token::new(0, "Foxes", "foxes");
//! assert_eq!(token.original, "Foxes");
//! assert_eq!(token.normalized, "foxes");
//! assert!(!token.is_case_normalized());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single token seen through both tokenizer passes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Position in the token sequence (0-based)
    pub position: usize,

    /// The token as written, punctuation stripped
    pub original: String,

    /// The lowercased token used for lexicon matching
    pub normalized: String,
}

impl Token {
    /// Create a new token pair at the given position.
    pub fn new<O, N>(position: usize, original: O, normalized: N) -> Self
    where
        O: Into<String>,
        N: Into<String>,
    {
        Token {
            position,
            original: original.into(),
            normalized: normalized.into(),
        }
    }

    /// Length of the normalized form in characters.
    pub fn char_len(&self) -> usize {
        self.normalized.chars().count()
    }

    /// Whether the original form was already lowercase.
    pub fn is_case_normalized(&self) -> bool {
        self.original == self.normalized
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.original)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new(3, "Badword", "badword");
        assert_eq!(token.position, 3);
        assert_eq!(token.original, "Badword");
        assert_eq!(token.normalized, "badword");
        assert_eq!(token.char_len(), 7);
    }

    #[test]
    fn test_case_normalized() {
        assert!(Token::new(0, "quick", "quick").is_case_normalized());
        assert!(!Token::new(0, "Quick", "quick").is_case_normalized());
    }

    #[test]
    fn test_token_display() {
        let token = Token::new(0, "Hello", "hello");
        assert_eq!(format!("{token}"), "Hello");
    }

    #[test]
    fn test_char_len_counts_characters() {
        let token = Token::new(0, "Café", "café");
        assert_eq!(token.char_len(), 4);
        assert_eq!(token.normalized.len(), 5);
    }
}
