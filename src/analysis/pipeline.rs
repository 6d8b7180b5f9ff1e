//! Token pipeline combining char filters and a tokenizer.
//!
//! The pipeline runs the same input through two passes and zips them:
//!
//! 1. case-preserving: punctuation filter → whitespace tokenizer
//! 2. normalized: lowercase filter → punctuation filter → whitespace tokenizer
//!
//! Every analyzer relies on the two passes being positionally aligned.
//!
//! # Examples
//!
//! ```
//! use exude::analysis::pipeline::TokenPipeline;
//!
//! let pipeline = TokenPipeline::new().unwrap();
//! let tokens = pipeline.tokens("The Foxes, running!");
//!
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[1].original, "Foxes");
//! assert_eq!(tokens[1].normalized, "foxes");
//! ```

use std::sync::Arc;

use log::warn;

use crate::analysis::char_filter::{CharFilter, LowercaseCharFilter, PatternReplaceCharFilter};
use crate::analysis::token::Token;
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::error::Result;

/// Char filters plus a tokenizer, run once per tokenizer pass.
#[derive(Clone)]
pub struct TokenPipeline {
    lowercase: Arc<dyn CharFilter>,
    char_filters: Vec<Arc<dyn CharFilter>>,
    tokenizer: Arc<dyn Tokenizer>,
}

impl TokenPipeline {
    /// Create the standard pipeline: punctuation stripping and whitespace
    /// splitting.
    pub fn new() -> Result<Self> {
        Ok(Self::with_tokenizer(Arc::new(WhitespaceTokenizer::new()))
            .add_char_filter(Arc::new(PatternReplaceCharFilter::punctuation()?)))
    }

    /// Create a pipeline with no char filters around the given tokenizer.
    pub fn with_tokenizer(tokenizer: Arc<dyn Tokenizer>) -> Self {
        TokenPipeline {
            lowercase: Arc::new(LowercaseCharFilter::new()),
            char_filters: Vec::new(),
            tokenizer,
        }
    }

    /// Add a char filter, applied after any already added.
    pub fn add_char_filter(mut self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(char_filter);
        self
    }

    /// Get the tokenizer used by this pipeline.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the char filters used by this pipeline.
    pub fn char_filters(&self) -> &[Arc<dyn CharFilter>] {
        &self.char_filters
    }

    /// Tokenize `text`, lowercasing it first unless `preserve_case` is set.
    pub fn tokenize(&self, text: &str, preserve_case: bool) -> Vec<String> {
        let mut filtered = if preserve_case {
            text.to_string()
        } else {
            self.lowercase.filter(text)
        };

        for char_filter in &self.char_filters {
            filtered = char_filter.filter(&filtered);
        }

        self.tokenizer.tokenize(&filtered)
    }

    /// Run both passes and pair them up by position.
    ///
    /// If the passes ever disagree in length the result is truncated to the
    /// shorter one.
    pub fn tokens(&self, text: &str) -> Vec<Token> {
        let originals = self.tokenize(text, true);
        let normalized = self.tokenize(text, false);

        if originals.len() != normalized.len() {
            warn!(
                "tokenizer passes diverged: {} case-preserving vs {} normalized tokens",
                originals.len(),
                normalized.len()
            );
        }

        originals
            .into_iter()
            .zip(normalized)
            .enumerate()
            .map(|(position, (original, normalized))| Token::new(position, original, normalized))
            .collect()
    }
}

impl std::fmt::Debug for TokenPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenPipeline")
            .field(
                "char_filters",
                &self.char_filters.iter().map(|c| c.name()).collect::<Vec<_>>(),
            )
            .field("tokenizer", &self.tokenizer.name())
            .finish()
    }
}
