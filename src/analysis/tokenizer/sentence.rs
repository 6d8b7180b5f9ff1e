//! Sentence splitter used by the summary extractor.

use regex::Regex;

use crate::error::{ExudeError, Result};

/// Splits raw text into sentences on runs of terminal punctuation.
#[derive(Clone, Debug)]
pub struct SentenceSplitter {
    terminators: Regex,
}

impl SentenceSplitter {
    /// Create a splitter breaking on runs of `.`, `!` and `?`.
    pub fn new() -> Result<Self> {
        let terminators = Regex::new(r"[.!?]+")
            .map_err(|e| ExudeError::analysis(format!("Invalid sentence pattern: {e}")))?;

        Ok(SentenceSplitter { terminators })
    }

    /// Split `text` into trimmed, non-blank sentences.
    pub fn split(&self, text: &str) -> Vec<String> {
        self.terminators
            .split(text)
            .map(str::trim)
            .filter(|sentence| !sentence.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// The first non-blank sentence, if any.
    pub fn first(&self, text: &str) -> Option<String> {
        self.terminators
            .split(text)
            .map(str::trim)
            .find(|sentence| !sentence.is_empty())
            .map(str::to_string)
    }
}
