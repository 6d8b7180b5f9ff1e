use regex::Regex;

use super::CharFilter;
use crate::error::{ExudeError, Result};

/// Characters removed before tokenization.
///
/// A literal class, not Unicode punctuation: `'`, `"`, `?`, `@`, `<`, `>`,
/// `|`, `+` and `\` all survive.
pub const PUNCTUATION_PATTERN: &str = r"[.,/#!$%^&*;:{}=\-_`~()\[\]]";

/// A char filter that replaces characters matching a regex pattern.
#[derive(Clone, Debug)]
pub struct PatternReplaceCharFilter {
    pattern: Regex,
    replacement: String,
}

impl PatternReplaceCharFilter {
    /// Create a new pattern replace char filter.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .map_err(|e| ExudeError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(Self {
            pattern,
            replacement: replacement.to_string(),
        })
    }

    /// Filter that deletes the fixed punctuation set.
    pub fn punctuation() -> Result<Self> {
        Self::new(PUNCTUATION_PATTERN, "")
    }

    /// Get the regex pattern used by this filter.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl CharFilter for PatternReplaceCharFilter {
    fn filter(&self, input: &str) -> String {
        self.pattern
            .replace_all(input, regex::NoExpand(&self.replacement))
            .into_owned()
    }

    fn name(&self) -> &'static str {
        "pattern_replace"
    }
}
