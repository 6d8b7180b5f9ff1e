//! Suffix-stripping stemmers.
//!
//! Both stemmers share one rule table, checked in order against the
//! normalized token (never against an intermediate stem):
//!
//! | # | condition (length in chars)           | rewrite         |
//! |---|---------------------------------------|-----------------|
//! | 1 | len > 5, ends "ies"                   | "ies" → "y"     |
//! | 2 | len > 3, ends "es"                    | drop "es"       |
//! | 3 | len > 2, ends "s", not a stop word    | drop "s"        |
//! | 4 | len > 4, ends "ing"                   | drop "ing"      |
//! | 5 | len > 3, ends "ed"                    | drop "ed"       |
//! | 6 | len > 4, ends "ly"                    | drop "ly"       |
//!
//! [`CascadeStemmer`] treats rules 1-3 as an else-chain and lets each of
//! rules 4-6 overwrite whatever came before. [`ExclusiveStemmer`] stops at
//! the first matching rule.
//!
//! # Examples
//!
//! ```
//! use exude::analysis::lexicon::Lexicons;
//! use exude::analysis::stemmer::{CascadeStemmer, Stemmer};
//!
//! let stemmer = CascadeStemmer::new(Lexicons::default().stop_words);
//! assert_eq!(stemmer.stem("running"), "runn");
//! assert_eq!(stemmer.stem("foxes"), "fox");
//! assert_eq!(stemmer.stem("authorities"), "authority");
//! ```

use serde::{Deserialize, Serialize};

use crate::analysis::lexicon::Lexicon;

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a normalized word.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

pub mod cascade;
pub mod exclusive;

pub use cascade::CascadeStemmer;
pub use exclusive::ExclusiveStemmer;

/// Which rule application strategy the stemming analyzer uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StemmingMode {
    /// Rules 4-6 overwrite the result of rules 1-3
    #[default]
    Cascade,
    /// First matching rule wins
    Exclusive,
}

/// One row of the rule table.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SuffixRule {
    /// Word must be strictly longer than this many characters
    pub min_len: usize,
    pub suffix: &'static str,
    pub replacement: &'static str,
    /// Skip words that are themselves stop words
    pub skip_stop_words: bool,
}

impl SuffixRule {
    const fn new(min_len: usize, suffix: &'static str, replacement: &'static str) -> Self {
        SuffixRule {
            min_len,
            suffix,
            replacement,
            skip_stop_words: false,
        }
    }

    const fn unless_stop_word(mut self) -> Self {
        self.skip_stop_words = true;
        self
    }

    /// Rewrite `word` if this rule matches it.
    pub fn apply(&self, word: &str, char_len: usize, stop_words: &Lexicon) -> Option<String> {
        if char_len <= self.min_len {
            return None;
        }
        if self.skip_stop_words && stop_words.contains(word) {
            return None;
        }

        word.strip_suffix(self.suffix)
            .map(|stem| format!("{stem}{}", self.replacement))
    }
}

/// Rules 1-3: plural forms, mutually exclusive.
pub(crate) const PLURAL_RULES: [SuffixRule; 3] = [
    SuffixRule::new(5, "ies", "y"),
    SuffixRule::new(3, "es", ""),
    SuffixRule::new(2, "s", "").unless_stop_word(),
];

/// Rules 4-6: verb and adverb endings, each checked independently.
pub(crate) const INFLECTION_RULES: [SuffixRule; 3] = [
    SuffixRule::new(4, "ing", ""),
    SuffixRule::new(3, "ed", ""),
    SuffixRule::new(4, "ly", ""),
];

/// Build the stemmer selected by `mode`.
pub fn stemmer_for(mode: StemmingMode, stop_words: Lexicon) -> Box<dyn Stemmer> {
    match mode {
        StemmingMode::Cascade => Box::new(CascadeStemmer::new(stop_words)),
        StemmingMode::Exclusive => Box::new(ExclusiveStemmer::new(stop_words)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::lexicon::Lexicons;

    #[test]
    fn test_rule_length_is_strict() {
        let stop_words = Lexicon::default();
        let rule = SuffixRule::new(5, "ies", "y");

        assert_eq!(rule.apply("flies", 5, &stop_words), None);
        assert_eq!(
            rule.apply("cities", 6, &stop_words),
            Some("city".to_string())
        );
    }

    #[test]
    fn test_rule_skips_stop_words() {
        let stop_words = Lexicons::default().stop_words;
        let rule = PLURAL_RULES[2];

        assert_eq!(rule.apply("was", 3, &stop_words), None);
        assert_eq!(rule.apply("cats", 4, &stop_words), Some("cat".to_string()));
    }

    #[test]
    fn test_stemmer_for_mode() {
        let stop_words = Lexicons::default().stop_words;

        assert_eq!(
            stemmer_for(StemmingMode::Cascade, stop_words.clone()).name(),
            "cascade"
        );
        assert_eq!(
            stemmer_for(StemmingMode::Exclusive, stop_words).name(),
            "exclusive"
        );
    }

    #[test]
    fn test_modes_agree_on_sample_words() {
        let stop_words = Lexicons::default().stop_words;
        let cascade = CascadeStemmer::new(stop_words.clone());
        let exclusive = ExclusiveStemmer::new(stop_words);

        // the plural and inflection suffixes never overlap, so both
        // strategies land on the same stem
        for word in [
            "running", "foxes", "flies", "authorities", "reported", "quickly", "does", "this",
            "findings", "jumped", "holy", "ies", "bus", "sing", "seed",
        ] {
            assert_eq!(cascade.stem(word), exclusive.stem(word), "diverged on {word}");
        }
    }
}
