//! Cascading suffix stemmer.

use super::{INFLECTION_RULES, PLURAL_RULES, Stemmer};
use crate::analysis::lexicon::Lexicon;

/// Applies the plural rules as an else-chain, then lets every matching
/// inflection rule overwrite the stem. The last matching rule wins.
#[derive(Clone, Debug)]
pub struct CascadeStemmer {
    stop_words: Lexicon,
}

impl CascadeStemmer {
    /// Create a cascade stemmer; `stop_words` guards the bare "-s" rule.
    pub fn new(stop_words: Lexicon) -> Self {
        CascadeStemmer { stop_words }
    }
}

impl Stemmer for CascadeStemmer {
    fn stem(&self, word: &str) -> String {
        let char_len = word.chars().count();

        let mut stem = PLURAL_RULES
            .iter()
            .find_map(|rule| rule.apply(word, char_len, &self.stop_words))
            .unwrap_or_else(|| word.to_string());

        for rule in &INFLECTION_RULES {
            if let Some(rewritten) = rule.apply(word, char_len, &self.stop_words) {
                stem = rewritten;
            }
        }

        stem
    }

    fn name(&self) -> &'static str {
        "cascade"
    }
}
