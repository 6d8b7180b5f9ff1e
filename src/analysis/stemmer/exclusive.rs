//! First-match suffix stemmer.

use super::{INFLECTION_RULES, PLURAL_RULES, Stemmer};
use crate::analysis::lexicon::Lexicon;

/// Applies the rule table as one else-chain: the first matching rule
/// decides the stem.
#[derive(Clone, Debug)]
pub struct ExclusiveStemmer {
    stop_words: Lexicon,
}

impl ExclusiveStemmer {
    /// Create an exclusive stemmer; `stop_words` guards the bare "-s" rule.
    pub fn new(stop_words: Lexicon) -> Self {
        ExclusiveStemmer { stop_words }
    }
}

impl Stemmer for ExclusiveStemmer {
    fn stem(&self, word: &str) -> String {
        let char_len = word.chars().count();

        PLURAL_RULES
            .iter()
            .chain(INFLECTION_RULES.iter())
            .find_map(|rule| rule.apply(word, char_len, &self.stop_words))
            .unwrap_or_else(|| word.to_string())
    }

    fn name(&self) -> &'static str {
        "exclusive"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::lexicon::Lexicons;

    #[test]
    fn test_exclusive_stemmer() {
        let stemmer = ExclusiveStemmer::new(Lexicons::default().stop_words);

        assert_eq!(stemmer.stem("running"), "runn");
        assert_eq!(stemmer.stem("foxes"), "fox");
        assert_eq!(stemmer.stem("stories"), "story");
        assert_eq!(stemmer.stem("was"), "was");
        assert_eq!(stemmer.stem("technology"), "technology");
    }

    #[test]
    fn test_custom_stop_words() {
        let stemmer = ExclusiveStemmer::new(Lexicon::from_words(["news"]));

        assert_eq!(stemmer.stem("news"), "news");
        assert_eq!(stemmer.stem("cats"), "cat");
    }
}
