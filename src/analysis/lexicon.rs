//! Static word lists used by the analyzers.
//!
//! Three lexicons ship with the toolkit:
//!
//! - stop words, matched by the stop word filter and consulted by the stemmer
//!   and keyword extractor
//! - flagged words, matched by the profanity checker
//! - the keyword allow-list, matched by the summary extractor
//!
//! All of them are built once per process and never mutated.
//!
//! # Examples
//!
//! ```
//! use exude::analysis::lexicon::{Lexicon, Lexicons};
//!
//! let lexicons = Lexicons::default();
//! assert!(lexicons.stop_words.contains("the"));
//! assert!(lexicons.flagged_words.contains("badword"));
//!
//! let custom = Lexicon::from_words(["alpha", "beta"]);
//! assert_eq!(custom.len(), 2);
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

/// Default English stop words.
///
/// "why" appears twice in the source list; the set collapses it.
const DEFAULT_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is", "it",
    "its", "of", "on", "that", "the", "to", "was", "were", "will", "with", "you", "your", "this",
    "they", "their", "who", "what", "where", "when", "why", "how", "about", "above", "after",
    "again", "against", "all", "any", "because", "before", "being", "below", "between", "both",
    "but", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few",
    "further", "had", "have", "having", "here", "into", "me", "more", "most", "my", "nor", "not",
    "now", "once", "only", "or", "other", "our", "out", "over", "own", "same", "she", "should",
    "so", "some", "such", "than", "then", "there", "those", "through", "thus", "till", "time",
    "under", "until", "up", "upon", "us", "very", "we", "while", "whom", "why", "would", "yet",
];

/// Words reported by the profanity checker.
const DEFAULT_FLAGGED_WORDS: &[&str] = &["badword", "damn", "hell", "crap", "stupid", "idiot"];

/// Keyword allow-list for the simulated keyword extractor, in list order.
const DEFAULT_KEYWORDS: &[&str] = &[
    "technology",
    "development",
    "innovation",
    "report",
    "findings",
    "authorities",
    "foxes",
    "running",
    "jumping",
];

/// Default stop word lexicon.
pub static DEFAULT_STOP_WORDS_LEXICON: LazyLock<Lexicon> =
    LazyLock::new(|| Lexicon::from_words(DEFAULT_STOP_WORDS.iter().copied()));

/// Default flagged word lexicon.
pub static DEFAULT_FLAGGED_WORDS_LEXICON: LazyLock<Lexicon> =
    LazyLock::new(|| Lexicon::from_words(DEFAULT_FLAGGED_WORDS.iter().copied()));

/// Default keyword allow-list.
pub static DEFAULT_KEYWORDS_LEXICON: LazyLock<Lexicon> =
    LazyLock::new(|| Lexicon::from_words(DEFAULT_KEYWORDS.iter().copied()));

/// An immutable set of lowercase words.
///
/// Cloning is cheap; the underlying set is shared.
#[derive(Clone, Debug, Default)]
pub struct Lexicon {
    words: Arc<HashSet<String>>,
}

impl Lexicon {
    /// Build a lexicon from a list of words. Words are lowercased.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().to_lowercase())
            .collect();

        Lexicon {
            words: Arc::new(words),
        }
    }

    /// Check whether `word` is in the lexicon. Matching is exact.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the lexicon is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// The three lexicons the analyzers read from.
#[derive(Clone, Debug)]
pub struct Lexicons {
    /// Words highlighted by the stop word filter
    pub stop_words: Lexicon,
    /// Words reported by the profanity checker
    pub flagged_words: Lexicon,
    /// Words the keyword extractor may report
    pub keywords: Lexicon,
}

impl Lexicons {
    /// Bundle custom lexicons.
    pub fn new(stop_words: Lexicon, flagged_words: Lexicon, keywords: Lexicon) -> Self {
        Lexicons {
            stop_words,
            flagged_words,
            keywords,
        }
    }
}

impl Default for Lexicons {
    fn default() -> Self {
        Lexicons {
            stop_words: DEFAULT_STOP_WORDS_LEXICON.clone(),
            flagged_words: DEFAULT_FLAGGED_WORDS_LEXICON.clone(),
            keywords: DEFAULT_KEYWORDS_LEXICON.clone(),
        }
    }
}
