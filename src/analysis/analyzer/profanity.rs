//! Flagged word detection.

use std::collections::BTreeSet;
use std::sync::Arc;

use log::debug;

use super::{AnalyzerKind, TextAnalyzer};
use crate::analysis::lexicon::Lexicons;
use crate::analysis::messages::Locale;
use crate::analysis::pipeline::TokenPipeline;
use crate::analysis::result::{AccentColor, AnalysisResult, Segment};

/// Highlights tokens found in the flagged word lexicon.
///
/// Matching is on whole normalized tokens: a flagged word embedded in a
/// longer token ("badwords", "hellish") is not reported.
#[derive(Clone, Debug)]
pub struct ProfanityAnalyzer {
    pipeline: Arc<TokenPipeline>,
    lexicons: Lexicons,
    locale: Locale,
}

impl ProfanityAnalyzer {
    /// Create a new profanity analyzer.
    pub fn new(pipeline: Arc<TokenPipeline>, lexicons: Lexicons, locale: Locale) -> Self {
        ProfanityAnalyzer {
            pipeline,
            lexicons,
            locale,
        }
    }
}

impl TextAnalyzer for ProfanityAnalyzer {
    fn analyze(&self, text: &str) -> AnalysisResult {
        let mut count = 0;
        let mut found = BTreeSet::new();

        let segments: Vec<Segment> = self
            .pipeline
            .tokens(text)
            .iter()
            .map(|token| {
                let flagged = self.lexicons.flagged_words.contains(&token.normalized);
                if flagged {
                    count += 1;
                    found.insert(token.normalized.clone());
                }
                Segment::token(&token.original, flagged)
            })
            .collect();

        let found: Vec<String> = found.into_iter().collect();
        debug!("{}: {} flagged tokens, {} distinct", self.name(), count, found.len());

        let messages = self.locale.messages();
        AnalysisResult {
            title: messages.profanity.title.to_string(),
            description: messages.profanity.description.to_string(),
            usage_note: messages.profanity_note(count, &found),
            segments,
            summary: None,
            terms: found,
            accent: AccentColor::Red,
        }
    }

    fn kind(&self) -> AnalyzerKind {
        AnalyzerKind::Profanity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::lexicon::Lexicon;

    fn analyzer() -> ProfanityAnalyzer {
        ProfanityAnalyzer::new(
            Arc::new(TokenPipeline::new().unwrap()),
            Lexicons::default(),
            Locale::English,
        )
    }

    #[test]
    fn test_single_flagged_word() {
        let result = analyzer().analyze("This is a very badword.");

        assert_eq!(result.highlighted_count(), 1);
        assert_eq!(result.terms, vec!["badword"]);
        assert!(result.usage_note.contains("**1 offensive words found!**"));
        assert!(result.usage_note.ends_with("Words found: badword"));
    }

    #[test]
    fn test_found_words_deduplicated_and_sorted() {
        let result = analyzer().analyze("Stupid idiot! DAMN, stupid.");

        assert_eq!(result.highlighted_count(), 4);
        assert_eq!(result.terms, vec!["damn", "idiot", "stupid"]);
        assert!(result.usage_note.contains("**4 "));
        assert!(result.usage_note.ends_with("damn, idiot, stupid"));

        let highlighted: Vec<_> = result.highlighted().map(|s| s.word()).collect();
        assert_eq!(highlighted, vec!["Stupid", "idiot", "DAMN", "stupid"]);
    }

    #[test]
    fn test_embedded_words_not_detected() {
        let result = analyzer().analyze("badwords hellish crappy");

        assert_eq!(result.highlighted_count(), 0);
        assert!(result.terms.is_empty());
        assert!(result
            .usage_note
            .ends_with("No offensive words were found in the text."));
    }

    #[test]
    fn test_custom_flagged_lexicon() {
        let defaults = Lexicons::default();
        let lexicons = Lexicons::new(
            defaults.stop_words,
            Lexicon::from_words(["heck"]),
            defaults.keywords,
        );
        let analyzer = ProfanityAnalyzer::new(
            Arc::new(TokenPipeline::new().unwrap()),
            lexicons,
            Locale::English,
        );

        let result = analyzer.analyze("What the heck, damn");
        assert_eq!(result.terms, vec!["heck"]);
    }

    #[test]
    fn test_segments_keep_every_token() {
        let result = analyzer().analyze("you idiot");

        assert_eq!(result.plain_text(), " you idiot");
        assert_eq!(result.accent, AccentColor::Red);
    }
}
