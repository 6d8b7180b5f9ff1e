//! Simulated summary and keyword extraction.

use std::collections::HashSet;
use std::sync::Arc;

use log::debug;

use super::{AnalyzerKind, TextAnalyzer};
use crate::analysis::lexicon::Lexicons;
use crate::analysis::messages::Locale;
use crate::analysis::pipeline::TokenPipeline;
use crate::analysis::result::{AccentColor, AnalysisResult, Segment};
use crate::analysis::tokenizer::SentenceSplitter;
use crate::error::Result;

/// Default cap on the number of reported keywords.
pub const DEFAULT_MAX_KEYWORDS: usize = 5;

/// Builds a template summary around the first sentence and reports the
/// allow-listed keywords found in the text.
#[derive(Clone, Debug)]
pub struct SummaryAnalyzer {
    pipeline: Arc<TokenPipeline>,
    sentences: SentenceSplitter,
    lexicons: Lexicons,
    locale: Locale,
    max_keywords: usize,
}

impl SummaryAnalyzer {
    /// Create a new summary analyzer reporting at most
    /// [`DEFAULT_MAX_KEYWORDS`] keywords.
    pub fn new(pipeline: Arc<TokenPipeline>, lexicons: Lexicons, locale: Locale) -> Result<Self> {
        Ok(SummaryAnalyzer {
            pipeline,
            sentences: SentenceSplitter::new()?,
            lexicons,
            locale,
            max_keywords: DEFAULT_MAX_KEYWORDS,
        })
    }

    /// Set the keyword cap.
    pub fn with_max_keywords(mut self, max_keywords: usize) -> Self {
        self.max_keywords = max_keywords;
        self
    }

    /// Allow-listed, non-stop-word tokens in first-occurrence order,
    /// deduplicated and capped.
    pub fn keywords(&self, text: &str) -> Vec<String> {
        let mut seen = HashSet::new();

        self.pipeline
            .tokenize(text, false)
            .into_iter()
            .filter(|word| {
                self.lexicons.keywords.contains(word) && !self.lexicons.stop_words.contains(word)
            })
            .filter(|word| seen.insert(word.clone()))
            .take(self.max_keywords)
            .collect()
    }

    fn keyword_segments(&self, keywords: &[String]) -> Vec<Segment> {
        if keywords.is_empty() {
            return vec![Segment::plain(self.locale.messages().no_keywords())];
        }

        let mut segments = Vec::with_capacity(keywords.len() * 2);
        for (index, keyword) in keywords.iter().enumerate() {
            if index > 0 {
                segments.push(Segment::plain(", "));
            }
            segments.push(Segment::highlighted(keyword.as_str()));
        }
        segments
    }
}

impl TextAnalyzer for SummaryAnalyzer {
    fn analyze(&self, text: &str) -> AnalysisResult {
        let messages = self.locale.messages();

        let first_sentence = self.sentences.first(text);
        let summary = messages.summary_text(first_sentence.as_deref());
        let keywords = self.keywords(text);

        debug!(
            "{}: {} keywords, first sentence present: {}",
            self.name(),
            keywords.len(),
            first_sentence.is_some()
        );

        AnalysisResult {
            title: messages.summary.title.to_string(),
            description: messages.summary.description.to_string(),
            usage_note: messages.summary.use_case.to_string(),
            segments: self.keyword_segments(&keywords),
            summary: Some(summary),
            terms: keywords,
            accent: AccentColor::Purple,
        }
    }

    fn kind(&self) -> AnalyzerKind {
        AnalyzerKind::SummaryKeywords
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> SummaryAnalyzer {
        SummaryAnalyzer::new(
            Arc::new(TokenPipeline::new().unwrap()),
            Lexicons::default(),
            Locale::English,
        )
        .unwrap()
    }

    #[test]
    fn test_keywords_in_first_occurrence_order() {
        let keywords = analyzer().keywords("Development of technology. More technology and development!");

        assert_eq!(keywords, vec!["development", "technology"]);
    }

    #[test]
    fn test_keywords_capped() {
        let text = "jumping running foxes authorities findings report innovation technology";
        let keywords = analyzer().keywords(text);

        assert_eq!(
            keywords,
            vec!["jumping", "running", "foxes", "authorities", "findings"]
        );

        let keywords = analyzer().with_max_keywords(2).keywords(text);
        assert_eq!(keywords, vec!["jumping", "running"]);
    }

    #[test]
    fn test_keyword_match_is_exact_token() {
        let keywords = analyzer().keywords("new technologies and reported innovations");
        assert!(keywords.is_empty());
    }

    #[test]
    fn test_summary_uses_first_sentence() {
        let result = analyzer().analyze("  The Company Builds Technology. It grows!");

        assert_eq!(
            result.summary.as_deref(),
            Some("The analyzed text relates to information such as the company builds technology It highlights technical development and the reporting of findings.")
        );
        assert_eq!(result.terms, vec!["technology"]);
    }

    #[test]
    fn test_summary_fallback_without_sentences() {
        let result = analyzer().analyze("?!...");

        assert_eq!(
            result.summary.as_deref(),
            Some(Locale::English.messages().summary_text(None).as_str())
        );
    }

    #[test]
    fn test_keyword_segments() {
        let result = analyzer().analyze("report on innovation");

        assert_eq!(
            result.segments,
            vec![
                Segment::highlighted("report"),
                Segment::plain(", "),
                Segment::highlighted("innovation"),
            ]
        );
        assert_eq!(result.plain_text(), "report, innovation");
    }

    #[test]
    fn test_no_keywords_placeholder() {
        let result = analyzer().analyze("Nothing to see here.");

        assert!(result.terms.is_empty());
        assert_eq!(
            result.segments,
            vec![Segment::plain("No specific keywords found (simulated).")]
        );
        assert_eq!(result.accent, AccentColor::Purple);
    }
}
