//! Stop word highlighting.

use std::sync::Arc;

use log::debug;

use super::{AnalyzerKind, TextAnalyzer};
use crate::analysis::lexicon::Lexicons;
use crate::analysis::messages::Locale;
use crate::analysis::pipeline::TokenPipeline;
use crate::analysis::result::{AccentColor, AnalysisResult, Segment};

/// Highlights every token whose normalized form is a stop word and reports
/// how many were found.
#[derive(Clone, Debug)]
pub struct StopWordAnalyzer {
    pipeline: Arc<TokenPipeline>,
    lexicons: Lexicons,
    locale: Locale,
}

impl StopWordAnalyzer {
    /// Create a new stop word analyzer.
    pub fn new(pipeline: Arc<TokenPipeline>, lexicons: Lexicons, locale: Locale) -> Self {
        StopWordAnalyzer {
            pipeline,
            lexicons,
            locale,
        }
    }
}

impl TextAnalyzer for StopWordAnalyzer {
    fn analyze(&self, text: &str) -> AnalysisResult {
        let mut stopped = 0;

        let segments: Vec<Segment> = self
            .pipeline
            .tokens(text)
            .iter()
            .map(|token| {
                let is_stop = self.lexicons.stop_words.contains(&token.normalized);
                if is_stop {
                    stopped += 1;
                }
                Segment::token(&token.original, is_stop)
            })
            .collect();

        debug!("{}: {} of {} tokens are stop words", self.name(), stopped, segments.len());

        let messages = self.locale.messages();
        AnalysisResult {
            title: messages.stop_words.title.to_string(),
            description: messages.stop_words.description.to_string(),
            usage_note: messages.stop_word_note(stopped),
            segments,
            summary: None,
            terms: Vec::new(),
            accent: AccentColor::Indigo,
        }
    }

    fn kind(&self) -> AnalyzerKind {
        AnalyzerKind::StopWords
    }
}
