//! Stem annotation.

use std::sync::Arc;

use log::debug;

use super::{AnalyzerKind, TextAnalyzer};
use crate::analysis::messages::Locale;
use crate::analysis::pipeline::TokenPipeline;
use crate::analysis::result::{AccentColor, AnalysisResult, Segment};
use crate::analysis::stemmer::Stemmer;

/// Highlights every word whose stem differs from its normalized form and
/// annotates it with `" (stem: <stem>)"`.
pub struct StemmingAnalyzer {
    pipeline: Arc<TokenPipeline>,
    stemmer: Box<dyn Stemmer>,
    locale: Locale,
}

impl StemmingAnalyzer {
    /// Create a stemming analyzer around the given stemmer.
    pub fn new(pipeline: Arc<TokenPipeline>, stemmer: Box<dyn Stemmer>, locale: Locale) -> Self {
        StemmingAnalyzer {
            pipeline,
            stemmer,
            locale,
        }
    }

    /// Get the stemmer used by this analyzer.
    pub fn stemmer(&self) -> &dyn Stemmer {
        self.stemmer.as_ref()
    }
}

impl TextAnalyzer for StemmingAnalyzer {
    fn analyze(&self, text: &str) -> AnalysisResult {
        let segments: Vec<Segment> = self
            .pipeline
            .tokens(text)
            .iter()
            .map(|token| {
                let stem = self.stemmer.stem(&token.normalized);
                if stem != token.normalized {
                    Segment::token(&token.original, true).with_annotation(format!(" (stem: {stem})"))
                } else {
                    Segment::token(&token.original, false)
                }
            })
            .collect();

        debug!(
            "{} ({}): stemmed {} of {} tokens",
            self.name(),
            self.stemmer.name(),
            segments.iter().filter(|s| s.highlighted).count(),
            segments.len()
        );

        let messages = self.locale.messages();
        AnalysisResult {
            title: messages.stemming.title.to_string(),
            description: messages.stemming.description.to_string(),
            usage_note: messages.stemming.use_case.to_string(),
            segments,
            summary: None,
            terms: Vec::new(),
            accent: AccentColor::Green,
        }
    }

    fn kind(&self) -> AnalyzerKind {
        AnalyzerKind::Stemming
    }
}

impl std::fmt::Debug for StemmingAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StemmingAnalyzer")
            .field("pipeline", &self.pipeline)
            .field("stemmer", &self.stemmer.name())
            .field("locale", &self.locale)
            .finish()
    }
}
