//! Analyzers that turn raw text into an annotated [`AnalysisResult`].
//!
//! # Role in the annotation pipeline
//!
//! ```text
//! Raw Text → TokenPipeline → aligned (original, normalized) tokens
//!                                   ↓
//!                             TextAnalyzer ← Lexicons
//!                                   ↓
//!                            AnalysisResult → presentation
//! ```
//!
//! # Available Implementations
//!
//! - [`StopWordAnalyzer`] - highlights stop words and counts them
//! - [`StemmingAnalyzer`] - annotates words with their heuristic stem
//! - [`ProfanityAnalyzer`] - highlights and reports flagged words
//! - [`SummaryAnalyzer`] - simulated summary plus allow-listed keywords
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use exude::analysis::analyzer::{StopWordAnalyzer, TextAnalyzer};
//! use exude::analysis::lexicon::Lexicons;
//! use exude::analysis::messages::Locale;
//! use exude::analysis::pipeline::TokenPipeline;
//!
//! let pipeline = Arc::new(TokenPipeline::new().unwrap());
//! let analyzer = StopWordAnalyzer::new(pipeline, Lexicons::default(), Locale::English);
//!
//! let result = analyzer.analyze("The fox is quick");
//! assert_eq!(result.highlighted_count(), 2);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::analysis::messages::Locale;
use crate::analysis::result::AnalysisResult;
use crate::error::ExudeError;

mod profanity;
mod stemming;
mod stop_word;
mod summary;

pub use profanity::ProfanityAnalyzer;
pub use stemming::StemmingAnalyzer;
pub use stop_word::StopWordAnalyzer;
pub use summary::{DEFAULT_MAX_KEYWORDS, SummaryAnalyzer};

/// Trait for analyzers that annotate text.
///
/// Analysis never fails. Callers are expected to short-circuit blank input
/// with [`AnalysisResult::error`] before invoking an analyzer; an analyzer
/// handed blank text simply produces an empty annotation.
pub trait TextAnalyzer: Send + Sync {
    /// Annotate `text`.
    fn analyze(&self, text: &str) -> AnalysisResult;

    /// Which analyzer this is.
    fn kind(&self) -> AnalyzerKind;

    /// Get the name of this analyzer (for logging and configuration).
    fn name(&self) -> &'static str {
        self.kind().name()
    }
}

/// Identifier of one of the built-in analyzers, in tab order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalyzerKind {
    StopWords,
    Stemming,
    Profanity,
    SummaryKeywords,
}

impl AnalyzerKind {
    /// All analyzers in tab order.
    pub const ALL: [AnalyzerKind; 4] = [
        AnalyzerKind::StopWords,
        AnalyzerKind::Stemming,
        AnalyzerKind::Profanity,
        AnalyzerKind::SummaryKeywords,
    ];

    /// Stable identifier.
    pub fn name(self) -> &'static str {
        match self {
            AnalyzerKind::StopWords => "stop_words",
            AnalyzerKind::Stemming => "stemming",
            AnalyzerKind::Profanity => "profanity",
            AnalyzerKind::SummaryKeywords => "summary_keywords",
        }
    }

    /// Tab label in the given locale.
    pub fn label(self, locale: Locale) -> &'static str {
        let messages = locale.messages();
        match self {
            AnalyzerKind::StopWords => messages.stop_words.label,
            AnalyzerKind::Stemming => messages.stemming.label,
            AnalyzerKind::Profanity => messages.profanity.label,
            AnalyzerKind::SummaryKeywords => messages.summary.label,
        }
    }
}

impl fmt::Display for AnalyzerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AnalyzerKind {
    type Err = ExudeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "stop_words" | "stopwords" | "stop" => Ok(AnalyzerKind::StopWords),
            "stemming" | "stem" => Ok(AnalyzerKind::Stemming),
            "profanity" | "swear_words" => Ok(AnalyzerKind::Profanity),
            "summary_keywords" | "summary" | "keywords" => Ok(AnalyzerKind::SummaryKeywords),
            other => Err(ExudeError::invalid_argument(format!(
                "unknown analyzer '{other}'"
            ))),
        }
    }
}
