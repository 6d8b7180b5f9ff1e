//! The assembled set of analyzers sharing one token pipeline.

use std::sync::Arc;

use log::debug;

use crate::analysis::analyzer::{
    AnalyzerKind, ProfanityAnalyzer, StemmingAnalyzer, StopWordAnalyzer, SummaryAnalyzer,
    TextAnalyzer,
};
use crate::analysis::lexicon::Lexicons;
use crate::analysis::messages::Locale;
use crate::analysis::pipeline::TokenPipeline;
use crate::analysis::result::AnalysisResult;
use crate::analysis::stemmer::stemmer_for;
use crate::config::ToolkitConfig;
use crate::error::Result;

/// Owns the four built-in analyzers.
///
/// # Examples
///
/// ```
/// use exude::analysis::analyzer::AnalyzerKind;
/// use exude::config::ToolkitConfig;
/// use exude::toolkit::Toolkit;
///
/// let toolkit = Toolkit::new(ToolkitConfig::default()).unwrap();
///
/// let result = toolkit.analyze(AnalyzerKind::Profanity, "This is a very badword.");
/// assert_eq!(result.terms, vec!["badword"]);
///
/// let blank = toolkit.analyze(AnalyzerKind::Stemming, "   ");
/// assert!(blank.is_error());
/// ```
#[derive(Debug)]
pub struct Toolkit {
    config: ToolkitConfig,
    lexicons: Lexicons,
    stop_words: StopWordAnalyzer,
    stemming: StemmingAnalyzer,
    profanity: ProfanityAnalyzer,
    summary: SummaryAnalyzer,
}

impl Toolkit {
    /// Build the toolkit with the default lexicons.
    pub fn new(config: ToolkitConfig) -> Result<Self> {
        Self::with_lexicons(config, Lexicons::default())
    }

    /// Build the toolkit around custom lexicons.
    pub fn with_lexicons(config: ToolkitConfig, lexicons: Lexicons) -> Result<Self> {
        config.validate()?;

        let pipeline = Arc::new(TokenPipeline::new()?);
        let locale = config.locale;

        let stemmer = stemmer_for(config.stemming_mode, lexicons.stop_words.clone());
        let stemming = StemmingAnalyzer::new(Arc::clone(&pipeline), stemmer, locale);
        let stop_words = StopWordAnalyzer::new(Arc::clone(&pipeline), lexicons.clone(), locale);
        let profanity = ProfanityAnalyzer::new(Arc::clone(&pipeline), lexicons.clone(), locale);
        let summary = SummaryAnalyzer::new(pipeline, lexicons.clone(), locale)?
            .with_max_keywords(config.max_keywords);

        debug!(
            "toolkit ready: locale={}, stemming={}, max_keywords={}",
            locale.code(),
            stemming.stemmer().name(),
            config.max_keywords
        );

        Ok(Toolkit {
            config,
            lexicons,
            stop_words,
            stemming,
            profanity,
            summary,
        })
    }

    /// Run `kind` over `text`.
    ///
    /// Blank input (empty or whitespace only) yields
    /// [`AnalysisResult::error`] without invoking any analyzer.
    pub fn analyze(&self, kind: AnalyzerKind, text: &str) -> AnalysisResult {
        if is_blank(text) {
            debug!("{kind}: blank input");
            return AnalysisResult::error(self.locale());
        }
        self.analyzer(kind).analyze(text)
    }

    /// Run every analyzer in tab order.
    pub fn analyze_all(&self, text: &str) -> Vec<(AnalyzerKind, AnalysisResult)> {
        AnalyzerKind::ALL
            .into_iter()
            .map(|kind| (kind, self.analyze(kind, text)))
            .collect()
    }

    /// The analyzer behind `kind`.
    pub fn analyzer(&self, kind: AnalyzerKind) -> &dyn TextAnalyzer {
        match kind {
            AnalyzerKind::StopWords => &self.stop_words,
            AnalyzerKind::Stemming => &self.stemming,
            AnalyzerKind::Profanity => &self.profanity,
            AnalyzerKind::SummaryKeywords => &self.summary,
        }
    }

    pub fn config(&self) -> &ToolkitConfig {
        &self.config
    }

    pub fn lexicons(&self) -> &Lexicons {
        &self.lexicons
    }

    pub fn locale(&self) -> Locale {
        self.config.locale
    }
}

/// Whether `text` is empty or consists only of whitespace.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::stemmer::StemmingMode;

    fn toolkit() -> Toolkit {
        Toolkit::new(ToolkitConfig::default().with_locale(Locale::English)).unwrap()
    }

    #[test]
    fn test_blank_input_is_error_for_every_kind() {
        let toolkit = toolkit();

        for text in ["", "   ", "\n\t "] {
            for kind in AnalyzerKind::ALL {
                let result = toolkit.analyze(kind, text);
                assert!(result.is_error(), "{kind} on {text:?}");
                assert_eq!(result, AnalysisResult::error(Locale::English));
            }
        }
    }

    #[test]
    fn test_analyzer_lookup_matches_kind() {
        let toolkit = toolkit();

        for kind in AnalyzerKind::ALL {
            assert_eq!(toolkit.analyzer(kind).kind(), kind);
        }
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let toolkit = toolkit();
        let text = "The quick brown foxes are jumping. Report the findings!";

        for kind in AnalyzerKind::ALL {
            assert_eq!(toolkit.analyze(kind, text), toolkit.analyze(kind, text));
        }
    }

    #[test]
    fn test_analyze_all_in_tab_order() {
        let results = toolkit().analyze_all("a badword");
        let kinds: Vec<_> = results.iter().map(|(kind, _)| *kind).collect();

        assert_eq!(kinds, AnalyzerKind::ALL.to_vec());
        assert_eq!(results[2].1.terms, vec!["badword"]);
    }

    #[test]
    fn test_config_flows_into_analyzers() {
        let config = ToolkitConfig::default()
            .with_stemming_mode(StemmingMode::Exclusive)
            .with_max_keywords(1);
        let toolkit = Toolkit::new(config).unwrap();

        let result = toolkit.analyze(AnalyzerKind::SummaryKeywords, "report and innovation");
        assert_eq!(result.terms, vec!["report"]);
        assert_eq!(toolkit.locale(), Locale::Hindi);
        assert_eq!(toolkit.stemming.stemmer().name(), "exclusive");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ToolkitConfig::default().with_max_keywords(0);
        assert!(Toolkit::new(config).is_err());
    }
}
