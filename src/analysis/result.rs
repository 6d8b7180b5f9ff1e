//! Analysis result types.
//!
//! An [`AnalysisResult`] is what every analyzer hands to the presentation
//! layer: a few lines of explanatory text plus the input re-rendered as an
//! ordered run of plain and highlighted [`Segment`]s.
//!
//! ```text
//! Input:    "The foxes ran"
//! Segments: [" The"]* [" foxes"] [" ran"]      (* = highlighted)
//! ```
//!
//! Token analyzers prefix every segment with one separator space; the
//! renderer simply concatenates segments.

use serde::{Deserialize, Serialize};

use crate::analysis::messages::Locale;

/// Separator placed in front of every token segment.
pub const TOKEN_SEPARATOR: &str = " ";

/// A contiguous run of output text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Text of the run, including any leading separator
    pub text: String,

    /// Whether the run should be rendered emphasized
    pub highlighted: bool,

    /// Inline text rendered right after the run, unemphasized
    pub annotation: Option<String>,
}

impl Segment {
    /// A plain run with the exact given text.
    pub fn plain<S: Into<String>>(text: S) -> Self {
        Segment {
            text: text.into(),
            highlighted: false,
            annotation: None,
        }
    }

    /// A highlighted run with the exact given text.
    pub fn highlighted<S: Into<String>>(text: S) -> Self {
        Segment {
            text: text.into(),
            highlighted: true,
            annotation: None,
        }
    }

    /// A run for one token: the token prefixed with the separator space.
    pub fn token(word: &str, highlighted: bool) -> Self {
        Segment {
            text: format!("{TOKEN_SEPARATOR}{word}"),
            highlighted,
            annotation: None,
        }
    }

    /// Attach an inline annotation.
    pub fn with_annotation<S: Into<String>>(mut self, annotation: S) -> Self {
        self.annotation = Some(annotation.into());
        self
    }

    /// The run's text without the token separator.
    pub fn word(&self) -> &str {
        self.text
            .strip_prefix(TOKEN_SEPARATOR)
            .unwrap_or(&self.text)
    }
}

/// Symbolic accent color of a result card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccentColor {
    Indigo,
    Green,
    Red,
    Purple,
}

impl AccentColor {
    /// ARGB value of the accent.
    pub fn argb(self) -> u32 {
        match self {
            AccentColor::Indigo => 0xFF63_66F1,
            AccentColor::Green => 0xFF48_BB78,
            AccentColor::Red => 0xFFF5_6565,
            AccentColor::Purple => 0xFF80_5AD5,
        }
    }
}

/// The output of one analyzer run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Card title
    pub title: String,

    /// What the analyzer does
    pub description: String,

    /// Where it is useful, possibly followed by computed statistics
    pub usage_note: String,

    /// The annotated output
    pub segments: Vec<Segment>,

    /// Synthetic summary text (summary extractor only)
    pub summary: Option<String>,

    /// Distinct terms the analyzer reports: found flagged words or
    /// extracted keywords
    pub terms: Vec<String>,

    /// Accent color tag
    pub accent: AccentColor,
}

impl AnalysisResult {
    /// The result shown for blank input.
    pub fn error(locale: Locale) -> Self {
        let messages = locale.messages();

        AnalysisResult {
            title: messages.error_title.to_string(),
            description: messages.error_description.to_string(),
            usage_note: String::new(),
            segments: vec![Segment::plain(messages.error_prompt)],
            summary: None,
            terms: Vec::new(),
            accent: AccentColor::Red,
        }
    }

    /// Whether this is the blank-input error result.
    pub fn is_error(&self) -> bool {
        self.accent == AccentColor::Red
            && self.usage_note.is_empty()
            && self.segments.len() == 1
            && !self.segments[0].highlighted
            && self.terms.is_empty()
    }

    /// Number of highlighted segments.
    pub fn highlighted_count(&self) -> usize {
        self.segments.iter().filter(|s| s.highlighted).count()
    }

    /// Iterate over highlighted segments.
    pub fn highlighted(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter().filter(|s| s.highlighted)
    }

    /// Segments and annotations concatenated without any markup.
    pub fn plain_text(&self) -> String {
        let mut text = String::new();
        for segment in &self.segments {
            text.push_str(&segment.text);
            if let Some(annotation) = &segment.annotation {
                text.push_str(annotation);
            }
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_segment() {
        let segment = Segment::token("Foxes", true);

        assert_eq!(segment.text, " Foxes");
        assert_eq!(segment.word(), "Foxes");
        assert!(segment.highlighted);
        assert!(segment.annotation.is_none());
    }

    #[test]
    fn test_segment_annotation() {
        let segment = Segment::token("running", true).with_annotation(" (stem: runn)");
        assert_eq!(segment.annotation.as_deref(), Some(" (stem: runn)"));
    }

    #[test]
    fn test_plain_segment_word() {
        assert_eq!(Segment::plain(", ").word(), ", ");
    }

    #[test]
    fn test_error_result() {
        let result = AnalysisResult::error(Locale::English);

        assert_eq!(result.title, "Error");
        assert_eq!(result.plain_text(), "Input text must not be empty.");
        assert_eq!(result.accent, AccentColor::Red);
        assert!(result.is_error());
    }

    #[test]
    fn test_plain_text_includes_annotations() {
        let result = AnalysisResult {
            title: String::new(),
            description: String::new(),
            usage_note: String::new(),
            segments: vec![
                Segment::token("The", false),
                Segment::token("foxes", true).with_annotation(" (stem: fox)"),
            ],
            summary: None,
            terms: Vec::new(),
            accent: AccentColor::Green,
        };

        assert_eq!(result.plain_text(), " The foxes (stem: fox)");
        assert_eq!(result.highlighted_count(), 1);
        assert!(!result.is_error());
    }

    #[test]
    fn test_accent_argb() {
        assert_eq!(AccentColor::Indigo.argb(), 0xFF6366F1);
        assert_eq!(AccentColor::Purple.argb(), 0xFF805AD5);
    }
}
