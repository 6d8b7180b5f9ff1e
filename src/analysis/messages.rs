//! Localized strings for analysis results.
//!
//! Hindi is the toolkit's original language and the default; English is
//! provided for terminals and logs. Strings that embed computed values
//! (counts, found words, the first sentence) are built by the formatting
//! methods on [`Messages`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ExudeError;

/// Language used for result titles, descriptions and notes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    /// Hindi
    #[default]
    #[serde(rename = "hi")]
    Hindi,
    /// English
    #[serde(rename = "en")]
    English,
}

impl Locale {
    /// The message table for this locale.
    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::Hindi => &HINDI,
            Locale::English => &ENGLISH,
        }
    }

    /// Short language code.
    pub fn code(self) -> &'static str {
        match self {
            Locale::Hindi => "hi",
            Locale::English => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = ExudeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hi" | "hindi" => Ok(Locale::Hindi),
            "en" | "english" => Ok(Locale::English),
            other => Err(ExudeError::invalid_argument(format!(
                "unknown locale '{other}'"
            ))),
        }
    }
}

/// Title, description and use case text for one analyzer.
#[derive(Debug)]
pub struct AnalyzerText {
    pub label: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub use_case: &'static str,
}

/// All user-facing strings for one locale.
#[derive(Debug)]
pub struct Messages {
    pub stop_words: AnalyzerText,
    pub stemming: AnalyzerText,
    pub profanity: AnalyzerText,
    pub summary: AnalyzerText,

    pub error_title: &'static str,
    pub error_description: &'static str,
    pub error_prompt: &'static str,

    pub use_case_heading: &'static str,
    pub output_heading: &'static str,
    pub summary_heading: &'static str,
    pub keywords_heading: &'static str,

    stop_word_note: &'static str,
    profanity_found: &'static str,
    profanity_found_words: &'static str,
    profanity_none: &'static str,
    summary_prefix: &'static str,
    summary_suffix: &'static str,
    summary_fallback: &'static str,
    no_keywords: &'static str,
}

impl Messages {
    /// Use case text followed by the number of stop words found.
    pub fn stop_word_note(&self, count: usize) -> String {
        format!(
            "{}\n({count} {})",
            self.stop_words.use_case, self.stop_word_note
        )
    }

    /// Use case text followed by the profanity summary.
    pub fn profanity_note(&self, count: usize, found: &[String]) -> String {
        format!(
            "{}\n{}",
            self.profanity.use_case,
            self.profanity_summary(count, found)
        )
    }

    /// Count and comma-joined found words, or the "none found" line.
    pub fn profanity_summary(&self, count: usize, found: &[String]) -> String {
        if count > 0 {
            format!(
                "**{count} {}**\n\n{} {}",
                self.profanity_found,
                self.profanity_found_words,
                found.join(", ")
            )
        } else {
            self.profanity_none.to_string()
        }
    }

    /// Synthetic summary built around the first sentence, or the generic
    /// fallback when there is none.
    pub fn summary_text(&self, first_sentence: Option<&str>) -> String {
        match first_sentence {
            Some(sentence) => format!(
                "{} {} {}",
                self.summary_prefix,
                sentence.trim().to_lowercase(),
                self.summary_suffix
            ),
            None => self.summary_fallback.to_string(),
        }
    }

    /// Placeholder shown when no keyword was extracted.
    pub fn no_keywords(&self) -> &'static str {
        self.no_keywords
    }
}

static HINDI: Messages = Messages {
    stop_words: AnalyzerText {
        label: "Stop Words",
        title: "Stop Words Filtering",
        description: "यह सुविधा टेक्स्ट से सामान्य, कम-महत्वपूर्ण शब्दों को हटा देती है।",
        use_case: "सर्च इंजन की परफॉर्मेंस सुधारने, डेटा एनालिसिस के लिए टेक्स्ट को प्री-प्रोसेस करने, और टेक्स्ट की \"Noise\" को कम करने के लिए उपयोगी।",
    },
    stemming: AnalyzerText {
        label: "Stemming",
        title: "Stemming",
        description: "यह शब्दों से प्रत्यय ('-ing', '-ed', '-s') को हटाकर उनके मूल रूप (stem) को निकालने का प्रयास करता है।",
        use_case: "सर्च इंजन के लिए समानार्थक शब्दों को मैच करने, टेक्स्ट क्लासिफिकेशन, और सूचना पुनर्प्राप्ति के लिए।",
    },
    profanity: AnalyzerText {
        label: "अपशब्द",
        title: "अपशब्दों की जाँच",
        description: "यह सुविधा टेक्स्ट में आपत्तिजनक या अपशब्दों की उपस्थिति की जाँच करती है।",
        use_case: "ऑनलाइन कंटेंट मॉडरेशन, कमेंट फ़िल्टरिंग, बच्चों के लिए सुरक्षित ब्राउज़िंग सुनिश्चित करने, और ब्रांड की प्रतिष्ठा बनाए रखने के लिए।",
    },
    summary: AnalyzerText {
        label: "सारांश & कीवर्ड",
        title: "सारांश & कीवर्ड (Simulated)",
        description: "यह सुविधा (सिम्युलेटेड) एक लंबे टेक्स्ट का संक्षिप्त सारांश प्रदान करती है और मुख्य कीवर्ड्स निकालती है।",
        use_case: "दस्तावेज़ों को जल्दी समझने, कंटेंट इंडेक्सिंग, टेक्स्ट क्लासिफिकेशन, और बड़े डेटासेट से मुख्य जानकारी निकालने के लिए।",
    },

    error_title: "त्रुटि",
    error_description: "कृपया कुछ टेक्स्ट दर्ज करें।",
    error_prompt: "इनपुट टेक्स्ट खाली नहीं होना चाहिए।",

    use_case_heading: "उपयोग के मामले:",
    output_heading: "प्रोसेस्ड टेक्स्ट/आउटपुट:",
    summary_heading: "सारांश:",
    keywords_heading: "कीवर्ड:",

    stop_word_note: "Stop Words हटाए गए/हाइलाइट किए गए",
    profanity_found: "अपशब्द पाए गए!",
    profanity_found_words: "पाए गए शब्द:",
    profanity_none: "टेक्स्ट में कोई अपशब्द नहीं पाया गया।",
    summary_prefix: "विश्लेषण किया गया टेक्स्ट",
    summary_suffix: "जैसी जानकारी से संबंधित है। यह तकनीकी विकास और निष्कर्षों की रिपोर्टिंग पर प्रकाश डालता है।",
    summary_fallback: "विश्लेषण किया गया टेक्स्ट विभिन्न विषयों पर केंद्रित है। यह टेक्स्ट के मुख्य विचार को संक्षेप में प्रस्तुत करता है।",
    no_keywords: "कोई विशिष्ट कीवर्ड नहीं मिला (सिम्युलेटेड)।",
};

static ENGLISH: Messages = Messages {
    stop_words: AnalyzerText {
        label: "Stop Words",
        title: "Stop Words Filtering",
        description: "Removes common, low-value words from the text.",
        use_case: "Useful for improving search engine performance, pre-processing text for data analysis, and reducing textual \"noise\".",
    },
    stemming: AnalyzerText {
        label: "Stemming",
        title: "Stemming",
        description: "Tries to reduce words to their root form (stem) by removing suffixes such as '-ing', '-ed' and '-s'.",
        use_case: "Matching related word forms in search engines, text classification, and information retrieval.",
    },
    profanity: AnalyzerText {
        label: "Profanity",
        title: "Profanity Check",
        description: "Checks the text for offensive or abusive words.",
        use_case: "Online content moderation, comment filtering, safe browsing for children, and protecting brand reputation.",
    },
    summary: AnalyzerText {
        label: "Summary & Keywords",
        title: "Summary & Keywords (Simulated)",
        description: "Provides a (simulated) short summary of a longer text and extracts its main keywords.",
        use_case: "Skimming documents quickly, content indexing, text classification, and pulling key information out of large datasets.",
    },

    error_title: "Error",
    error_description: "Please enter some text.",
    error_prompt: "Input text must not be empty.",

    use_case_heading: "Use cases:",
    output_heading: "Processed text/output:",
    summary_heading: "Summary:",
    keywords_heading: "Keywords:",

    stop_word_note: "stop words removed/highlighted",
    profanity_found: "offensive words found!",
    profanity_found_words: "Words found:",
    profanity_none: "No offensive words were found in the text.",
    summary_prefix: "The analyzed text relates to information such as",
    summary_suffix: "It highlights technical development and the reporting of findings.",
    summary_fallback: "The analyzed text focuses on various topics. It briefly presents the main idea of the text.",
    no_keywords: "No specific keywords found (simulated).",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_locale_is_hindi() {
        assert_eq!(Locale::default(), Locale::Hindi);
        assert_eq!(Locale::default().messages().error_title, "त्रुटि");
    }

    #[test]
    fn test_locale_from_str() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::English);
        assert_eq!("Hindi".parse::<Locale>().unwrap(), Locale::Hindi);
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn test_locale_serde_codes() {
        assert_eq!(serde_json::to_string(&Locale::English).unwrap(), "\"en\"");
        let locale: Locale = serde_json::from_str("\"hi\"").unwrap();
        assert_eq!(locale, Locale::Hindi);
    }

    #[test]
    fn test_stop_word_note_embeds_count() {
        let note = Locale::English.messages().stop_word_note(7);
        assert!(note.ends_with("\n(7 stop words removed/highlighted)"));

        let note = Locale::Hindi.messages().stop_word_note(3);
        assert!(note.ends_with("\n(3 Stop Words हटाए गए/हाइलाइट किए गए)"));
    }

    #[test]
    fn test_profanity_summary() {
        let messages = Locale::Hindi.messages();
        let found = vec!["badword".to_string(), "damn".to_string()];

        assert_eq!(
            messages.profanity_summary(2, &found),
            "**2 अपशब्द पाए गए!**\n\nपाए गए शब्द: badword, damn"
        );
        assert_eq!(
            messages.profanity_summary(0, &[]),
            "टेक्स्ट में कोई अपशब्द नहीं पाया गया।"
        );
    }

    #[test]
    fn test_summary_text() {
        let messages = Locale::English.messages();

        assert_eq!(
            messages.summary_text(Some("  The Quick Fox ")),
            "The analyzed text relates to information such as the quick fox It highlights technical development and the reporting of findings."
        );
        assert_eq!(
            messages.summary_text(None),
            "The analyzed text focuses on various topics. It briefly presents the main idea of the text."
        );
    }
}
