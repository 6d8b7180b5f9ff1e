//! Text annotation module for Exude.
//!
//! Raw text flows through char filters and a whitespace tokenizer into
//! aligned token pairs, which the analyzers match against static lexicons to
//! produce span-annotated results.

pub mod analyzer;
pub mod char_filter;
pub mod lexicon;
pub mod messages;
pub mod pipeline;
pub mod result;
pub mod stemmer;
pub mod token;
pub mod tokenizer;

pub use analyzer::{
    AnalyzerKind, ProfanityAnalyzer, StemmingAnalyzer, StopWordAnalyzer, SummaryAnalyzer,
    TextAnalyzer,
};
pub use lexicon::{Lexicon, Lexicons};
pub use messages::Locale;
pub use pipeline::TokenPipeline;
pub use result::{AccentColor, AnalysisResult, Segment};
pub use stemmer::{StemmingMode, Stemmer};
pub use token::Token;
