//! # Exude
//!
//! Heuristic text annotation for short English text.
//!
//! ## Features
//!
//! - Stop word highlighting with counts
//! - Suffix-stripping stemmer with inline stem annotations
//! - Flagged word detection
//! - Simulated summary with allow-listed keyword extraction
//! - Asynchronous session where the newest request always wins
//! - Saved-text history with live observers
//!
//! ## Example
//!
//! ```
//! use exude::prelude::*;
//!
//! let toolkit = Toolkit::new(ToolkitConfig::default().with_locale(Locale::English)).unwrap();
//! let result = toolkit.analyze(AnalyzerKind::Stemming, "The foxes were running");
//!
//! assert_eq!(result.plain_text(), " The foxes (stem: fox) were running (stem: runn)");
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod history;
pub mod session;
pub mod toolkit;

pub mod prelude {
    pub use crate::analysis::{
        AnalysisResult, AnalyzerKind, Lexicon, Lexicons, Locale, Segment, StemmingMode,
        TextAnalyzer,
    };
    pub use crate::config::ToolkitConfig;
    pub use crate::error::{ExudeError, Result};
    pub use crate::history::{
        HistoryFeed, HistoryRecord, HistoryStore, JsonlHistoryStore, MemoryHistoryStore,
    };
    pub use crate::session::{AnalysisSession, Delivery, PendingAnalysis, SessionState};
    pub use crate::toolkit::Toolkit;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
