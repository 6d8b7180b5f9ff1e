//! Configuration for the annotation toolkit.
//!
//! Configuration is a plain serde struct; every field has a default so a
//! JSON file only needs to name what it changes:
//!
//! ```json
//! { "locale": "en", "simulated_latency_ms": 0 }
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::DEFAULT_MAX_KEYWORDS;
use crate::analysis::messages::Locale;
use crate::analysis::stemmer::StemmingMode;
use crate::error::{ExudeError, Result};

/// Default artificial delay before an analysis result is delivered.
pub const DEFAULT_SIMULATED_LATENCY_MS: u64 = 700;

/// Configuration for [`Toolkit`](crate::toolkit::Toolkit) and
/// [`AnalysisSession`](crate::session::AnalysisSession).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolkitConfig {
    /// Delay applied before delivering a non-blank analysis, in milliseconds.
    pub simulated_latency_ms: u64,

    /// Rule application strategy of the stemming analyzer.
    pub stemming_mode: StemmingMode,

    /// Language of titles, descriptions and notes.
    pub locale: Locale,

    /// Maximum number of keywords the summary analyzer reports.
    pub max_keywords: usize,

    /// Where the file-backed history store keeps its records.
    pub history_path: Option<PathBuf>,
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            simulated_latency_ms: DEFAULT_SIMULATED_LATENCY_MS,
            stemming_mode: StemmingMode::Cascade,
            locale: Locale::Hindi,
            max_keywords: DEFAULT_MAX_KEYWORDS,
            history_path: None,
        }
    }
}

impl ToolkitConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a JSON file and validate it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        let config: ToolkitConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.max_keywords == 0 {
            return Err(ExudeError::config("max_keywords must be at least 1"));
        }
        Ok(())
    }

    /// The simulated latency as a duration.
    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }

    /// Set the simulated latency.
    pub fn with_simulated_latency(mut self, latency: Duration) -> Self {
        self.simulated_latency_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the stemming mode.
    pub fn with_stemming_mode(mut self, mode: StemmingMode) -> Self {
        self.stemming_mode = mode;
        self
    }

    /// Set the locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Set the keyword cap.
    pub fn with_max_keywords(mut self, max_keywords: usize) -> Self {
        self.max_keywords = max_keywords;
        self
    }

    /// Set the history file path.
    pub fn with_history_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.history_path = Some(path.into());
        self
    }
}
