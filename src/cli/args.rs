//! Command line argument parsing for the Exude CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::AnalyzerKind;
use crate::analysis::messages::Locale;

/// Exude - heuristic text annotation from the terminal
#[derive(Parser, Debug, Clone)]
#[command(name = "exude")]
#[command(about = "Annotate text with stop words, stems, flagged words and keywords")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ExudeArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(long, value_name = "CONFIG_FILE", env = "EXUDE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Language of titles and notes (overrides the configuration)
    #[arg(long, global = true)]
    pub locale: Option<LocaleArg>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl ExudeArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Analyze text with one or all analyzers
    Analyze(AnalyzeArgs),

    /// Save or list texts in the history
    #[command(subcommand)]
    History(HistoryCommand),
}

/// Arguments for analyzing text
#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Text to analyze (read from stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Analyzer to run
    #[arg(short, long, default_value = "stop-words", conflicts_with = "all")]
    pub analyzer: AnalyzerArg,

    /// Run every analyzer in tab order
    #[arg(long)]
    pub all: bool,

    /// Skip the simulated latency
    #[arg(long)]
    pub no_delay: bool,
}

impl AnalyzeArgs {
    /// The analyzers to run, in order.
    pub fn kinds(&self) -> Vec<AnalyzerKind> {
        if self.all {
            AnalyzerKind::ALL.to_vec()
        } else {
            vec![self.analyzer.into()]
        }
    }
}

/// History subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum HistoryCommand {
    /// Save a text
    Add(HistoryAddArgs),

    /// List saved texts, newest first
    List(HistoryListArgs),
}

/// Arguments for saving a text
#[derive(Args, Debug, Clone)]
pub struct HistoryAddArgs {
    /// Text to save (read from stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    #[command(flatten)]
    pub store: HistoryStoreArgs,
}

/// Arguments for listing saved texts
#[derive(Args, Debug, Clone)]
pub struct HistoryListArgs {
    /// Maximum number of records to show
    #[arg(short, long)]
    pub limit: Option<usize>,

    #[command(flatten)]
    pub store: HistoryStoreArgs,
}

/// Location of the history file
#[derive(Args, Debug, Clone)]
pub struct HistoryStoreArgs {
    /// History file (JSONL)
    #[arg(long = "history", value_name = "HISTORY_FILE", env = "EXUDE_HISTORY")]
    pub path: Option<PathBuf>,
}

/// Analyzers selectable on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnalyzerArg {
    /// Highlight stop words
    StopWords,
    /// Annotate heuristic stems
    Stemming,
    /// Detect flagged words
    Profanity,
    /// Simulated summary and keywords
    Summary,
}

impl From<AnalyzerArg> for AnalyzerKind {
    fn from(arg: AnalyzerArg) -> Self {
        match arg {
            AnalyzerArg::StopWords => AnalyzerKind::StopWords,
            AnalyzerArg::Stemming => AnalyzerKind::Stemming,
            AnalyzerArg::Profanity => AnalyzerKind::Profanity,
            AnalyzerArg::Summary => AnalyzerKind::SummaryKeywords,
        }
    }
}

/// Locales selectable on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleArg {
    /// Hindi
    Hi,
    /// English
    En,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::Hi => Locale::Hindi,
            LocaleArg::En => Locale::English,
        }
    }
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
