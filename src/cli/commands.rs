//! Command implementations for the Exude CLI.

use std::io::{self, Read};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::ToolkitConfig;
use crate::error::{ExudeError, Result};
use crate::history::{DEFAULT_HISTORY_FILE, HistoryStore, JsonlHistoryStore};
use crate::session::{AnalysisSession, Delivery};
use crate::toolkit::Toolkit;

/// Execute a CLI command.
pub fn execute_command(args: ExudeArgs) -> Result<()> {
    let config = load_config(&args)?;

    match &args.command {
        Command::Analyze(analyze_args) => analyze_text(analyze_args, config, &args),
        Command::History(HistoryCommand::Add(add_args)) => history_add(add_args, &config, &args),
        Command::History(HistoryCommand::List(list_args)) => {
            history_list(list_args, &config, &args)
        }
    }
}

/// Read the configuration file, if any, and apply command line overrides.
pub fn load_config(args: &ExudeArgs) -> Result<ToolkitConfig> {
    let mut config = match &args.config {
        Some(path) => {
            debug!("Loading configuration from: {}", path.display());
            ToolkitConfig::from_file(path)?
        }
        None => ToolkitConfig::default(),
    };

    if let Some(locale) = args.locale {
        config = config.with_locale(locale.into());
    }
    Ok(config)
}

/// Analyze text with the selected analyzers.
fn analyze_text(args: &AnalyzeArgs, config: ToolkitConfig, cli_args: &ExudeArgs) -> Result<()> {
    let text = input_text(args.text.as_deref())?;

    let latency = if args.no_delay {
        Duration::ZERO
    } else {
        config.simulated_latency()
    };
    let toolkit = Arc::new(Toolkit::new(config)?);
    let session = AnalysisSession::with_toolkit(toolkit, latency);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    let analyses = runtime.block_on(async {
        let mut analyses = Vec::new();
        for kind in args.kinds() {
            let start = Instant::now();
            let delivery = session.run(kind, &text).await;
            let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

            match delivery {
                Delivery::Delivered(result) => analyses.push(AnalysisOutput {
                    analyzer: kind,
                    locale: session.toolkit().locale(),
                    duration_ms,
                    result: Arc::unwrap_or_clone(result),
                }),
                Delivery::Superseded { generation, latest } => {
                    return Err(ExudeError::other(format!(
                        "analysis {generation} was superseded by {latest}"
                    )));
                }
            }
        }
        Ok(analyses)
    })?;

    info!("Ran {} analyzer(s) over {} chars", analyses.len(), text.chars().count());

    output_result("Analysis complete", &AnalysisReport { analyses }, cli_args)
}

/// Save a text to the history.
fn history_add(args: &HistoryAddArgs, config: &ToolkitConfig, cli_args: &ExudeArgs) -> Result<()> {
    let text = input_text(args.text.as_deref())?;
    let path = history_path(&args.store, config);
    let store = JsonlHistoryStore::open(&path)?;

    let before = store.len();
    store.append(&text);
    if store.len() == before {
        return Err(ExudeError::history(format!(
            "could not save to {}",
            path.display()
        )));
    }

    output_result(
        "Text saved",
        &HistorySaved {
            path: path.display().to_string(),
            total_records: store.len(),
        },
        cli_args,
    )
}

/// List saved texts, newest first.
fn history_list(
    args: &HistoryListArgs,
    config: &ToolkitConfig,
    cli_args: &ExudeArgs,
) -> Result<()> {
    let path = history_path(&args.store, config);
    let store = JsonlHistoryStore::open(&path)?;

    let mut records = store.snapshot();
    let total_records = records.len();
    if let Some(limit) = args.limit {
        records.truncate(limit);
    }

    output_result(
        "Saved texts",
        &HistoryListing {
            path: path.display().to_string(),
            total_records,
            records,
        },
        cli_args,
    )
}

/// The history file: `--history`, then the configuration, then the default.
pub fn history_path(args: &HistoryStoreArgs, config: &ToolkitConfig) -> PathBuf {
    args.path
        .clone()
        .or_else(|| config.history_path.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_HISTORY_FILE))
}

/// The argument text, or all of stdin without its trailing line break.
fn input_text(text: Option<&str>) -> Result<String> {
    match text {
        Some(text) => Ok(text.to_string()),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer.trim_end_matches(['\n', '\r']).to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_history_path_precedence() {
        let config = ToolkitConfig::default();
        let none = HistoryStoreArgs { path: None };
        assert_eq!(history_path(&none, &config), PathBuf::from(DEFAULT_HISTORY_FILE));

        let config = config.with_history_path("from_config.jsonl");
        assert_eq!(history_path(&none, &config), PathBuf::from("from_config.jsonl"));

        let explicit = HistoryStoreArgs {
            path: Some(PathBuf::from("explicit.jsonl")),
        };
        assert_eq!(history_path(&explicit, &config), PathBuf::from("explicit.jsonl"));
    }

    #[test]
    fn test_locale_override() {
        let args = ExudeArgs::try_parse_from(["exude", "--locale", "en", "history", "list"])
            .unwrap();
        let config = load_config(&args).unwrap();

        assert_eq!(config.locale, crate::analysis::messages::Locale::English);
    }

    #[test]
    fn test_history_commands_round_trip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("history.jsonl");
        let path_arg = path.to_str().unwrap();

        let add = ExudeArgs::try_parse_from([
            "exude", "-q", "history", "add", "saved text", "--history", path_arg,
        ])
        .unwrap();
        execute_command(add).unwrap();

        let store = JsonlHistoryStore::open(&path).unwrap();
        assert_eq!(store.snapshot()[0].text, "saved text");
    }

    #[test]
    fn test_analyze_without_delay() {
        let args = ExudeArgs::try_parse_from([
            "exude",
            "-f",
            "json",
            "analyze",
            "--all",
            "--no-delay",
            "This is a very badword.",
        ])
        .unwrap();

        assert!(execute_command(args).is_ok());
    }
}
