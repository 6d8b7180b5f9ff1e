//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::AnalyzerKind;
use crate::analysis::messages::Locale;
use crate::analysis::result::{AnalysisResult, Segment};
use crate::cli::args::{ExudeArgs, OutputFormat};
use crate::error::Result;
use crate::history::HistoryRecord;

/// Characters of a saved text shown per history line.
const PREVIEW_CHARS: usize = 60;

/// Result structure for one analysis.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisOutput {
    pub analyzer: AnalyzerKind,
    pub locale: Locale,
    pub duration_ms: u64,
    pub result: AnalysisResult,
}

/// Result structure for the analyze command.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub analyses: Vec<AnalysisOutput>,
}

/// Result structure for saving a text.
#[derive(Debug, Serialize, Deserialize)]
pub struct HistorySaved {
    pub path: String,
    pub total_records: usize,
}

/// Result structure for listing the history.
#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryListing {
    pub path: String,
    pub total_records: usize,
    pub records: Vec<HistoryRecord>,
}

/// Types that know how to render themselves for a terminal.
pub trait HumanOutput {
    fn to_human(&self) -> String;
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &ExudeArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

fn output_human<T: HumanOutput>(message: &str, result: &T, args: &ExudeArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    print!("{}", result.to_human());
    Ok(())
}

fn output_json<T: Serialize>(result: &T, args: &ExudeArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Render segments on one line, wrapping highlighted words in brackets.
pub fn render_segments(segments: &[Segment]) -> String {
    let mut line = String::new();

    for segment in segments {
        if segment.highlighted {
            let word = segment.word();
            line.push_str(&segment.text[..segment.text.len() - word.len()]);
            line.push('[');
            line.push_str(word);
            line.push(']');
        } else {
            line.push_str(&segment.text);
        }
        if let Some(annotation) = &segment.annotation {
            line.push_str(annotation);
        }
    }

    line.trim_start().to_string()
}

impl HumanOutput for AnalysisOutput {
    fn to_human(&self) -> String {
        let messages = self.locale.messages();
        let result = &self.result;
        let mut out = String::new();

        out.push_str(&result.title);
        out.push('\n');
        out.push_str(&"═".repeat(result.title.chars().count().max(3)));
        out.push('\n');
        out.push_str(&result.description);
        out.push_str("\n\n");

        if !result.usage_note.is_empty() {
            out.push_str(messages.use_case_heading);
            out.push('\n');
            out.push_str(&result.usage_note);
            out.push_str("\n\n");
        }

        let output_heading = match &result.summary {
            Some(summary) => {
                out.push_str(messages.summary_heading);
                out.push('\n');
                out.push_str(summary);
                out.push_str("\n\n");
                messages.keywords_heading
            }
            None => messages.output_heading,
        };

        if !result.is_error() {
            out.push_str(output_heading);
            out.push('\n');
        }
        out.push_str(&render_segments(&result.segments));
        out.push('\n');

        out
    }
}

impl HumanOutput for AnalysisReport {
    fn to_human(&self) -> String {
        self.analyses
            .iter()
            .map(HumanOutput::to_human)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl HumanOutput for HistorySaved {
    fn to_human(&self) -> String {
        format!("Saved to {} ({} records)\n", self.path, self.total_records)
    }
}

impl HumanOutput for HistoryListing {
    fn to_human(&self) -> String {
        if self.records.is_empty() {
            return format!("No saved texts in {}\n", self.path);
        }

        let mut out = String::new();
        for record in &self.records {
            out.push_str(&format!(
                "{:>5}  {}  {}\n",
                record.id,
                record.display_timestamp(),
                record.preview(PREVIEW_CHARS)
            ));
        }
        if self.records.len() < self.total_records {
            out.push_str(&format!(
                "... {} of {} records shown\n",
                self.records.len(),
                self.total_records
            ));
        }
        out
    }
}
