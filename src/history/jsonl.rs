//! History persisted as one JSON object per line.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};
use parking_lot::Mutex;

use super::{HistoryFeed, HistoryLog, HistoryRecord, HistoryStore};
use crate::error::Result;

/// File-backed history store.
///
/// Existing records are loaded when the store is opened; each append writes
/// a single line and flushes it before the record becomes visible.
#[derive(Debug)]
pub struct JsonlHistoryStore {
    path: PathBuf,
    file: Mutex<File>,
    log: HistoryLog,
}

impl JsonlHistoryStore {
    /// Open (creating if needed) the history file at `path`.
    ///
    /// Lines that are not valid records are skipped with a warning.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let records = if path.exists() {
            load_records(&path)?
        } else {
            Vec::new()
        };
        debug!(
            "history: loaded {} records from {}",
            records.len(),
            path.display()
        );

        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(JsonlHistoryStore {
            path,
            file: Mutex::new(file),
            log: HistoryLog::from_records(records),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn write_record(&self, record: &HistoryRecord) -> Result<()> {
        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        let mut file = self.file.lock();
        file.write_all(line.as_bytes())?;
        file.flush()?;
        Ok(())
    }
}

impl HistoryStore for JsonlHistoryStore {
    fn append(&self, text: &str) {
        match self.log.append_with(text, |record| self.write_record(record)) {
            Ok(record) => debug!("history: saved record {} to {}", record.id, self.path.display()),
            Err(e) => warn!("history: could not save to {}: {e}", self.path.display()),
        }
    }

    fn observe_all(&self) -> HistoryFeed {
        self.log.subscribe()
    }
}

fn load_records(path: &Path) -> Result<Vec<HistoryRecord>> {
    let reader = BufReader::new(File::open(path)?);
    let mut records = Vec::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<HistoryRecord>(&line) {
            Ok(record) => records.push(record),
            Err(e) => warn!(
                "history: skipping malformed line {} of {}: {e}",
                line_num + 1,
                path.display()
            ),
        }
    }

    Ok(records)
}
