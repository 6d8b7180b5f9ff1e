//! Saved-text history.
//!
//! A history store keeps every text the user chose to save, stamped with an
//! id and the time it was saved. Observers receive the complete list, newest
//! first, each time it changes.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

mod jsonl;
mod memory;

pub use jsonl::JsonlHistoryStore;
pub use memory::MemoryHistoryStore;

/// Default file name of the JSONL history store.
pub const DEFAULT_HISTORY_FILE: &str = "exude_history.jsonl";

/// One saved text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Unique, increasing identifier.
    pub id: i64,
    pub text: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl HistoryRecord {
    /// The save time as a UTC date.
    pub fn recorded_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.timestamp).unwrap_or_default()
    }

    /// The save time formatted for listings.
    pub fn display_timestamp(&self) -> String {
        self.recorded_at().format("%Y-%m-%d %H:%M:%S").to_string()
    }

    /// At most `max_chars` characters of the text on a single line.
    pub fn preview(&self, max_chars: usize) -> String {
        let single_line = self.text.split_whitespace().collect::<Vec<_>>().join(" ");
        if single_line.chars().count() <= max_chars {
            return single_line;
        }
        let mut preview: String = single_line.chars().take(max_chars).collect();
        preview.push('…');
        preview
    }
}

/// Live view of the full history, newest first.
pub type HistoryFeed = watch::Receiver<Arc<Vec<HistoryRecord>>>;

/// Persistence for saved texts.
///
/// `append` never reports failure to the caller; implementations log and
/// drop records they cannot store.
pub trait HistoryStore: Send + Sync {
    /// Save `text` with a fresh id and the current time.
    fn append(&self, text: &str);

    /// Subscribe to the full history.
    fn observe_all(&self) -> HistoryFeed;

    /// The current history, newest first.
    fn snapshot(&self) -> Vec<HistoryRecord> {
        let feed = self.observe_all();
        let records = feed.borrow();
        Vec::clone(&records)
    }
}

/// Newest timestamp first; newer id first among equal timestamps.
pub(crate) fn sort_newest_first(records: &mut [HistoryRecord]) {
    records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
}

/// Ordered records plus the id counter and the feed publishing them.
#[derive(Debug)]
pub(crate) struct HistoryLog {
    state: Mutex<LogState>,
    feed: watch::Sender<Arc<Vec<HistoryRecord>>>,
}

#[derive(Debug)]
struct LogState {
    records: Vec<HistoryRecord>,
    last_id: i64,
}

impl HistoryLog {
    pub(crate) fn from_records(mut records: Vec<HistoryRecord>) -> Self {
        let last_id = records.iter().map(|record| record.id).max().unwrap_or(0);
        sort_newest_first(&mut records);
        let (feed, _) = watch::channel(Arc::new(records.clone()));

        HistoryLog {
            state: Mutex::new(LogState { records, last_id }),
            feed,
        }
    }

    /// Create the next record and hand it to `persist`; the record is kept
    /// and published only if `persist` succeeds.
    pub(crate) fn append_with<E, F>(&self, text: &str, persist: F) -> Result<HistoryRecord, E>
    where
        F: FnOnce(&HistoryRecord) -> Result<(), E>,
    {
        let mut state = self.state.lock();

        let record = HistoryRecord {
            id: state.last_id + 1,
            text: text.to_string(),
            timestamp: Utc::now().timestamp_millis(),
        };
        persist(&record)?;

        state.last_id = record.id;
        state.records.push(record.clone());
        sort_newest_first(&mut state.records);
        self.feed.send_replace(Arc::new(state.records.clone()));

        Ok(record)
    }

    pub(crate) fn subscribe(&self) -> HistoryFeed {
        self.feed.subscribe()
    }

    pub(crate) fn len(&self) -> usize {
        self.state.lock().records.len()
    }
}
