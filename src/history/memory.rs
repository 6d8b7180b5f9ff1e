//! In-memory history store.

use std::convert::Infallible;

use log::debug;

use super::{HistoryFeed, HistoryLog, HistoryRecord, HistoryStore};

/// History kept for the lifetime of the process.
#[derive(Debug)]
pub struct MemoryHistoryStore {
    log: HistoryLog,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::from_records(Vec::new())
    }

    /// Start from existing records; new ids continue after the highest one.
    pub fn from_records(records: Vec<HistoryRecord>) -> Self {
        MemoryHistoryStore {
            log: HistoryLog::from_records(records),
        }
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryHistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn append(&self, text: &str) {
        if let Ok(record) = self.log.append_with(text, |_| Ok::<(), Infallible>(())) {
            debug!("history: saved record {}", record.id);
        }
    }

    fn observe_all(&self) -> HistoryFeed {
        self.log.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_are_listed_newest_first() {
        let store = MemoryHistoryStore::new();
        for text in ["one", "two", "three"] {
            store.append(text);
        }

        let records = store.snapshot();
        assert_eq!(records.len(), 3);

        let ids: Vec<_> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        assert_eq!(records[0].text, "three");
        assert!(records.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
    }

    #[test]
    fn test_feed_sees_every_change() {
        let store = MemoryHistoryStore::new();
        let mut feed = store.observe_all();
        assert!(feed.borrow_and_update().is_empty());

        store.append("saved");
        assert!(feed.has_changed().unwrap());
        assert_eq!(feed.borrow_and_update()[0].text, "saved");
    }

    #[test]
    fn test_blank_text_is_stored_verbatim() {
        let store = MemoryHistoryStore::default();
        store.append("  ");

        assert_eq!(store.snapshot()[0].text, "  ");
        assert!(!store.is_empty());
    }
}
