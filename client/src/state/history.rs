//! History-list state for past question/answer records.
//!
//! DESIGN
//! ======
//! The unfiltered list is retained; search filtering is a pure derivation
//! recomputed whenever the search text or the list changes. Deletion is
//! confirm-then-mutate: rows leave this list only after the store
//! acknowledges the delete.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::net::types::QaRecord;

/// Maximum number of records fetched and displayed.
pub const HISTORY_LIMIT: usize = 50;

/// Shared history state backed by `record:*` frames.
#[derive(Clone, Debug, Default)]
pub struct HistoryState {
    pub records: Vec<QaRecord>,
    pub loading: bool,
    pub search: String,
}

impl HistoryState {
    /// Replace the list with a fetched page: newest first, capped at
    /// [`HISTORY_LIMIT`]. The sort is defensive — the store already orders
    /// by creation time descending.
    pub fn apply_list(&mut self, mut records: Vec<QaRecord>) {
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        records.truncate(HISTORY_LIMIT);
        self.records = records;
        self.loading = false;
    }

    /// Insert a freshly persisted record at the top, replacing any row
    /// with the same id, keeping the cap.
    pub fn insert_front(&mut self, record: QaRecord) {
        self.records.retain(|r| r.id != record.id);
        self.records.insert(0, record);
        self.records.truncate(HISTORY_LIMIT);
    }

    /// Remove one confirmed-deleted record. Unknown ids are a no-op.
    pub fn remove(&mut self, record_id: &str) {
        self.records.retain(|r| r.id != record_id);
    }

    /// The visible list under the current search text: case-insensitive
    /// substring match on question OR answer; empty search yields the
    /// full list. Non-destructive — `records` is never touched.
    #[must_use]
    pub fn filtered(&self) -> Vec<QaRecord> {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return self.records.clone();
        }
        self.records
            .iter()
            .filter(|r| {
                r.question.to_lowercase().contains(&needle)
                    || r.answer.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }
}
