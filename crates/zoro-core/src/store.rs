//! The record store: sole owner of the exam collection.
//!
//! Every mutation is write-through. The new collection is encoded and handed
//! to the backend first, and only replaces the in-memory copy once the write
//! succeeded, so a failed save leaves the store exactly as it was.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{ExportError, ImportError, StoreError};
use crate::model::ExamRecord;
use crate::statistics::DashboardStats;
use crate::traits::KeyValueStore;
use crate::transfer::{export_records, parse_import, ExportArtifact};
use crate::view::{filter_by_name, sort_records, SortColumn, SortDirection, SortState};

/// Key holding the serialized collection.
pub const HISTORY_KEY: &str = "zoroExamHistory";

/// Key holding the last table sort.
pub const SORT_STATE_KEY: &str = "zoroSortState";

/// What to do when the persisted collection cannot be decoded at load time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorruptStatePolicy {
    /// Refuse to start and return `PersistedStateCorrupt`.
    #[default]
    Fail,
    /// Log a warning and start from an empty collection.
    Reset,
}

/// Result of a confirmation-gated clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    /// The collection was emptied; `removed` records were dropped.
    Cleared { removed: usize },
    /// The user did not confirm; nothing changed.
    Declined,
}

/// Owns the collection and the table sort state over a key-value backend.
pub struct RecordStore<S> {
    backend: S,
    records: Vec<ExamRecord>,
    sort_state: SortState,
}

impl<S: KeyValueStore> RecordStore<S> {
    /// Load the collection with the default (`Fail`) corruption policy.
    pub fn load(backend: S) -> Result<Self, StoreError> {
        Self::load_with_policy(backend, CorruptStatePolicy::Fail)
    }

    /// Load the collection and sort state from `backend`.
    ///
    /// A missing blob yields an empty collection. A blob that does not decode
    /// is handled according to `policy`. An unreadable sort state is not
    /// fatal and falls back to the default.
    pub fn load_with_policy(backend: S, policy: CorruptStatePolicy) -> Result<Self, StoreError> {
        let records = match backend.get(HISTORY_KEY)? {
            None => Vec::new(),
            Some(blob) => match serde_json::from_str::<Vec<ExamRecord>>(&blob) {
                Ok(records) => records,
                Err(e) => match policy {
                    CorruptStatePolicy::Fail => {
                        return Err(StoreError::PersistedStateCorrupt {
                            key: HISTORY_KEY.to_string(),
                            reason: e.to_string(),
                        });
                    }
                    CorruptStatePolicy::Reset => {
                        warn!(
                            backend = backend.name(),
                            error = %e,
                            "persisted exam history is corrupt, starting empty"
                        );
                        Vec::new()
                    }
                },
            },
        };

        let sort_state = match backend.get(SORT_STATE_KEY) {
            Ok(Some(blob)) => serde_json::from_str(&blob).unwrap_or_else(|e| {
                debug!(error = %e, "ignoring undecodable sort state");
                SortState::default()
            }),
            Ok(None) => SortState::default(),
            Err(e) => {
                warn!(
                    backend = backend.name(),
                    error = %e,
                    "sort state is unreadable, using default"
                );
                SortState::default()
            }
        };

        debug!(
            backend = backend.name(),
            records = records.len(),
            "loaded exam history"
        );

        Ok(Self {
            backend,
            records,
            sort_state,
        })
    }

    /// Read-only snapshot of the collection.
    pub fn all(&self) -> &[ExamRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The sort applied by the last [`sort_by`](Self::sort_by) call.
    pub fn sort_state(&self) -> SortState {
        self.sort_state
    }

    /// Give the backend back, e.g. to reload from it.
    pub fn into_backend(self) -> S {
        self.backend
    }

    /// Replace the whole collection and persist it.
    pub fn replace_all(&mut self, records: Vec<ExamRecord>) -> Result<(), StoreError> {
        self.persist(&records)?;
        self.records = records;
        Ok(())
    }

    /// Add one record and persist the collection.
    pub fn append(&mut self, record: ExamRecord) -> Result<(), StoreError> {
        let mut next = self.records.clone();
        next.push(record);
        self.replace_all(next)
    }

    /// Empty the collection and persist. Returns how many records were removed.
    ///
    /// Callers confirm destructive intent before calling this.
    pub fn clear(&mut self) -> Result<usize, StoreError> {
        let removed = self.records.len();
        self.replace_all(Vec::new())?;
        info!(removed, "cleared exam history");
        Ok(removed)
    }

    /// Clear only if the caller confirmed.
    ///
    /// `confirm` receives the number of records that would be removed.
    pub fn clear_if<F>(&mut self, confirm: F) -> Result<ClearOutcome, StoreError>
    where
        F: FnOnce(usize) -> bool,
    {
        if !confirm(self.records.len()) {
            return Ok(ClearOutcome::Declined);
        }
        let removed = self.clear()?;
        Ok(ClearOutcome::Cleared { removed })
    }

    /// Replace the collection with an import payload, all or nothing.
    ///
    /// On any error the collection is left untouched and nothing is written.
    pub fn import(&mut self, text: &str) -> Result<usize, ImportError> {
        let records = parse_import(text)?;
        let count = records.len();
        self.replace_all(records)?;
        info!(records = count, "imported exam history");
        Ok(count)
    }

    /// Export the full collection as a pretty-printed snapshot.
    pub fn export(&self) -> Result<ExportArtifact, ExportError> {
        export_records(&self.records)
    }

    /// Dashboard statistics over the full collection.
    pub fn stats(&self) -> DashboardStats {
        DashboardStats::compute(&self.records)
    }

    /// Toggle the sort on `column` and return the full collection in that order.
    ///
    /// Always sorts the unfiltered collection; any search is discarded.
    pub fn sort_by(&mut self, column: SortColumn) -> Result<Vec<ExamRecord>, StoreError> {
        let mut next = self.sort_state;
        let direction = next.toggle(column);
        self.save_sort_state(next)?;
        Ok(sort_records(&self.records, column, direction))
    }

    /// Sort the full collection with an explicit direction.
    pub fn sort_with(
        &mut self,
        column: SortColumn,
        direction: SortDirection,
    ) -> Result<Vec<ExamRecord>, StoreError> {
        self.save_sort_state(SortState { column, direction })?;
        Ok(sort_records(&self.records, column, direction))
    }

    /// Records whose name contains `term`, in collection order.
    ///
    /// Always filters the unsorted collection; any sort is discarded.
    pub fn search(&self, term: &str) -> Vec<ExamRecord> {
        filter_by_name(&self.records, term)
    }

    fn persist(&mut self, records: &[ExamRecord]) -> Result<(), StoreError> {
        let blob = serde_json::to_string(records)?;
        self.backend.set(HISTORY_KEY, &blob)?;
        debug!(
            backend = self.backend.name(),
            records = records.len(),
            bytes = blob.len(),
            "saved exam history"
        );
        Ok(())
    }

    fn save_sort_state(&mut self, state: SortState) -> Result<(), StoreError> {
        let blob = serde_json::to_string(&state)?;
        self.backend.set(SORT_STATE_KEY, &blob)?;
        self.sort_state = state;
        Ok(())
    }
}
