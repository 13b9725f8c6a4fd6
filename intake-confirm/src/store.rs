//! Completion-flag store boundary.
//!
//! The persisted completion flag is the only shared mutable resource in
//! the pipeline. It is mutated exclusively through the conditional
//! update here - an optimistic compare-and-set, no distributed lock.

use async_trait::async_trait;
use intake_core::StoreError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Read and conditionally update the per-row completion flag.
#[async_trait]
pub trait FlagStore: Send + Sync {
    /// Read the completion flag for a response. `None` means the row is
    /// not yet visible - expected under race with the writer side.
    async fn read_flag(&self, response_id: &str) -> Result<Option<bool>, StoreError>;

    /// Set the flag to true, guarded on it still being false. Returns
    /// the number of rows affected: 1 if this call flipped the flag, 0
    /// if another invocation already did (or the row is absent). Both
    /// are success; `Err` is reserved for infrastructure failures.
    async fn mark_processed(&self, response_id: &str) -> Result<u64, StoreError>;
}

#[derive(Debug, Default)]
struct FlagState {
    rows: HashMap<String, bool>,
    fail_reads: bool,
    fail_updates: bool,
}

/// In-memory flag store for testing. The conditional update is a real
/// compare-and-set under one lock, so concurrent callers observe the
/// same 0-or-1 rows-affected contract as the warehouse.
#[derive(Debug, Default, Clone)]
pub struct MemoryFlagStore {
    state: Arc<Mutex<FlagState>>,
}

impl MemoryFlagStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a row with the completion flag unset, as the writer does.
    pub fn insert_row(&self, response_id: &str) {
        self.state
            .lock()
            .unwrap()
            .rows
            .insert(response_id.to_string(), false);
    }

    /// Insert a row with an explicit flag value.
    pub fn insert_with_flag(&self, response_id: &str, processed: bool) {
        self.state
            .lock()
            .unwrap()
            .rows
            .insert(response_id.to_string(), processed);
    }

    /// Current flag value, for assertions.
    pub fn flag(&self, response_id: &str) -> Option<bool> {
        self.state.lock().unwrap().rows.get(response_id).copied()
    }

    pub fn fail_reads(&self, fail: bool) {
        self.state.lock().unwrap().fail_reads = fail;
    }

    pub fn fail_updates(&self, fail: bool) {
        self.state.lock().unwrap().fail_updates = fail;
    }
}

#[async_trait]
impl FlagStore for MemoryFlagStore {
    async fn read_flag(&self, response_id: &str) -> Result<Option<bool>, StoreError> {
        let state = self.state.lock().unwrap();
        if state.fail_reads {
            return Err(StoreError::QueryFailed {
                response_id: response_id.to_string(),
                reason: "injected read failure".to_string(),
            });
        }
        Ok(state.rows.get(response_id).copied())
    }

    async fn mark_processed(&self, response_id: &str) -> Result<u64, StoreError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_updates {
            return Err(StoreError::UpdateFailed {
                response_id: response_id.to_string(),
                reason: "injected update failure".to_string(),
            });
        }
        match state.rows.get_mut(response_id) {
            Some(flag) if !*flag => {
                *flag = true;
                Ok(1)
            }
            // Already true, or row absent: the guard matched nothing.
            _ => Ok(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn conditional_update_flips_once() {
        let store = MemoryFlagStore::new();
        store.insert_row("R_1");

        assert_eq!(store.mark_processed("R_1").await.unwrap(), 1);
        assert_eq!(store.mark_processed("R_1").await.unwrap(), 0);
        assert_eq!(store.flag("R_1"), Some(true));
    }

    #[tokio::test]
    async fn absent_row_reads_as_none_and_updates_nothing() {
        let store = MemoryFlagStore::new();
        assert_eq!(store.read_flag("R_missing").await.unwrap(), None);
        assert_eq!(store.mark_processed("R_missing").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn concurrent_guarded_updates_race_cleanly() {
        // Two overlapping invocations on the same just-created row:
        // exactly one reports 1 row affected, the other 0, no errors.
        let store = MemoryFlagStore::new();
        store.insert_row("R_race");

        let a = store.clone();
        let b = store.clone();
        let (first, second) = tokio::join!(
            tokio::spawn(async move { a.mark_processed("R_race").await }),
            tokio::spawn(async move { b.mark_processed("R_race").await }),
        );

        let mut affected = vec![first.unwrap().unwrap(), second.unwrap().unwrap()];
        affected.sort_unstable();
        assert_eq!(affected, vec![0, 1]);
        assert_eq!(store.flag("R_race"), Some(true));
    }
}
