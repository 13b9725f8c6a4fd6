//! In-memory warehouse for testing.
//!
//! Implements the committed-write channel contract over a shared map:
//! appended rows are immediately visible, matching the visibility
//! semantics the pipeline relies on.

use crate::writer::{AppendAck, ChannelOpener, RowStatus, WriteChannel};
use async_trait::async_trait;
use bytes::Bytes;
use intake_core::{TableRef, WriteError};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

#[derive(Debug, Default)]
struct WarehouseState {
    tables: HashMap<String, Vec<Bytes>>,
    finalized_streams: Vec<String>,
    fail_open: bool,
    fail_append: bool,
    fail_finalize: bool,
    reject_row: Option<(usize, i32)>,
}

/// In-memory channel opener with failure knobs for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryWarehouse {
    state: Arc<RwLock<WarehouseState>>,
}

impl MemoryWarehouse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows committed to a table so far.
    pub fn rows(&self, table: &TableRef) -> Vec<Bytes> {
        self.state
            .read()
            .unwrap()
            .tables
            .get(&table.to_string())
            .cloned()
            .unwrap_or_default()
    }

    pub fn row_count(&self, table: &TableRef) -> usize {
        self.rows(table).len()
    }

    /// Number of finalize calls observed across all channels.
    pub fn finalized_count(&self) -> usize {
        self.state.read().unwrap().finalized_streams.len()
    }

    pub fn fail_open(&self, fail: bool) {
        self.state.write().unwrap().fail_open = fail;
    }

    pub fn fail_append(&self, fail: bool) {
        self.state.write().unwrap().fail_append = fail;
    }

    pub fn fail_finalize(&self, fail: bool) {
        self.state.write().unwrap().fail_finalize = fail;
    }

    /// Make the next append report `code` for the row at `index`.
    pub fn reject_row(&self, index: usize, code: i32) {
        self.state.write().unwrap().reject_row = Some((index, code));
    }
}

#[async_trait]
impl ChannelOpener for MemoryWarehouse {
    async fn open_committed(&self, table: &TableRef) -> Result<Box<dyn WriteChannel>, WriteError> {
        if self.state.read().unwrap().fail_open {
            return Err(WriteError::ChannelOpen {
                table: table.to_string(),
                reason: "injected open failure".to_string(),
            });
        }

        Ok(Box::new(MemoryChannel {
            state: Arc::clone(&self.state),
            table: table.clone(),
            stream_id: format!("streams/{}", Uuid::now_v7()),
        }))
    }
}

struct MemoryChannel {
    state: Arc<RwLock<WarehouseState>>,
    table: TableRef,
    stream_id: String,
}

#[async_trait]
impl WriteChannel for MemoryChannel {
    fn stream_id(&self) -> &str {
        &self.stream_id
    }

    async fn append(&mut self, rows: &[Bytes]) -> Result<AppendAck, WriteError> {
        let mut state = self.state.write().unwrap();

        if state.fail_append {
            return Err(WriteError::AppendFailed {
                table: self.table.to_string(),
                stream_id: self.stream_id.clone(),
                reason: "injected append failure".to_string(),
            });
        }

        if let Some((index, code)) = state.reject_row.take() {
            return Ok(AppendAck {
                offset: 0,
                row_status: vec![RowStatus {
                    index,
                    code,
                    message: "invalid row payload".to_string(),
                }],
            });
        }

        let stored = state.tables.entry(self.table.to_string()).or_default();
        let offset = stored.len() as u64;
        stored.extend_from_slice(rows);

        Ok(AppendAck {
            offset,
            row_status: Vec::new(),
        })
    }

    async fn finalize(&mut self) -> Result<(), WriteError> {
        let mut state = self.state.write().unwrap();
        state.finalized_streams.push(self.stream_id.clone());

        if state.fail_finalize {
            return Err(WriteError::FinalizeFailed {
                table: self.table.to_string(),
                stream_id: self.stream_id.clone(),
                reason: "injected finalize failure".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> TableRef {
        TableRef {
            project_id: "p".to_string(),
            dataset_id: "d".to_string(),
            table: "t".to_string(),
        }
    }

    #[tokio::test]
    async fn appended_rows_are_immediately_visible() {
        let warehouse = MemoryWarehouse::new();
        let mut channel = warehouse.open_committed(&table()).await.unwrap();

        let ack = channel
            .append(&[Bytes::from_static(b"row")])
            .await
            .unwrap();
        assert_eq!(ack.offset, 0);
        assert!(ack.row_status.is_empty());

        // Visible before finalize: committed mode.
        assert_eq!(warehouse.row_count(&table()), 1);
    }

    #[tokio::test]
    async fn each_channel_gets_a_distinct_stream_id() {
        let warehouse = MemoryWarehouse::new();
        let a = warehouse.open_committed(&table()).await.unwrap();
        let b = warehouse.open_committed(&table()).await.unwrap();
        assert_ne!(a.stream_id(), b.stream_id());
    }
}
