//! Commit writer: durable appends through a committed-mode write channel.
//!
//! Committed mode means rows are immediately durable and immediately
//! queryable. That is a deliberate choice over a buffered/streaming
//! mode: the confirmation side reads the row back and issues a
//! conditional update on it, which cannot wait out a buffering window.

use async_trait::async_trait;
use bytes::Bytes;
use intake_core::{TableRef, WriteError};
use tracing::{info, warn};

/// Per-row status embedded in an append acknowledgment. A non-zero code
/// is a hard failure for that row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowStatus {
    pub index: usize,
    pub code: i32,
    pub message: String,
}

/// Acknowledgment for one append call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppendAck {
    /// Offset of the first appended row within the stream.
    pub offset: u64,
    /// Per-row statuses; entries with a non-zero code are errors.
    pub row_status: Vec<RowStatus>,
}

/// Result of a successful commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitAck {
    pub table: String,
    pub stream_id: String,
    pub rows: usize,
}

/// A write channel scoped to one target table.
#[async_trait]
pub trait WriteChannel: Send {
    /// Stream identifier, for operator diagnosis.
    fn stream_id(&self) -> &str;

    /// Append a batch of encoded rows.
    async fn append(&mut self, rows: &[Bytes]) -> Result<AppendAck, WriteError>;

    /// Close the channel. Called exactly once per channel.
    async fn finalize(&mut self) -> Result<(), WriteError>;
}

/// Opens committed-mode write channels. The physical transport client
/// implements this; tests use `MemoryWarehouse`.
#[async_trait]
pub trait ChannelOpener: Send + Sync {
    async fn open_committed(&self, table: &TableRef) -> Result<Box<dyn WriteChannel>, WriteError>;
}

/// Appends encoded rows to a target table, one channel per commit call.
///
/// Nothing is retried internally; retry is the caller's responsibility.
pub struct CommitWriter<O> {
    opener: O,
}

impl<O: ChannelOpener> CommitWriter<O> {
    pub fn new(opener: O) -> Self {
        Self { opener }
    }

    /// Open a channel, append the batch, finalize the channel exactly
    /// once regardless of outcome, and report the first failure in
    /// order: open, append, per-row rejection, finalize.
    pub async fn commit(
        &self,
        table: &TableRef,
        rows: Vec<Bytes>,
    ) -> Result<CommitAck, WriteError> {
        let mut channel = self.opener.open_committed(table).await?;
        let stream_id = channel.stream_id().to_string();

        let append_result = channel.append(&rows).await;
        let finalize_result = channel.finalize().await;

        let ack = match append_result {
            Ok(ack) => ack,
            Err(e) => {
                if let Err(fin) = finalize_result {
                    warn!(table = %table, stream_id = %stream_id, error = %fin,
                        "finalize also failed after append error");
                }
                return Err(e);
            }
        };

        if let Some(status) = ack.row_status.iter().find(|s| s.code != 0) {
            if let Err(fin) = finalize_result {
                warn!(table = %table, stream_id = %stream_id, error = %fin,
                    "finalize also failed after row rejection");
            }
            return Err(WriteError::RowRejected {
                table: table.to_string(),
                stream_id,
                index: status.index,
                code: status.code,
                message: status.message.clone(),
            });
        }

        finalize_result?;

        info!(table = %table, stream_id = %stream_id, rows = rows.len(),
            "committed rows");
        Ok(CommitAck {
            table: table.to_string(),
            stream_id,
            rows: rows.len(),
        })
    }
}
