//! Intake Write - Row Encoding and Committed Writes
//!
//! Builds typed rows from validated survey responses, serializes them
//! against the table's record descriptor, and appends them through a
//! committed-mode write channel. The physical transport lives behind the
//! `ChannelOpener`/`WriteChannel` traits; `MemoryWarehouse` is the
//! in-memory implementation used in tests.

pub mod encode;
pub mod memory;
pub mod row;
pub mod writer;

pub use encode::encode_row;
pub use memory::MemoryWarehouse;
pub use row::{build_row, build_row_at};
pub use writer::{AppendAck, ChannelOpener, CommitAck, CommitWriter, RowStatus, WriteChannel};
