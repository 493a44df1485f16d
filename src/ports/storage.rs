/// Storage port trait
///
/// Defines the interface for the append-only meeting record store.
/// Implementation: SQLite adapter
use crate::domain::models::{MeetingMinutes, MeetingRecord, RecordSummary};
use crate::error::Result;
use async_trait::async_trait;

/// Port trait for storage operations
#[async_trait]
pub trait StoragePort: Send + Sync {
    /// Append one meeting record and return its assigned id.
    ///
    /// `created_at` is stamped by the store at insert time. This is the only
    /// mutating operation; records are never updated or deleted.
    async fn insert_record(&self, minutes: &MeetingMinutes, raw_transcript: &str) -> Result<i64>;

    /// Read a record back by id
    async fn get_record(&self, id: i64) -> Result<Option<MeetingRecord>>;

    /// List recent records, newest first, for operator inspection
    async fn list_recent(&self, limit: u32) -> Result<Vec<RecordSummary>>;
}
