//! # Core Traits (Ports)
//!
//! Any storage plugin must implement these traits to be used by the binary.

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{DiaryEntry, NewEntry};

/// Persistence contract for diary entries.
///
/// Entries are append-only: there is no update or delete.
#[async_trait]
pub trait EntryRepo: Send + Sync {
    /// Stores a new entry with generated id and timestamps.
    async fn create(&self, input: NewEntry) -> anyhow::Result<DiaryEntry>;

    /// Newest first, at most `limit` rows.
    async fn find_recent(&self, limit: i64) -> anyhow::Result<Vec<DiaryEntry>>;

    /// `Ok(None)` when no entry has this id.
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<DiaryEntry>>;
}
