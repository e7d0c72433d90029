//! # iw-db-sqlite Implementation
//!
//! This module implements the data mapping between the SQLite `diary_entries`
//! table and the `iw-core` domain models.

use std::str::FromStr;

use async_trait::async_trait;
use iw_core::models::{DiaryEntry, NewEntry};
use iw_core::traits::EntryRepo;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;
use uuid::Uuid;

pub struct SqliteEntryRepo {
    pool: SqlitePool,
}

impl SqliteEntryRepo {
    /// Opens the pool and brings the schema up to date.
    ///
    /// The pool is the only connection owner for the whole process; handlers
    /// borrow from it through the repo. In-memory databases are pinned to one
    /// connection that never idles out, since every new connection would see
    /// an empty database.
    pub async fn new(database_url: &str, max_connections: u32) -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool_options = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections.max(1))
        };

        let pool = pool_options.connect_with(options).await?;
        Self::from_pool(pool).await
    }

    /// Wraps an existing pool, running pending migrations first.
    pub async fn from_pool(pool: SqlitePool) -> anyhow::Result<Self> {
        sqlx::migrate!("./migrations").run(&pool).await?;
        log::debug!("diary_entries schema is up to date");
        Ok(Self { pool })
    }
}

fn row_to_entry(row: &SqliteRow) -> Result<DiaryEntry, sqlx::Error> {
    Ok(DiaryEntry {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        content: row.try_get("content")?,
        mood: row.try_get("mood")?,
        tags: row.try_get("tags")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

#[async_trait]
impl EntryRepo for SqliteEntryRepo {
    /// Single INSERT; either the whole row lands or nothing does.
    async fn create(&self, input: NewEntry) -> anyhow::Result<DiaryEntry> {
        let entry = DiaryEntry::create(input);

        sqlx::query(
            "INSERT INTO diary_entries (id, title, content, mood, tags, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(entry.id)
        .bind(&entry.title)
        .bind(&entry.content)
        .bind(&entry.mood)
        .bind(&entry.tags)
        .bind(entry.created_at)
        .bind(entry.updated_at)
        .execute(&self.pool)
        .await?;

        log::info!("created diary entry {}", entry.id);
        Ok(entry)
    }

    /// `rowid` breaks ties between entries stamped in the same instant.
    async fn find_recent(&self, limit: i64) -> anyhow::Result<Vec<DiaryEntry>> {
        let rows = sqlx::query(
            "SELECT id, title, content, mood, tags, created_at, updated_at FROM diary_entries ORDER BY created_at DESC, rowid DESC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        let entries = rows.iter().map(row_to_entry).collect::<Result<Vec<_>, _>>()?;
        log::debug!("loaded {} recent entries (limit {})", entries.len(), limit);
        Ok(entries)
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<DiaryEntry>> {
        let row = sqlx::query(
            "SELECT id, title, content, mood, tags, created_at, updated_at FROM diary_entries WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        if row.is_none() {
            log::debug!("no diary entry with id {}", id);
        }
        Ok(row.as_ref().map(row_to_entry).transpose()?)
    }
}
