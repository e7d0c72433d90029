//! # Domain Models
//!
//! The diary entry and the validated input used to create one.
//! Entries are identified by UUID v7, so identifiers sort by creation time.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::validation::{validate_entry, FieldErrors};

/// A single journal record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiaryEntry {
    pub id: Uuid,
    pub title: String,
    /// Free text; line breaks are kept verbatim.
    pub content: String,
    /// Any string is accepted; the suggestion list lives in the form only.
    pub mood: Option<String>,
    /// Comma-delimited, stored exactly as submitted (trimmed as a whole).
    pub tags: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DiaryEntry {
    /// Builds a fresh entry from validated input, stamping id and timestamps.
    pub fn create(input: NewEntry) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            title: input.title,
            content: input.content,
            mood: input.mood,
            tags: input.tags,
            created_at: now,
            updated_at: now,
        }
    }

    /// Tags split on commas and trimmed. Blank pieces are skipped.
    pub fn tag_list(&self) -> Vec<&str> {
        split_tags(self.tags.as_deref())
    }

    pub fn was_updated(&self) -> bool {
        self.updated_at != self.created_at
    }
}

pub fn split_tags(tags: Option<&str>) -> Vec<&str> {
    tags.map(|raw| {
        raw.split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .collect()
    })
    .unwrap_or_default()
}

/// Input for a new entry. Only obtainable through [`NewEntry::parse`], so
/// title and content are always non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    title: String,
    content: String,
    mood: Option<String>,
    tags: Option<String>,
}

impl NewEntry {
    /// Trims and validates raw submitted values.
    ///
    /// An empty mood collapses to `None`, any other mood is kept verbatim.
    /// Tags are stored trimmed, or `None` when blank.
    pub fn parse(
        title: &str,
        content: &str,
        mood: Option<&str>,
        tags: Option<&str>,
    ) -> std::result::Result<Self, FieldErrors> {
        let title = title.trim();
        let content = content.trim();

        let errors = validate_entry(title, content);
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            title: title.to_string(),
            content: content.to_string(),
            mood: mood.filter(|m| !m.is_empty()).map(str::to_string),
            tags: tags
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn mood(&self) -> Option<&str> {
        self.mood.as_deref()
    }

    pub fn tags(&self) -> Option<&str> {
        self.tags.as_deref()
    }
}
