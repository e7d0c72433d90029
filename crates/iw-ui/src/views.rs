//! Display-ready projections of diary entries.
//!
//! Templates only print fields; every string transformation (truncation,
//! tag splitting, date formatting) happens here so it can be tested.

use chrono::{DateTime, Utc};
use iw_core::models::DiaryEntry;
use uuid::Uuid;

/// Characters of content shown on a list card.
pub const EXCERPT_LEN: usize = 200;
/// Characters of content used for the detail page's meta description.
pub const DESCRIPTION_LEN: usize = 150;

/// Suggested moods offered by the entry form.
pub const MOODS: [&str; 9] = [
    "😊 Happy",
    "😢 Sad",
    "😤 Frustrated",
    "😌 Peaceful",
    "🤔 Thoughtful",
    "😴 Tired",
    "🎉 Excited",
    "😰 Anxious",
    "❤️ Grateful",
];

/// Cuts `text` to `max` characters, appending `...` only when something was cut.
pub fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

/// First `max` characters, no suffix.
pub fn prefix(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// "Monday, January 1, 2024"
pub fn long_date(at: &DateTime<Utc>) -> String {
    at.format("%A, %B %-d, %Y").to_string()
}

/// "Monday, January 1, 2024 at 03:04 PM"
pub fn long_date_time(at: &DateTime<Utc>) -> String {
    at.format("%A, %B %-d, %Y at %I:%M %p").to_string()
}

/// "Jan 1, 03:04 PM"
pub fn short_date_time(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %I:%M %p").to_string()
}

fn owned_tags(entry: &DiaryEntry) -> Vec<String> {
    entry.tag_list().into_iter().map(str::to_string).collect()
}

/// Summary shown on the front page.
#[derive(Debug, Clone)]
pub struct EntryCard {
    pub id: Uuid,
    pub title: String,
    pub mood: Option<String>,
    pub date: String,
    pub excerpt: String,
    pub tags: Vec<String>,
}

impl From<&DiaryEntry> for EntryCard {
    fn from(entry: &DiaryEntry) -> Self {
        Self {
            id: entry.id,
            title: entry.title.clone(),
            mood: entry.mood.clone(),
            date: long_date(&entry.created_at),
            excerpt: truncate(&entry.content, EXCERPT_LEN),
            tags: owned_tags(entry),
        }
    }
}

/// Everything the detail page prints.
#[derive(Debug, Clone)]
pub struct EntryDetail {
    pub title: String,
    pub mood: Option<String>,
    pub created: String,
    /// Only set when the entry changed after creation.
    pub updated: Option<String>,
    pub content: String,
    pub tags: Vec<String>,
}

impl From<&DiaryEntry> for EntryDetail {
    fn from(entry: &DiaryEntry) -> Self {
        Self {
            title: entry.title.clone(),
            mood: entry.mood.clone(),
            created: long_date_time(&entry.created_at),
            updated: entry
                .was_updated()
                .then(|| short_date_time(&entry.updated_at)),
            content: entry.content.clone(),
            tags: owned_tags(entry),
        }
    }
}

/// One `<option>` of the mood select.
#[derive(Debug, Clone)]
pub struct MoodOption {
    pub label: &'static str,
    pub selected: bool,
}

pub fn mood_options(selected: Option<&str>) -> Vec<MoodOption> {
    MOODS
        .iter()
        .map(|&label| MoodOption {
            label,
            selected: selected == Some(label),
        })
        .collect()
}
