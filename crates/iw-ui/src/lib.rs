//! # iw-ui
//!
//! Askama templates for every page Inkwell serves.

pub mod views;

use askama::Template;
use iw_core::validation::FieldErrors;

pub use views::{EntryCard, EntryDetail, MoodOption};

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub page_title: &'a str,
    pub description: &'a str,
    pub cards: &'a [EntryCard],
}

#[derive(Template)]
#[template(path = "entry.html")]
pub struct EntryTemplate<'a> {
    pub page_title: &'a str,
    pub description: &'a str,
    pub entry: &'a EntryDetail,
}

/// The create form, blank or re-rendered with the last submission.
#[derive(Template)]
#[template(path = "new_entry.html")]
pub struct NewEntryTemplate<'a> {
    pub page_title: &'a str,
    pub description: &'a str,
    pub title: &'a str,
    pub content: &'a str,
    pub tags: &'a str,
    pub moods: &'a [MoodOption],
    pub errors: &'a FieldErrors,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate<'a> {
    pub page_title: &'a str,
    pub description: &'a str,
    pub status: u16,
    pub message: &'a str,
}
