//! Typed form payloads.

use iw_core::models::NewEntry;
use iw_core::validation::FieldErrors;
use serde::Deserialize;

/// Raw body of `POST /entries/new`. Missing text fields decode as empty
/// strings so the validator, not the extractor, reports them.
#[derive(Debug, Default, Deserialize)]
pub struct NewEntryForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub mood: Option<String>,
    pub tags: Option<String>,
}

impl NewEntryForm {
    pub fn parse(&self) -> Result<NewEntry, FieldErrors> {
        NewEntry::parse(
            &self.title,
            &self.content,
            self.mood.as_deref(),
            self.tags.as_deref(),
        )
    }
}
