//! # Entry Validation
//!
//! Field-scoped checks run once on submitted form data before anything is
//! persisted.

use std::collections::BTreeMap;
use std::fmt;

pub const TITLE: &str = "title";
pub const CONTENT: &str = "content";

/// Field name → human-readable message. Empty means the input is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Checks the required fields. Callers pass already-trimmed values.
pub fn validate_entry(title: &str, content: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if title.is_empty() {
        errors.insert(TITLE, "Title is required");
    }
    if content.is_empty() {
        errors.insert(CONTENT, "Content is required");
    }

    errors
}
