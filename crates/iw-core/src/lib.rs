//! inkwell/crates/iw-core/src/lib.rs
//!
//! The central domain logic and interface definitions for Inkwell.

pub mod error;
pub mod models;
pub mod traits;
pub mod validation;

// Re-exporting for easier access in other crates
pub use error::*;
pub use models::*;
pub use traits::*;
pub use validation::{validate_entry, FieldErrors};

/// How many entries the front page shows.
pub const RECENT_LIMIT: i64 = 10;
