//! Data models for Bookstock

pub mod book;

// Re-export commonly used types
pub use book::{parse_numeric_field, Book, BookDraft, BookPayload, DraftError, Field, FieldParseError};
