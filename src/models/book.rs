//! Book model, form draft and numeric field parsing

use std::fmt;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Book record persisted by the backend; `id` is server-assigned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub price: Decimal,
    pub qty: i64,
}

/// Wire shape for create and update request bodies
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookPayload {
    pub title: String,
    pub author: String,
    pub price: Decimal,
    pub qty: i64,
}

/// Form field identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Author,
    Price,
    Qty,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Author => "author",
            Field::Price => "price",
            Field::Qty => "qty",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// In-progress form state for a book.
///
/// Numeric fields hold the raw user input and may transiently be empty or
/// malformed; validation and `to_payload` decide what is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub price: String,
    pub qty: String,
}

impl From<&Book> for BookDraft {
    /// Pre-populate a draft from a fetched record, for the edit workflow.
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            price: book.price.to_string(),
            qty: book.qty.to_string(),
        }
    }
}

/// Why a raw numeric field could not be interpreted.
///
/// `Empty` is reported distinctly from `Invalid` so that "empty" and "zero"
/// stay different answers downstream.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldParseError {
    #[error("value is empty")]
    Empty,
    #[error("value is not a number")]
    Invalid,
}

/// A draft field that cannot be coerced into the wire payload
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid {field} value: {source}")]
pub struct DraftError {
    pub field: Field,
    #[source]
    pub source: FieldParseError,
}

/// Total parser for raw numeric form fields. Surrounding whitespace is
/// ignored; an all-whitespace input counts as empty.
pub fn parse_numeric_field(raw: &str) -> Result<Decimal, FieldParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldParseError::Empty);
    }
    trimmed
        .parse::<Decimal>()
        .map_err(|_| FieldParseError::Invalid)
}

impl BookDraft {
    /// Coerce the draft into the wire payload, parsing the numeric fields.
    ///
    /// A fractional quantity is rejected as `Invalid`: the wire type for
    /// `qty` is an integer and truncating would silently change the value.
    pub fn to_payload(&self) -> Result<BookPayload, DraftError> {
        let price = parse_numeric_field(&self.price).map_err(|source| DraftError {
            field: Field::Price,
            source,
        })?;

        let qty = parse_numeric_field(&self.qty).map_err(|source| DraftError {
            field: Field::Qty,
            source,
        })?;
        let qty = if qty.fract() == Decimal::ZERO {
            qty.to_i64()
        } else {
            None
        }
        .ok_or(DraftError {
            field: Field::Qty,
            source: FieldParseError::Invalid,
        })?;

        Ok(BookPayload {
            title: self.title.clone(),
            author: self.author.clone(),
            price,
            qty,
        })
    }
}
