//! Book form validation
//!
//! Validation is a pure function of the draft and is recomputed on every
//! call, so validity always reflects the latest values. Touched state only
//! controls which messages are displayed; it never feeds into validity.

use indexmap::{IndexMap, IndexSet};
use rust_decimal::Decimal;

use crate::models::book::{
    parse_numeric_field, Book, BookDraft, BookPayload, Field, FieldParseError,
};

/// Per-field validation messages, kept in form order. A missing key means
/// the field is currently valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    messages: IndexMap<Field, &'static str>,
}

impl ValidationErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.messages.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.messages.iter().map(|(field, message)| (*field, *message))
    }
}

fn validate_required_text(
    value: &str,
    required: &'static str,
    too_short: &'static str,
) -> Option<&'static str> {
    if value.is_empty() {
        Some(required)
    } else if value.chars().count() < 2 {
        Some(too_short)
    } else {
        None
    }
}

/// Compute validation messages for a draft.
///
/// The empty-vs-zero distinction matters for the numeric fields: a price or
/// quantity of zero is valid, an empty input is not. Quantity additionally
/// rejects fractional values, while price accepts them.
pub fn validate(draft: &BookDraft) -> ValidationErrors {
    let mut messages = IndexMap::new();

    if let Some(message) = validate_required_text(
        &draft.title,
        "Title is required",
        "Title must be at least 2 characters",
    ) {
        messages.insert(Field::Title, message);
    }

    if let Some(message) = validate_required_text(
        &draft.author,
        "Author is required",
        "Author must be at least 2 characters",
    ) {
        messages.insert(Field::Author, message);
    }

    match parse_numeric_field(&draft.price) {
        Err(FieldParseError::Empty) => {
            messages.insert(Field::Price, "Price is required");
        }
        Err(FieldParseError::Invalid) => {
            messages.insert(Field::Price, "Price must be a number");
        }
        Ok(price) if price < Decimal::ZERO => {
            messages.insert(Field::Price, "Price must be 0 or greater");
        }
        Ok(_) => {}
    }

    match parse_numeric_field(&draft.qty) {
        Err(FieldParseError::Empty) => {
            messages.insert(Field::Qty, "Quantity is required");
        }
        Err(FieldParseError::Invalid) => {
            messages.insert(Field::Qty, "Quantity must be a number");
        }
        Ok(qty) if qty < Decimal::ZERO => {
            messages.insert(Field::Qty, "Quantity must be 0 or greater");
        }
        Ok(qty) if qty.fract() != Decimal::ZERO => {
            messages.insert(Field::Qty, "Quantity must be a whole number");
        }
        Ok(_) => {}
    }

    ValidationErrors { messages }
}

/// Form state: the draft under edit, which fields the user has blurred, and
/// whether a submit was attempted.
#[derive(Debug, Clone, Default)]
pub struct BookForm {
    draft: BookDraft,
    touched: IndexSet<Field>,
    submitted: bool,
    original: Option<BookDraft>,
}

impl BookForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate from a fetched record and remember the original values
    /// for dirty detection.
    pub fn prefill(book: &Book) -> Self {
        let draft = BookDraft::from(book);
        Self {
            original: Some(draft.clone()),
            draft,
            ..Self::default()
        }
    }

    pub fn draft(&self) -> &BookDraft {
        &self.draft
    }

    /// Overwrite one field with raw input.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Title => self.draft.title = value,
            Field::Author => self.draft.author = value,
            Field::Price => self.draft.price = value,
            Field::Qty => self.draft.qty = value,
        }
    }

    /// Mark a field as blurred. One-directional: a touched field never
    /// reverts to untouched.
    pub fn touch(&mut self, field: Field) {
        self.touched.insert(field);
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    pub fn errors(&self) -> ValidationErrors {
        validate(&self.draft)
    }

    /// Overall validity, used to enable or disable submit. Independent of
    /// touched state.
    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    /// Message to display for a field, shown only once the field has been
    /// touched or a submit was attempted.
    pub fn visible_error(&self, field: Field) -> Option<&'static str> {
        if self.is_touched(field) || self.submitted {
            self.errors().get(field)
        } else {
            None
        }
    }

    /// Whether the draft differs from the originally loaded values. A form
    /// that was never prefilled always counts as changed.
    pub fn has_changes(&self) -> bool {
        match &self.original {
            Some(original) => self.draft != *original,
            None => true,
        }
    }

    /// Attempt submission. An invalid draft is silently ignored and `None`
    /// is returned; a valid one yields the coerced wire payload.
    pub fn submit(&mut self) -> Option<BookPayload> {
        self.submitted = true;
        if !self.is_valid() {
            return None;
        }
        self.draft.to_payload().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> BookDraft {
        BookDraft {
            title: "Dune".into(),
            author: "Frank Herbert".into(),
            price: "9.95".into(),
            qty: "3".into(),
        }
    }

    #[test]
    fn test_valid_draft_has_no_errors() {
        let errors = validate(&valid_draft());
        assert!(errors.is_empty());
        assert_eq!(errors.len(), 0);
    }

    #[test]
    fn test_title_rules() {
        let mut draft = valid_draft();
        draft.title = "".into();
        assert_eq!(validate(&draft).get(Field::Title), Some("Title is required"));

        draft.title = "D".into();
        assert_eq!(
            validate(&draft).get(Field::Title),
            Some("Title must be at least 2 characters")
        );

        draft.title = "It".into();
        assert_eq!(validate(&draft).get(Field::Title), None);
    }

    #[test]
    fn test_author_rules() {
        let mut draft = valid_draft();
        draft.author = "".into();
        assert_eq!(validate(&draft).get(Field::Author), Some("Author is required"));

        draft.author = "X".into();
        assert_eq!(
            validate(&draft).get(Field::Author),
            Some("Author must be at least 2 characters")
        );
    }

    #[test]
    fn test_price_zero_is_valid_but_empty_is_not() {
        let mut draft = valid_draft();
        draft.price = "0".into();
        assert_eq!(validate(&draft).get(Field::Price), None);

        draft.price = "".into();
        assert_eq!(validate(&draft).get(Field::Price), Some("Price is required"));

        draft.price = "-0.01".into();
        assert_eq!(
            validate(&draft).get(Field::Price),
            Some("Price must be 0 or greater")
        );

        draft.price = "free".into();
        assert_eq!(validate(&draft).get(Field::Price), Some("Price must be a number"));
    }

    #[test]
    fn test_qty_rules() {
        let mut draft = valid_draft();
        draft.qty = "3".into();
        assert_eq!(validate(&draft).get(Field::Qty), None);

        draft.qty = "0".into();
        assert_eq!(validate(&draft).get(Field::Qty), None);

        draft.qty = "3.5".into();
        assert_eq!(
            validate(&draft).get(Field::Qty),
            Some("Quantity must be a whole number")
        );

        draft.qty = "".into();
        assert_eq!(validate(&draft).get(Field::Qty), Some("Quantity is required"));

        draft.qty = "-1".into();
        assert_eq!(
            validate(&draft).get(Field::Qty),
            Some("Quantity must be 0 or greater")
        );
    }

    #[test]
    fn test_price_accepts_fractions_qty_does_not() {
        let mut draft = valid_draft();
        draft.price = "9.95".into();
        draft.qty = "9.95".into();
        let errors = validate(&draft);
        assert_eq!(errors.get(Field::Price), None);
        assert_eq!(errors.get(Field::Qty), Some("Quantity must be a whole number"));
    }

    #[test]
    fn test_overall_validity_requires_all_fields() {
        let mut form = BookForm::new();
        assert!(!form.is_valid());

        form.set(Field::Title, "Dune");
        form.set(Field::Author, "Frank Herbert");
        form.set(Field::Price, "9.95");
        assert!(!form.is_valid());

        form.set(Field::Qty, "3");
        assert!(form.is_valid());
    }

    #[test]
    fn test_touched_gates_display_not_validity() {
        let mut form = BookForm::new();
        // Invalid, but untouched: nothing displayed, validity still false
        assert_eq!(form.visible_error(Field::Title), None);
        assert!(!form.is_valid());

        form.touch(Field::Title);
        assert_eq!(form.visible_error(Field::Title), Some("Title is required"));
        // Other untouched fields still show nothing
        assert_eq!(form.visible_error(Field::Author), None);
    }

    #[test]
    fn test_touch_is_one_directional() {
        let mut form = BookForm::new();
        form.touch(Field::Price);
        form.set(Field::Price, "9.95");
        assert!(form.is_touched(Field::Price));
        assert_eq!(form.visible_error(Field::Price), None);

        form.set(Field::Price, "");
        assert!(form.is_touched(Field::Price));
        assert_eq!(form.visible_error(Field::Price), Some("Price is required"));
    }

    #[test]
    fn test_submit_reveals_all_errors() {
        let mut form = BookForm::new();
        assert_eq!(form.submit(), None);
        assert_eq!(form.visible_error(Field::Title), Some("Title is required"));
        assert_eq!(form.visible_error(Field::Qty), Some("Quantity is required"));
    }

    #[test]
    fn test_submit_yields_payload_when_valid() {
        let mut form = BookForm::new();
        form.set(Field::Title, "Dune");
        form.set(Field::Author, "Frank Herbert");
        form.set(Field::Price, "9.95");
        form.set(Field::Qty, "3");

        let payload = form.submit().unwrap();
        assert_eq!(payload.title, "Dune");
        assert_eq!(payload.qty, 3);
    }

    #[test]
    fn test_has_changes_against_prefilled_record() {
        let book = Book {
            id: 3,
            title: "Dune".into(),
            author: "Frank Herbert".into(),
            price: rust_decimal::Decimal::new(995, 2),
            qty: 3,
        };
        let mut form = BookForm::prefill(&book);
        assert!(!form.has_changes());
        assert!(form.is_valid());

        form.set(Field::Qty, "4");
        assert!(form.has_changes());

        form.set(Field::Qty, "3");
        assert!(!form.has_changes());

        // A fresh form always counts as changed
        assert!(BookForm::new().has_changes());
    }
}
