//! In-memory book store
//!
//! Mirrors server-confirmed state only: the local list changes when the
//! backend acknowledges a mutation, never before. Error messages surfaced
//! through the store are fixed per-operation strings; the underlying
//! transport error goes to the tracing diagnostics channel instead.

use tracing::error;

use crate::{
    api::books::BooksApi,
    error::{StoreError, StoreResult},
    models::book::{Book, BookDraft},
};

const FETCH_BOOKS_FAILED: &str = "Failed to fetch books";
const FETCH_BOOK_FAILED: &str = "Failed to fetch book";
const ADD_BOOK_FAILED: &str = "Failed to add book";
const UPDATE_BOOK_FAILED: &str = "Failed to update book";
const DELETE_BOOK_FAILED: &str = "Failed to delete book";

/// Lifecycle of one asynchronous operation family.
///
/// Entering `InFlight` clears any previous error, so every attempt starts
/// from a clean slate. `Succeeded` carries no payload: results land in the
/// store's list and loaded-record slots, which stay the single source of
/// truth.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OpState {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed(String),
}

impl OpState {
    pub fn is_loading(&self) -> bool {
        matches!(self, OpState::InFlight)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            OpState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Client-side store for the books collection.
///
/// Construct one instance per active session or view tree and inject it
/// where needed; it is deliberately not a process-wide singleton. Operations
/// take `&mut self`, so two operations on the same store cannot overlap.
///
/// Two operation-state slots are kept: `add` has its own so that a create in
/// progress is visible independently, while fetch-all, fetch-by-id, update
/// and delete share the `browse` slot.
pub struct BookStore<A: BooksApi> {
    api: A,
    books: Vec<Book>,
    book_loaded: Option<Book>,
    browse: OpState,
    add: OpState,
}

impl<A: BooksApi> BookStore<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            books: Vec::new(),
            book_loaded: None,
            browse: OpState::Idle,
            add: OpState::Idle,
        }
    }

    // Accessors

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn books_count(&self) -> usize {
        self.books.len()
    }

    /// Record loaded by `fetch_book_by_id` for the edit workflow; never
    /// merged into the list.
    pub fn book_loaded(&self) -> Option<&Book> {
        self.book_loaded.as_ref()
    }

    pub fn browse_state(&self) -> &OpState {
        &self.browse
    }

    pub fn add_state(&self) -> &OpState {
        &self.add
    }

    pub fn is_loading(&self) -> bool {
        self.browse.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.browse.error()
    }

    pub fn is_adding(&self) -> bool {
        self.add.is_loading()
    }

    pub fn add_error(&self) -> Option<&str> {
        self.add.error()
    }

    // Direct setters, an escape hatch for advanced consumers

    pub fn set_books(&mut self, books: Vec<Book>) {
        self.books = books;
    }

    pub fn set_book_loaded(&mut self, book: Option<Book>) {
        self.book_loaded = book;
    }

    pub fn set_error(&mut self, message: Option<String>) {
        self.browse = match message {
            Some(message) => OpState::Failed(message),
            None => OpState::Idle,
        };
    }

    pub fn set_add_error(&mut self, message: Option<String>) {
        self.add = match message {
            Some(message) => OpState::Failed(message),
            None => OpState::Idle,
        };
    }

    // Operations

    /// Fetch the full collection and replace the local list wholesale; the
    /// server is authoritative and an empty response is a valid "no books"
    /// result. On failure the existing list is left untouched. Safe to call
    /// again at any time, e.g. for a manual refresh.
    pub async fn fetch_books(&mut self) {
        self.browse = OpState::InFlight;
        match self.api.list().await {
            Ok(books) => {
                self.books = books;
                self.browse = OpState::Succeeded;
            }
            Err(err) => {
                error!("error fetching books: {err}");
                self.browse = OpState::Failed(FETCH_BOOKS_FAILED.to_string());
            }
        }
    }

    /// Fetch one record into the loaded-record slot. On failure the slot
    /// keeps its previous value; the edit screen routes away on its own when
    /// no id is supplied, so stale-on-error is acceptable.
    pub async fn fetch_book_by_id(&mut self, id: i64) {
        self.browse = OpState::InFlight;
        match self.api.get(id).await {
            Ok(book) => {
                self.book_loaded = Some(book);
                self.browse = OpState::Succeeded;
            }
            Err(err) => {
                error!("error fetching book {id}: {err}");
                self.browse = OpState::Failed(FETCH_BOOK_FAILED.to_string());
            }
        }
    }

    /// Create a book from the draft, coercing its numeric fields. The
    /// server-returned record, id included, is appended to the local list
    /// once confirmed. The failure is returned as well as recorded, so the
    /// caller can decide not to navigate away.
    pub async fn add_book(&mut self, draft: &BookDraft) -> StoreResult<Book> {
        self.add = OpState::InFlight;
        let result = match draft.to_payload() {
            Ok(payload) => self.api.create(&payload).await.map_err(StoreError::from),
            Err(err) => Err(err.into()),
        };
        match result {
            Ok(book) => {
                self.books.push(book.clone());
                self.add = OpState::Succeeded;
                Ok(book)
            }
            Err(err) => {
                error!("error adding book: {err}");
                self.add = OpState::Failed(ADD_BOOK_FAILED.to_string());
                Err(err)
            }
        }
    }

    /// Update the record with the given id. On success the matching list
    /// entry is replaced outright with the server's representation, not
    /// merged; other entries are untouched. Failures are returned as well as
    /// recorded.
    pub async fn update_book(&mut self, id: i64, draft: &BookDraft) -> StoreResult<Book> {
        self.browse = OpState::InFlight;
        let result = match draft.to_payload() {
            Ok(payload) => self.api.update(id, &payload).await.map_err(StoreError::from),
            Err(err) => Err(err.into()),
        };
        match result {
            Ok(book) => {
                if let Some(entry) = self.books.iter_mut().find(|entry| entry.id == id) {
                    *entry = book.clone();
                }
                self.browse = OpState::Succeeded;
                Ok(book)
            }
            Err(err) => {
                error!("error updating book {id}: {err}");
                self.browse = OpState::Failed(UPDATE_BOOK_FAILED.to_string());
                Err(err)
            }
        }
    }

    /// Delete the record with the given id. The local entry is removed only
    /// after the backend confirms; there is no optimistic removal, so on
    /// failure the list still shows the entry.
    pub async fn delete_book(&mut self, id: i64) {
        self.browse = OpState::InFlight;
        match self.api.delete(id).await {
            Ok(()) => {
                self.books.retain(|book| book.id != id);
                self.browse = OpState::Succeeded;
            }
            Err(err) => {
                error!("error deleting book {id}: {err}");
                self.browse = OpState::Failed(DELETE_BOOK_FAILED.to_string());
            }
        }
    }
}
