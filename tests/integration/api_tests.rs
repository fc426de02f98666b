//! API integration tests
//!
//! These run against a live Bookstock backend.

use bookstock_client::{
    api::books::HttpBooksApi,
    models::book::BookDraft,
    store::BookStore,
};

const BASE_URL: &str = "http://127.0.0.1:8000";

fn live_store() -> BookStore<HttpBooksApi> {
    BookStore::new(HttpBooksApi::new(BASE_URL))
}

fn sample_draft() -> BookDraft {
    BookDraft {
        title: "Integration Test Book".into(),
        author: "Test Author".into(),
        price: "12.50".into(),
        qty: "2".into(),
    }
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_list_books() {
    let mut store = live_store();
    store.fetch_books().await;

    assert!(store.error().is_none(), "error: {:?}", store.error());
    assert_eq!(store.books_count(), store.books().len());
}

#[tokio::test]
#[ignore]
async fn test_create_fetch_and_delete_book() {
    let mut store = live_store();

    let created = store
        .add_book(&sample_draft())
        .await
        .expect("Failed to create book");
    assert!(store.books().iter().any(|b| b.id == created.id));

    store.fetch_book_by_id(created.id).await;
    assert!(store.error().is_none(), "error: {:?}", store.error());
    assert_eq!(store.book_loaded().map(|b| b.id), Some(created.id));

    store.delete_book(created.id).await;
    assert!(store.error().is_none(), "error: {:?}", store.error());
    assert!(store.books().iter().all(|b| b.id != created.id));
}

#[tokio::test]
#[ignore]
async fn test_update_book() {
    let mut store = live_store();

    let created = store
        .add_book(&sample_draft())
        .await
        .expect("Failed to create book");

    let mut draft = sample_draft();
    draft.title = "Integration Test Book (revised)".into();
    draft.qty = "5".into();

    let updated = store
        .update_book(created.id, &draft)
        .await
        .expect("Failed to update book");
    assert_eq!(updated.qty, 5);

    // The list entry was replaced in place
    let entry = store
        .books()
        .iter()
        .find(|b| b.id == created.id)
        .expect("updated book missing from list");
    assert_eq!(entry.title, "Integration Test Book (revised)");

    store.delete_book(created.id).await;
    assert!(store.error().is_none(), "error: {:?}", store.error());
}

#[tokio::test]
#[ignore]
async fn test_list_refresh_after_failure_is_clean() {
    let mut store = live_store();
    store.fetch_books().await;
    store.fetch_books().await;
    assert!(store.error().is_none(), "error: {:?}", store.error());
}
