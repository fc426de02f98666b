//! Bookstock book inventory client
//!
//! A client library for the Bookstock inventory backend: an in-memory book
//! store mirroring a REST JSON API, and form validation for book drafts.

pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod store;

pub use config::ClientConfig;
pub use error::{ApiError, ApiResult, StoreError, StoreResult};
pub use store::{BookStore, OpState};
