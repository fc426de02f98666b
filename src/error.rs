//! Error types for the Bookstock client

use reqwest::StatusCode;
use thiserror::Error;

use crate::models::book::DraftError;

/// Transport-level failure: the request could not complete, or the backend
/// answered with a non-2xx status. Non-2xx responses are not differentiated
/// further; the status code is kept so advanced consumers can inspect it.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status: {0}")]
    Status(StatusCode),
}

/// Failure of a store mutation
#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Draft(#[from] DraftError),
}

/// Result type alias for transport operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
