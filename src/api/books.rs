//! Books endpoint client
//!
//! The REST contract, JSON bodies throughout:
//!
//! | Operation | Method | Path                 |
//! |-----------|--------|----------------------|
//! | list      | GET    | `/books`             |
//! | get one   | GET    | `/books/{id}`        |
//! | create    | POST   | `/books`             |
//! | update    | PUT    | `/books/{id}/edit`   |
//! | delete    | DELETE | `/books/{id}/delete` |

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use reqwest::{Client, Response};

use crate::{
    error::{ApiError, ApiResult},
    models::book::{Book, BookPayload},
};

/// Backend operations for the books resource.
///
/// The store is generic over this trait so its state transitions can be
/// exercised against a mocked backend.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BooksApi: Send + Sync {
    /// Fetch the full collection
    async fn list(&self) -> ApiResult<Vec<Book>>;
    /// Fetch a single record
    async fn get(&self, id: i64) -> ApiResult<Book>;
    /// Create a record; the response carries the assigned id
    async fn create(&self, payload: &BookPayload) -> ApiResult<Book>;
    /// Replace the record with the given id
    async fn update(&self, id: i64, payload: &BookPayload) -> ApiResult<Book>;
    /// Delete the record with the given id; any response body is ignored
    async fn delete(&self, id: i64) -> ApiResult<()>;
}

/// `BooksApi` implementation backed by `reqwest`.
///
/// No local timeout is set; the transport's defaults apply. Requests cannot
/// be cancelled once issued.
#[derive(Debug, Clone)]
pub struct HttpBooksApi {
    client: Client,
    base_url: String,
}

impl HttpBooksApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Any non-2xx status is a uniform failure, regardless of response payload.
fn check_status(response: Response) -> ApiResult<Response> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status(response.status()))
    }
}

#[async_trait]
impl BooksApi for HttpBooksApi {
    async fn list(&self) -> ApiResult<Vec<Book>> {
        let response = self.client.get(self.url("/books")).send().await?;
        Ok(check_status(response)?.json().await?)
    }

    async fn get(&self, id: i64) -> ApiResult<Book> {
        let response = self
            .client
            .get(self.url(&format!("/books/{id}")))
            .send()
            .await?;
        Ok(check_status(response)?.json().await?)
    }

    async fn create(&self, payload: &BookPayload) -> ApiResult<Book> {
        let response = self
            .client
            .post(self.url("/books"))
            .json(payload)
            .send()
            .await?;
        Ok(check_status(response)?.json().await?)
    }

    async fn update(&self, id: i64, payload: &BookPayload) -> ApiResult<Book> {
        let response = self
            .client
            .put(self.url(&format!("/books/{id}/edit")))
            .json(payload)
            .send()
            .await?;
        Ok(check_status(response)?.json().await?)
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        let response = self
            .client
            .delete(self.url(&format!("/books/{id}/delete")))
            .send()
            .await?;
        check_status(response)?;
        Ok(())
    }
}
