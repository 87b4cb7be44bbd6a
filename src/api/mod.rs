//! Todo API Client
//!
//! The backing REST API seen from the browser, behind a trait so the
//! controller can run against an in-memory stand-in.

mod http;

use std::fmt;

use async_trait::async_trait;

use crate::models::{Health, NewTodo, Todo, TodoId, TodoPatch};

pub use http::HttpTodoApi;

/// Result type for API calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure of a single API call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Request never produced a response
    Transport(String),
    /// Response carried a non-success status
    Status(u16),
    /// Response body was not the expected JSON
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "Transport error: {}", msg),
            ApiError::Status(code) => write!(f, "Unexpected status: {}", code),
            ApiError::Decode(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            ApiError::Status(status.as_u16())
        } else if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

/// Operations of the todo REST API.
///
/// Futures are `?Send`: in the browser they run on the single UI thread.
#[async_trait(?Send)]
pub trait TodoApi {
    /// `GET /todos`: full, unfiltered snapshot
    async fn list(&self) -> ApiResult<Vec<Todo>>;

    /// `GET /todos/{id}`
    async fn get(&self, id: &TodoId) -> ApiResult<Todo>;

    /// `POST /todos`
    async fn create(&self, todo: &NewTodo) -> ApiResult<()>;

    /// `PUT /todos/{id}` with only the fields present in `patch`
    async fn update(&self, id: &TodoId, patch: &TodoPatch) -> ApiResult<()>;

    /// `DELETE /todos/{id}`; any 2xx including 204 is success
    async fn delete(&self, id: &TodoId) -> ApiResult<()>;

    /// `GET /health`
    async fn health(&self) -> ApiResult<Health>;
}
