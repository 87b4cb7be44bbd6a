//! HTTP Todo API
//!
//! `reqwest` client for the REST API. On wasm32 `reqwest` goes through
//! the browser's `fetch`, so no timeouts beyond the browser defaults apply.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Client, Response};

use super::{ApiError, ApiResult, TodoApi};
use crate::models::{Health, NewTodo, Todo, TodoId, TodoPatch};

/// Characters kept verbatim in an id path segment (RFC 3986 unreserved)
const ID_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, Clone)]
pub struct HttpTodoApi {
    client: Client,
    base: String,
}

impl HttpTodoApi {
    /// `base` is the absolute API root, e.g. `http://localhost:8000/api`.
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base,
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/todos", self.base)
    }

    fn item_url(&self, id: &TodoId) -> String {
        let id = id.to_string();
        format!("{}/todos/{}", self.base, utf8_percent_encode(&id, ID_SEGMENT))
    }

    fn health_url(&self) -> String {
        format!("{}/health", self.base)
    }
}

fn ensure_success(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status(status.as_u16()))
    }
}

#[async_trait(?Send)]
impl TodoApi for HttpTodoApi {
    async fn list(&self) -> ApiResult<Vec<Todo>> {
        let response = self.client.get(self.collection_url()).send().await?;
        Ok(ensure_success(response)?.json().await?)
    }

    async fn get(&self, id: &TodoId) -> ApiResult<Todo> {
        let response = self.client.get(self.item_url(id)).send().await?;
        Ok(ensure_success(response)?.json().await?)
    }

    async fn create(&self, todo: &NewTodo) -> ApiResult<()> {
        let response = self
            .client
            .post(self.collection_url())
            .json(todo)
            .send()
            .await?;
        ensure_success(response)?;
        Ok(())
    }

    async fn update(&self, id: &TodoId, patch: &TodoPatch) -> ApiResult<()> {
        let response = self
            .client
            .put(self.item_url(id))
            .json(patch)
            .send()
            .await?;
        ensure_success(response)?;
        Ok(())
    }

    async fn delete(&self, id: &TodoId) -> ApiResult<()> {
        let response = self.client.delete(self.item_url(id)).send().await?;
        ensure_success(response)?;
        Ok(())
    }

    async fn health(&self) -> ApiResult<Health> {
        let response = self.client.get(self.health_url()).send().await?;
        Ok(ensure_success(response)?.json().await?)
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod server_tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn api_for(server: &MockServer) -> HttpTodoApi {
        HttpTodoApi::new(format!("{}/api", server.uri()))
    }

    #[tokio::test]
    async fn test_list_decodes_snapshot() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/todos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": 1, "title": "a", "description": null, "completed": false,
                  "created_at": "2024-05-01T08:00:00" },
                { "id": 2, "title": "b", "description": "x", "completed": true,
                  "created_at": "2024-05-01T09:00:00" }
            ])))
            .mount(&server)
            .await;

        let todos = api_for(&server).await.list().await.unwrap();
        assert_eq!(todos.len(), 2);
        assert!(todos[1].completed);
        assert_eq!(todos[1].description.as_deref(), Some("x"));
    }

    #[tokio::test]
    async fn test_delete_no_content_is_success() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/todos/1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        assert_eq!(api_for(&server).await.delete(&TodoId::Int(1)).await, Ok(()));
    }

    #[tokio::test]
    async fn test_create_ignores_response_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/todos"))
            .and(body_json(json!({ "title": "Buy milk", "description": null })))
            .respond_with(ResponseTemplate::new(201).set_body_string("not json"))
            .expect(1)
            .mount(&server)
            .await;

        let todo = NewTodo::from_input("Buy milk", "").unwrap();
        assert_eq!(api_for(&server).await.create(&todo).await, Ok(()));
    }

    #[tokio::test]
    async fn test_update_server_error_is_status() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/todos/7"))
            .and(body_json(json!({ "completed": true })))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let result = api_for(&server)
            .await
            .update(&TodoId::Int(7), &TodoPatch::completed(true))
            .await;
        assert_eq!(result, Err(ApiError::Status(500)));
    }

    #[tokio::test]
    async fn test_get_missing_item_is_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/todos/9"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "detail": "not found" })))
            .mount(&server)
            .await;

        let result = api_for(&server).await.get(&TodoId::Int(9)).await;
        assert_eq!(result, Err(ApiError::Status(404)));
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/todos"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let result = api_for(&server).await.list().await;
        assert!(matches!(result, Err(ApiError::Decode(_))), "{:?}", result);
    }

    #[tokio::test]
    async fn test_health() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "healthy", "timestamp": "2024-05-01T08:00:00"
            })))
            .mount(&server)
            .await;

        assert!(api_for(&server).await.health().await.unwrap().is_healthy());
    }
}
