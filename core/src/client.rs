//! Stateless HTTP request builder and response parser for the divination API.
//!
//! # Design
//! `DivinationClient` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The caller executes the actual HTTP round-trip.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{InterpretationRequest, TodoItemRequest};

pub const INTERPRET_PATH: &str = "/divination/interpret";
pub const TODOS_PATH: &str = "/todos";

/// Synchronous, stateless client for the divination API.
#[derive(Debug, Clone)]
pub struct DivinationClient {
    base_url: String,
}

impl DivinationClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_interpretation(&self, input: &InterpretationRequest) -> Result<HttpRequest, ApiError> {
        self.post_json(INTERPRET_PATH, input)
    }

    pub fn build_create_todo_item(&self, input: &TodoItemRequest) -> Result<HttpRequest, ApiError> {
        self.post_json(TODOS_PATH, input)
    }

    pub fn parse_interpretation<T: DeserializeOwned>(&self, response: HttpResponse) -> Result<T, ApiError> {
        decode(response)
    }

    pub fn parse_create_todo_item<T: DeserializeOwned>(&self, response: HttpResponse) -> Result<T, ApiError> {
        decode(response)
    }

    fn post_json<B: Serialize>(&self, path: &str, input: &B) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}{path}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}

/// Reject non-2xx statuses, then decode the body as-is.
fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    if !response.is_success() {
        return Err(ApiError::Http {
            status: response.status,
            body: response.body,
        });
    }
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}
