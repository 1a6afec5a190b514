//! Client for the divination backend.
//!
//! # Overview
//! Two operations are exposed: asking the backend to interpret a hexagram and
//! creating a todo item. Both are single POST round-trips that return the
//! decoded response body or the failure that prevented it.
//!
//! # Design
//! - `DivinationClient` is stateless and sans-IO: `build_*` produces an
//!   `HttpRequest`, `parse_*` consumes an `HttpResponse`.
//! - `ApiClient` executes those requests with reqwest, logs failures through
//!   `tracing`, and returns them unchanged.
//! - The base URL is always injected; `ClientConfig::default()` points at the
//!   local backend.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod types;

pub use api::ApiClient;
pub use client::DivinationClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{Interpretation, InterpretationRequest, TodoItem, TodoItemRequest};
