//! Async client that executes requests against the backend with reqwest.
//!
//! # Design
//! `ApiClient` pairs the sans-IO `DivinationClient` with a single
//! `reqwest::Client`. Headers, including the JSON content type, come only
//! from the `HttpRequest` the core builds. Both are
//! read-only after construction, so one `ApiClient` can be cloned and shared
//! across any number of concurrent calls. Every failure is logged once and
//! then handed back to the caller unchanged; nothing is retried.

use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::client::DivinationClient;
use crate::config::{ClientConfig, DEFAULT_BASE_URL};
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{InterpretationRequest, TodoItemRequest};

#[derive(Debug, Clone)]
pub struct ApiClient {
    core: DivinationClient,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            core: DivinationClient::new(base_url),
            http,
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        Self::new(&config.base_url)
    }

    pub fn with_default_base_url() -> Result<Self, ApiError> {
        Self::new(DEFAULT_BASE_URL)
    }

    pub fn base_url(&self) -> &str {
        self.core.base_url()
    }

    /// Ask the backend to interpret `hexagram` for the question in `matter`.
    ///
    /// Decode into `serde_json::Value` to get the body exactly as the backend
    /// sent it, or into `Interpretation` for the reference schema.
    pub async fn request_interpretation<T, S>(
        &self,
        matter: &str,
        hexagram: &str,
        lines: &[S],
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        S: AsRef<str>,
    {
        self.interpret(&InterpretationRequest::new(matter, hexagram, lines)).await
    }

    /// Create a todo item, optionally tagged with a hexagram. The item is
    /// sent as not completed and stamped with the current time.
    pub async fn create_todo_item<T: DeserializeOwned>(
        &self,
        title: &str,
        description: &str,
        hexagram: Option<&str>,
    ) -> Result<T, ApiError> {
        self.submit_todo_item(&TodoItemRequest::new(title, description, hexagram)).await
    }

    pub async fn interpret<T: DeserializeOwned>(&self, input: &InterpretationRequest) -> Result<T, ApiError> {
        self.try_interpret(input)
            .await
            .inspect_err(|e| error!(error = %e, "failed to obtain interpretation"))
    }

    pub async fn submit_todo_item<T: DeserializeOwned>(&self, input: &TodoItemRequest) -> Result<T, ApiError> {
        self.try_submit_todo_item(input)
            .await
            .inspect_err(|e| error!(error = %e, "failed to add todo item"))
    }

    async fn try_interpret<T: DeserializeOwned>(&self, input: &InterpretationRequest) -> Result<T, ApiError> {
        let req = self.core.build_interpretation(input)?;
        let response = self.execute(req).await?;
        self.core.parse_interpretation(response)
    }

    async fn try_submit_todo_item<T: DeserializeOwned>(&self, input: &TodoItemRequest) -> Result<T, ApiError> {
        let req = self.core.build_create_todo_item(input)?;
        let response = self.execute(req).await?;
        self.core.parse_create_todo_item(response)
    }

    /// Run one request over the network and capture the response as data.
    pub async fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = req.method.as_str(), url = %req.path, "sending request");
        let mut builder = match req.method {
            HttpMethod::Post => self.http.post(&req.path),
        };
        for (name, value) in &req.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.text().await?;
        debug!(status, "received response");

        Ok(HttpResponse { status, headers, body })
    }
}
