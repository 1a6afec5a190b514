//! Request payloads and typed response views for the divination API.
//!
//! # Design
//! Request types serialize to exactly the fields the backend expects and carry
//! no validation; values are passed through verbatim. The response types are
//! optional typed views: the client decodes into any `DeserializeOwned`, and
//! `serde_json::Value` keeps the backend body untouched.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /divination/interpret`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InterpretationRequest {
    pub matter: String,
    pub hexagram: String,
    pub lines: Vec<String>,
}

impl InterpretationRequest {
    pub fn new<S: AsRef<str>>(matter: &str, hexagram: &str, lines: &[S]) -> Self {
        Self {
            matter: matter.to_string(),
            hexagram: hexagram.to_string(),
            lines: lines.iter().map(|line| line.as_ref().to_string()).collect(),
        }
    }
}

/// Body of `POST /todos`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItemRequest {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hexagram: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl TodoItemRequest {
    /// Build a fresh, not-yet-completed item stamped with the current time.
    pub fn new(title: &str, description: &str, hexagram: Option<&str>) -> Self {
        Self::with_timestamp(title, description, hexagram, Utc::now())
    }

    pub fn with_timestamp(
        title: &str,
        description: &str,
        hexagram: Option<&str>,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            hexagram: hexagram.map(str::to_string),
            completed: false,
            created_at: format_timestamp(at),
        }
    }
}

/// RFC 3339 in UTC with millisecond precision, e.g. `2025-01-01T08:30:00.123Z`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Interpretation as returned by the reference backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Interpretation {
    pub interpretation: String,
    pub advice: String,
}

/// Stored todo item as returned by the reference backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItem {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub hexagram: Option<String>,
    pub completed: bool,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}
