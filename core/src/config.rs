//! Client configuration.

use serde::{Deserialize, Serialize};

/// Base URL of the backend in the default deployment.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3002/api";

/// Connection settings for `ApiClient`. Read-only once the client is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}
