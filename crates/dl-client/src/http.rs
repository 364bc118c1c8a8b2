//! Thin HTTP layer shared by the lookup operations.
//!
//! Owns URL joining, the request timeout, and the mapping from reqwest
//! failures to [`LookupError`]. Status-code policy is deliberately left to
//! the callers: a 404 means different things on different endpoints.

use crate::config::ClientConfig;
use crate::lookup::LookupError;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

/// HTTP client bound to one record-service base URL.
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Builds a client from configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Joins a path onto the base URL.
    pub fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Executes a GET request, mapping transport failures only.
    ///
    /// The response is returned whatever its status; classification is the
    /// caller's responsibility.
    pub async fn get(&self, path: &str) -> Result<Response, LookupError> {
        let url = self.build_url(path);
        debug!(%url, "GET");
        self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                LookupError::Timeout(e.to_string())
            } else {
                LookupError::Transport(e.to_string())
            }
        })
    }

    /// Reads and deserializes a response body.
    pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, LookupError> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| LookupError::InvalidResponse(e.to_string()))?;

        serde_json::from_str(&text).map_err(|e| {
            LookupError::InvalidResponse(format!(
                "failed to parse response (status {}): {} - body: {}",
                status,
                e,
                text.chars().take(200).collect::<String>()
            ))
        })
    }
}
