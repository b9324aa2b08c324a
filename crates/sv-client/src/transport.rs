//! Shared HTTP transport for the API clients

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use sv_core::{Error, Result};
use tracing::{debug, error, instrument};
use url::Url;

/// Thin wrapper around the HTTP client.
///
/// Performs a single GET per call; a failed request is reported as an
/// error and never retried.
pub struct Transport {
    client: Client,
    timeout: Duration,
}

impl Transport {
    /// Create a new transport instance
    pub fn new(timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent("sv-client/0.1.0")
            .build()
            .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, timeout: Duration::from_secs(timeout_secs) })
    }

    /// Make a GET request and deserialize the JSON response body
    #[instrument(skip(self, url), fields(host = url.host_str().unwrap_or("")))]
    pub async fn get_json<T>(&self, url: Url) -> Result<T>
    where
        T: DeserializeOwned,
    {
        debug!("Making request to: {}", url);

        let response = self.make_request(url).await?;
        let text = response
            .text()
            .await
            .map_err(|e| Error::Http(format!("Failed to read response body: {}", e)))?;

        debug!("Response body length: {} bytes", text.len());

        match serde_json::from_str::<T>(&text) {
            Ok(data) => Ok(data),
            Err(e) => {
                error!("Failed to parse JSON response: {}", e);
                // Truncate on char boundaries; a byte offset could split a
                // multibyte character and panic
                let preview: String = text.chars().take(200).collect();
                Err(Error::Parse(format!("Failed to parse response: {}. Response: {}", e, preview)))
            }
        }
    }

    /// Make the actual HTTP request
    async fn make_request(&self, url: Url) -> Result<Response> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Http(format!("Request failed: {}", e)))?;

        let status = response.status();

        if status.is_success() {
            debug!("Request successful with status: {}", status);
            Ok(response)
        } else {
            error!("Request failed with status: {}", status);
            Err(Error::Http(format!("HTTP error: {}", status)))
        }
    }

    /// Get request timeout duration
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
