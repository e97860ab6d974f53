//! Jobtrack HTTP Client
//!
//! A small, type-safe HTTP client for the job tracker API.
//!
//! Every call is a single request/response round trip: no retries, no
//! backoff, no client-side timeout. Non-success responses are turned into
//! [`ClientError::ApiError`] with the response body attached.
//!
//! # Example
//!
//! ```no_run
//! use jobtrack_client::TrackerClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = TrackerClient::new("http://localhost:8000");
//!
//!     for job in client.list_jobs().await? {
//!         println!("{} at {}", job.position, job.company);
//!     }
//!     Ok(())
//! }
//! ```

pub mod collection;
pub mod error;
mod jobs;

// Re-export commonly used types
pub use collection::RemoteCollection;
pub use error::{ClientError, Result};

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{error, warn};

/// HTTP client for the job tracker API
#[derive(Debug, Clone)]
pub struct TrackerClient {
    /// Base URL of the API (e.g., "http://localhost:8000")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl TrackerClient {
    /// Create a new tracker client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the tracker API (e.g., "http://localhost:8000")
    ///
    /// # Example
    /// ```
    /// use jobtrack_client::TrackerClient;
    ///
    /// let client = TrackerClient::new("http://localhost:8000");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new tracker client with a custom HTTP client
    ///
    /// This allows you to configure proxies, TLS settings, etc.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Check the status and deserialize a JSON body
    ///
    /// The body is read as text first so that both failure kinds (bad
    /// status, malformed JSON) carry it for diagnostics.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), body = %body, "API request failed");
            return Err(ClientError::api_error(status.as_u16(), body));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            warn!(error = %e, body = %body, "Malformed response body");
            ClientError::ParseError {
                message: e.to_string(),
                body,
            }
        })
    }

    /// Handle a response whose body is not needed (e.g., DELETE)
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), body = %body, "API request failed");
            return Err(ClientError::api_error(status.as_u16(), body));
        }

        Ok(())
    }
}
