//! opcheck HTTP Client
//!
//! A thin, type-safe HTTP client for the remote operation service, plus the
//! poller that waits for an operation to leave its initial status.
//!
//! # Example
//!
//! ```no_run
//! use opcheck_client::{OperationPoller, OperationsClient, PollConfig};
//! use opcheck_core::domain::operation::TaskStatus;
//! use opcheck_core::domain::state::State;
//! use opcheck_core::fake::Fake;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OperationsClient::new("http://localhost:8000");
//!     let mut fake = Fake::from_entropy();
//!
//!     let request = fake.operation_request(State::Florida)?;
//!     let created = client.create_operation(&request).await?;
//!
//!     let poller = OperationPoller::new(&client, PollConfig::default());
//!     let settled = poller.poll(&created.task_id, &TaskStatus::Pending).await?;
//!
//!     println!("Operation settled as {}", settled.status);
//!     Ok(())
//! }
//! ```

pub mod error;
mod operations;
pub mod poller;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use operations::routes;
pub use poller::{OperationPoller, PollConfig, PollError, StatusSource};

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::info;

/// HTTP client for the operation service API
///
/// Every request is logged on the way out and on the way back, and carries a
/// bearer token when one is configured.
#[derive(Debug, Clone)]
pub struct OperationsClient {
    /// Base URL of the service (e.g., "http://localhost:8000")
    base_url: String,
    /// HTTP client instance
    client: Client,
    /// Static bearer token sent with every request
    auth_token: Option<String>,
}

/// Unchecked response from the service
///
/// Returned by the `*_api` methods so callers can assert on the status code
/// and the raw body themselves.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub url: String,
    pub body: String,
}

impl ApiResponse {
    /// Decode the body into `T`
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body)
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Decode the body as untyped JSON
    pub fn value(&self) -> Result<serde_json::Value> {
        self.json()
    }
}

impl OperationsClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the operation service
    ///
    /// # Example
    /// ```
    /// use opcheck_client::OperationsClient;
    ///
    /// let client = OperationsClient::new("http://localhost:8000");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use opcheck_client::OperationsClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = OperationsClient::with_client("http://localhost:8000", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            auth_token: None,
        }
    }

    /// Send `Authorization: Bearer <token>` with every request
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Get the base URL of the service
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Transport
    // =============================================================================

    /// Attach auth, send, and log both directions
    async fn send(&self, builder: RequestBuilder) -> Result<reqwest::Response> {
        let builder = match &self.auth_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };
        let request = builder.build()?;

        info!("Make {} request to {}", request.method(), request.url());
        let response = self.client.execute(request).await?;
        info!("Got response {} from {}", response.status(), response.url());

        Ok(response)
    }

    /// Read a response without judging its status code
    async fn into_api_response(response: reqwest::Response) -> Result<ApiResponse> {
        let status = response.status();
        let url = response.url().to_string();
        let body = response.text().await?;

        Ok(ApiResponse { status, url, body })
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// This method checks the status code and returns an appropriate error if
    /// the request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}
