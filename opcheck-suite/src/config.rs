//! Suite configuration
//!
//! Settings for reaching the operation service and for polling it. Values
//! come from CLI flags or their `OPCHECK_*` environment variables.

use std::time::Duration;

use anyhow::Context;
use opcheck_client::{OperationsClient, PollConfig};

/// Suite configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the operation service (e.g., "http://localhost:8000")
    pub base_url: String,

    /// Per-request timeout
    pub timeout: Duration,

    /// Static bearer token sent with every request
    pub auth_token: Option<String>,

    /// Retry budget used by polling scenarios
    pub poll: PollConfig,

    /// Seed for the fake data generator; random when unset
    pub seed: Option<u64>,
}

impl Config {
    /// Creates a new configuration with defaults
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            timeout: Duration::from_secs(100),
            auth_token: None,
            poll: PollConfig::default(),
            seed: None,
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.base_url.is_empty() {
            anyhow::bail!("base_url cannot be empty");
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!("base_url must start with http:// or https://");
        }

        if self.timeout.is_zero() {
            anyhow::bail!("timeout must be greater than 0");
        }

        if self.poll.max_retries == 0 {
            anyhow::bail!("max_retries must be greater than 0");
        }

        Ok(())
    }

    /// Builds the service client described by this configuration
    pub fn build_client(&self) -> anyhow::Result<OperationsClient> {
        let http_client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .context("Failed to build HTTP client")?;

        let client = OperationsClient::with_client(&self.base_url, http_client);
        Ok(match &self.auth_token {
            Some(token) => client.with_auth_token(token),
            None => client,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new("http://localhost:8000".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.timeout, Duration::from_secs(100));
        assert_eq!(config.poll.max_retries, 10);
        assert_eq!(config.poll.retry_delay, Duration::from_secs(3));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();

        config.base_url = "localhost:8000".to_string();
        assert!(config.validate().is_err());

        config.base_url = "https://ops.example.com".to_string();
        assert!(config.validate().is_ok());

        config.timeout = Duration::ZERO;
        assert!(config.validate().is_err());
        config.timeout = Duration::from_secs(5);

        config.poll.max_retries = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_build_client_trims_base_url() {
        let config = Config::new("http://localhost:8000/".to_string());
        let client = config.build_client().unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }
}
