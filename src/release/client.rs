//! HTTP client shared foundation
//!
//! A thin wrapper over reqwest with a fixed timeout and User-Agent.
//! Network failures are propagated to the caller unretried; in setup mode
//! they abort the whole operation.

use crate::error::ReleaseError;
use reqwest::Client;
use std::time::Duration;

/// Default timeout for HTTP requests (30 seconds)
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent header
const DEFAULT_USER_AGENT: &str = concat!("wingetup/", env!("CARGO_PKG_VERSION"));

/// HTTP client wrapper
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, ReleaseError> {
        Self::with_config(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(timeout: Duration, user_agent: &str) -> Result<Self, ReleaseError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                ReleaseError::network("-", format!("failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Perform a GET request and check the response status
    pub async fn get(&self, url: &str) -> Result<reqwest::Response, ReleaseError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ReleaseError::network(url, e.to_string()))?;

        if !response.status().is_success() {
            return Err(ReleaseError::network(
                url,
                format!("HTTP {}", response.status()),
            ));
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_new() {
        assert!(HttpClient::new().is_ok());
    }

    #[test]
    fn test_client_with_config() {
        let client = HttpClient::with_config(Duration::from_secs(5), "wingetup-test/0.0");
        assert!(client.is_ok());
    }

    #[test]
    fn test_default_user_agent_names_tool() {
        assert!(DEFAULT_USER_AGENT.starts_with("wingetup/"));
    }
}
