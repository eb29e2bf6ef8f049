//! Shared HTTP client wrapper
//!
//! Thin wrapper around `reqwest::blocking::Client` that centralizes
//! USER_AGENT and timeout configuration.

use crate::config::network::{CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS, USER_AGENT};
use crate::error::Result;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Shared HTTP client with standard configuration
pub struct HttpClient {
    inner: reqwest::blocking::Client,
}

impl HttpClient {
    /// Create a new client with default iconport settings
    pub fn new() -> Result<Self> {
        let inner = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(READ_TIMEOUT_SECS))
            .build()?;
        Ok(Self { inner })
    }

    /// GET a URL and deserialize the JSON response
    ///
    /// Non-2xx statuses (including 404 for unknown icons) become errors.
    pub fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let resp = self.inner.get(url).send()?.error_for_status()?;
        let data = resp.json::<T>()?;
        Ok(data)
    }

    /// GET a URL with query parameters and deserialize the JSON response
    pub fn get_json_query<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let resp = self
            .inner
            .get(url)
            .query(params)
            .send()?
            .error_for_status()?;
        let data = resp.json::<T>()?;
        Ok(data)
    }

    /// GET a URL and return the response body as text
    pub fn get_text(&self, url: &str) -> Result<String> {
        let resp = self.inner.get(url).send()?.error_for_status()?;
        let text = resp.text()?;
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = HttpClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_get_json_invalid_url() {
        let client = HttpClient::new().unwrap();
        let result: Result<serde_json::Value> = client.get_json("http://invalid.invalid.invalid");
        assert!(result.is_err());
    }

    #[test]
    fn test_get_text_invalid_url() {
        let client = HttpClient::new().unwrap();
        let result = client.get_text("http://invalid.invalid.invalid");
        assert!(result.is_err());
    }
}
