//! HTTP transport layer for CoinGecko API requests

use cg_core::{Config, Error, Result};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, instrument};
use url::Url;

/// HTTP transport layer for making requests to the CoinGecko API
pub struct Transport {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl Transport {
    /// Create a new transport instance
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("cg-client/0.1.0")
            .build()
            .map_err(|e| Error::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        })
    }

    /// Make a GET request to the CoinGecko API
    ///
    /// # Arguments
    ///
    /// * `path` - Path under the API base URL, e.g. `coins/bitcoin`
    /// * `params` - Query parameters for the request
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing the deserialized response or an error
    #[instrument(skip(self, params))]
    pub async fn get<T>(&self, path: &str, params: &[(&str, String)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.build_url(path, params)?;
        debug!("Making request to: {}", url);

        let response = self.make_request(url.as_str(), path).await?;

        let text = response
            .text()
            .await
            .map_err(|e| Error::Network(format!("Failed to read response body: {}", e)))?;

        debug!("Response body length: {} bytes", text.len());

        match serde_json::from_str::<T>(&text) {
            Ok(data) => {
                debug!("Successfully parsed response for path: {}", path);
                Ok(data)
            }
            Err(e) => {
                error!("Failed to parse JSON response: {}", e);
                Err(Error::MalformedResponse(format!(
                    "Failed to parse response: {}. Response: {}",
                    e,
                    &text[..std::cmp::min(200, text.len())]
                )))
            }
        }
    }

    /// Build the full URL for an API request
    fn build_url(&self, path: &str, params: &[(&str, String)]) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/{}", self.base_url, path.trim_start_matches('/')))
            .map_err(|e| Error::Network(format!("Invalid URL: {}", e)))?;

        {
            let mut query_pairs = url.query_pairs_mut();
            for (key, value) in params {
                query_pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// Make the actual HTTP request and map failure statuses to the taxonomy
    async fn make_request(&self, url: &str, path: &str) -> Result<Response> {
        let mut request = self.client.get(url);

        if let Some(api_key) = &self.api_key {
            request = request.header("X-CG-Pro-API-Key", api_key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Network(format!("Request failed: {}", e)))?;

        let status = response.status();

        if status.is_success() {
            debug!("Request successful with status: {}", status);
            return Ok(response);
        }

        error!("Request failed with status: {}", status);
        match status.as_u16() {
            404 => Err(Error::NotFound(path.to_string())),
            429 => Err(Error::RateLimit(format!("API returned status: {}", status))),
            _ => Err(Error::Network(format!("HTTP error: {}", status))),
        }
    }

    /// Get the base URL being used
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get request timeout duration
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_transport() -> Transport {
        let config = Config::with_base_url("https://mock.coingecko.test/api/v3");
        Transport::new(&config).unwrap()
    }

    #[test]
    fn test_build_url() {
        let transport = mock_transport();
        let params = [("vs_currency", "cad".to_string()), ("days", "30d".to_string())];

        let url = transport.build_url("coins/bitcoin/market_chart", &params).unwrap();

        assert_eq!(url.path(), "/api/v3/coins/bitcoin/market_chart");
        assert!(url.query().unwrap().contains("vs_currency=cad"));
        assert!(url.query().unwrap().contains("days=30d"));
    }

    #[test]
    fn test_build_url_trims_slashes() {
        let config = Config::with_base_url("https://mock.coingecko.test/api/v3/");
        let transport = Transport::new(&config).unwrap();

        let url = transport.build_url("/coins/bitcoin", &[]).unwrap();

        assert_eq!(url.as_str(), "https://mock.coingecko.test/api/v3/coins/bitcoin");
    }

    #[test]
    fn test_transport_timeout_from_config() {
        let transport = mock_transport();
        assert_eq!(transport.timeout(), Duration::from_secs(30));
        assert_eq!(transport.base_url(), "https://mock.coingecko.test/api/v3");
    }
}
