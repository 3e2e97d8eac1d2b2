//! Configuration management for the CoinGecko-backed client

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;
use dotenvy::dotenv;

/// Main configuration struct for the CoinGecko client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// Base URL for the CoinGecko REST API
  pub base_url: String,

  /// Request timeout in seconds
  pub timeout_secs: u64,

  /// Optional pro-tier API key, sent as a request header when present
  pub api_key: Option<String>,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let base_url =
      env::var("COINGECKO_BASE_URL").unwrap_or_else(|_| crate::COINGECKO_BASE_URL.to_string());

    let timeout_secs = env::var("CG_TIMEOUT_SECS")
      .unwrap_or_else(|_| crate::DEFAULT_TIMEOUT_SECS.to_string())
      .parse()
      .map_err(|_| Error::Configuration("Invalid CG_TIMEOUT_SECS".to_string()))?;

    let api_key = env::var("COINGECKO_API_KEY").ok();

    Ok(Config { base_url, timeout_secs, api_key })
  }

  /// Create a config pointed at a specific base URL (for testing)
  pub fn with_base_url(base_url: impl Into<String>) -> Self {
    Config { base_url: base_url.into(), ..Config::default() }
  }
}

impl Default for Config {
  fn default() -> Self {
    Config {
      base_url: crate::COINGECKO_BASE_URL.to_string(),
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
      api_key: None,
    }
  }
}
