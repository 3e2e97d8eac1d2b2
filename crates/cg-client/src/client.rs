/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! The main client facade over the CoinGecko endpoints.

use crate::endpoints::coins::CoinsEndpoints;
use crate::transport::Transport;
use cg_core::{Config, Result};
use std::sync::Arc;

/// Main CoinGecko API client
///
/// Provides access to the CoinGecko endpoints the coin detail view consumes
/// through organized endpoint modules. Handles transport concerns (timeout,
/// optional pro API key header) automatically.
///
/// # Examples
///
/// ```ignore
/// use cg_client::CoinGeckoClient;
/// use cg_core::Config;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = Config::from_env()?;
///     let client = CoinGeckoClient::new(config)?;
///
///     // Get the coin detail payload
///     let coin = client.coins().detail("bitcoin").await?;
///     println!("{} market cap rank: {}", coin.name, coin.market_cap_rank);
///
///     // Get a priced history window
///     let chart = client
///         .coins()
///         .market_chart("bitcoin", Default::default(), Default::default())
///         .await?;
///     println!("{} samples", chart.prices.len());
///
///     Ok(())
/// }
/// ```
pub struct CoinGeckoClient {
  transport: Arc<Transport>,
}

impl CoinGeckoClient {
  /// Create a new CoinGecko API client
  ///
  /// # Arguments
  ///
  /// * `config` - Configuration containing base URL, timeout and optional key
  ///
  /// # Errors
  ///
  /// Returns an error if the HTTP client cannot be created.
  pub fn new(config: Config) -> Result<Self> {
    Ok(Self { transport: Arc::new(Transport::new(&config)?) })
  }

  /// Get access to the coin endpoints
  ///
  /// Returns a `CoinsEndpoints` instance for the coin detail payload and the
  /// historical market chart.
  pub fn coins(&self) -> CoinsEndpoints {
    CoinsEndpoints::new(self.transport.clone())
  }

  /// Get the base URL the client points at
  pub fn base_url(&self) -> &str {
    self.transport.base_url()
  }
}

impl std::fmt::Debug for CoinGeckoClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("CoinGeckoClient").field("base_url", &self.transport.base_url()).finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_client_creation() {
    let config = Config::default();

    let client = CoinGeckoClient::new(config).expect("Failed to create client");
    assert_eq!(client.base_url(), "https://api.coingecko.com/api/v3");
  }

  #[test]
  fn test_client_custom_base_url() {
    let config = Config::with_base_url("http://127.0.0.1:8080/api/v3");

    let client = CoinGeckoClient::new(config).expect("Failed to create client");
    assert_eq!(client.base_url(), "http://127.0.0.1:8080/api/v3");
  }
}
