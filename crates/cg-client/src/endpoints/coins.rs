//! Coin endpoints: the detail payload and the historical market chart.

use crate::transport::Transport;
use cg_core::{Currency, RangeLabel, Result};
use cg_models::{CoinSnapshot, MarketChart};
use std::sync::Arc;
use tracing::instrument;

/// Coin detail endpoints
pub struct CoinsEndpoints {
  transport: Arc<Transport>,
}

impl CoinsEndpoints {
  /// Create a new coins endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Get the detail payload for one asset
  ///
  /// # Arguments
  ///
  /// * `asset_id` - API identifier of the asset (e.g., "bitcoin", "ethereum")
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use cg_client::CoinGeckoClient;
  /// # use cg_core::Config;
  /// # async fn run() -> cg_core::Result<()> {
  /// let client = CoinGeckoClient::new(Config::default())?;
  /// let coin = client.coins().detail("bitcoin").await?;
  /// println!("{} is ranked #{}", coin.name, coin.market_cap_rank);
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self))]
  pub async fn detail(&self, asset_id: &str) -> Result<CoinSnapshot> {
    let path = format!("coins/{}", asset_id);
    let params = [("localization", "false".to_string())];

    self.transport.get(&path, &params).await
  }

  /// Get the historical price series for one asset
  ///
  /// # Arguments
  ///
  /// * `asset_id` - API identifier of the asset
  /// * `currency` - Currency to price the series in
  /// * `range` - Historical window; its token feeds the `days` parameter
  #[instrument(skip(self))]
  pub async fn market_chart(
    &self,
    asset_id: &str,
    currency: Currency,
    range: RangeLabel,
  ) -> Result<MarketChart> {
    let path = format!("coins/{}/market_chart", asset_id);
    let params =
      [("vs_currency", currency.code().to_string()), ("days", range.token().to_string())];

    self.transport.get(&path, &params).await
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use cg_core::{Config, Error};
  use wiremock::matchers::{header, method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  fn sample_coin_body() -> serde_json::Value {
    serde_json::json!({
      "id": "bitcoin",
      "symbol": "btc",
      "name": "Bitcoin",
      "image": {
        "thumb": "https://assets.coingecko.com/coins/images/1/thumb/bitcoin.png",
        "small": "https://assets.coingecko.com/coins/images/1/small/bitcoin.png",
        "large": "https://assets.coingecko.com/coins/images/1/large/bitcoin.png"
      },
      "market_cap_rank": 1,
      "market_data": {
        "current_price": {"cad": 50000.0, "inr": 3100000.0, "kwd": 11400.0, "usd": 37000.0},
        "price_change_percentage_24h": 2.35,
        "high_24h": {"cad": 51000.0, "usd": 37800.0},
        "low_24h": {"cad": 48500.0, "usd": 36200.0},
        "market_cap": {"cad": 980000000000.0, "usd": 720000000000.0},
        "ath": {"cad": 92000.0, "usd": 69000.0},
        "atl": {"cad": 69.81, "usd": 67.81},
        "max_supply": 21000000.0,
        "circulating_supply": 19500000.0,
        "last_updated": "2025-01-15T12:30:00.000Z"
      }
    })
  }

  fn sample_chart_body() -> serde_json::Value {
    serde_json::json!({
      "prices": [[1736899200000i64, 36800.12], [1736902800000i64, 37150.88]],
      "market_caps": [],
      "total_volumes": []
    })
  }

  fn endpoints_for(server: &MockServer) -> CoinsEndpoints {
    let config = Config::with_base_url(server.uri());
    CoinsEndpoints::new(Arc::new(Transport::new(&config).unwrap()))
  }

  #[tokio::test]
  async fn test_detail_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/coins/bitcoin"))
      .and(query_param("localization", "false"))
      .respond_with(ResponseTemplate::new(200).set_body_json(sample_coin_body()))
      .mount(&server)
      .await;

    let coin = endpoints_for(&server).detail("bitcoin").await.unwrap();

    assert_eq!(coin.name, "Bitcoin");
    assert_eq!(coin.price_in("cad"), Some(50000.0));
  }

  #[tokio::test]
  async fn test_detail_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/coins/nope"))
      .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
        "error": "coin not found"
      })))
      .mount(&server)
      .await;

    let result = endpoints_for(&server).detail("nope").await;

    assert!(matches!(result, Err(Error::NotFound(_))));
  }

  #[tokio::test]
  async fn test_detail_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/coins/bitcoin"))
      .respond_with(ResponseTemplate::new(429))
      .mount(&server)
      .await;

    let result = endpoints_for(&server).detail("bitcoin").await;

    assert!(matches!(result, Err(Error::RateLimit(_))));
  }

  #[tokio::test]
  async fn test_detail_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/coins/bitcoin"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "id": "bitcoin",
        "name": "Bitcoin"
      })))
      .mount(&server)
      .await;

    let result = endpoints_for(&server).detail("bitcoin").await;

    assert!(matches!(result, Err(Error::MalformedResponse(_))));
  }

  #[tokio::test]
  async fn test_detail_server_error_is_network() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/coins/bitcoin"))
      .respond_with(ResponseTemplate::new(500))
      .mount(&server)
      .await;

    let result = endpoints_for(&server).detail("bitcoin").await;

    assert!(matches!(result, Err(Error::Network(_))));
  }

  #[tokio::test]
  async fn test_market_chart_query_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/coins/bitcoin/market_chart"))
      .and(query_param("vs_currency", "cad"))
      .and(query_param("days", "30d"))
      .respond_with(ResponseTemplate::new(200).set_body_json(sample_chart_body()))
      .mount(&server)
      .await;

    let chart = endpoints_for(&server)
      .market_chart("bitcoin", Currency::Cad, RangeLabel::Month)
      .await
      .unwrap();

    assert_eq!(chart.prices.len(), 2);
    assert_eq!(chart.latest_price(), Some(37150.88));
  }

  #[tokio::test]
  async fn test_pro_api_key_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/coins/bitcoin"))
      .and(header("X-CG-Pro-API-Key", "secret"))
      .respond_with(ResponseTemplate::new(200).set_body_json(sample_coin_body()))
      .mount(&server)
      .await;

    let config = Config { api_key: Some("secret".to_string()), ..Config::with_base_url(server.uri()) };
    let endpoints = CoinsEndpoints::new(Arc::new(Transport::new(&config).unwrap()));

    assert!(endpoints.detail("bitcoin").await.is_ok());
  }

  #[tokio::test]
  async fn test_connection_refused_is_network() {
    // nothing listens on this port
    let config = Config::with_base_url("http://127.0.0.1:9");
    let endpoints = CoinsEndpoints::new(Arc::new(Transport::new(&config).unwrap()));

    let result = endpoints.detail("bitcoin").await;

    assert!(matches!(result, Err(Error::Network(_))));
  }
}
