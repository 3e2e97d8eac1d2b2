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

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Coin detail payload from `GET /coins/{id}`.
///
/// Required fields are non-optional: a payload missing any of them fails to
/// deserialize instead of surfacing as a missing-field panic later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinSnapshot {
  /// API identifier (slug) of the asset, e.g. "bitcoin"
  pub id: String,

  /// Ticker symbol, e.g. "btc"
  pub symbol: String,

  /// Human-readable asset name
  pub name: String,

  /// Logo URLs
  pub image: CoinImage,

  /// Rank by market capitalization
  pub market_cap_rank: u32,

  /// Market figures, keyed per currency where applicable
  pub market_data: MarketData,
}

/// Logo URLs for a coin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinImage {
  /// Thumbnail size
  #[serde(skip_serializing_if = "Option::is_none")]
  pub thumb: Option<String>,

  /// Small size
  #[serde(skip_serializing_if = "Option::is_none")]
  pub small: Option<String>,

  /// Large size, the one the detail view renders
  pub large: String,
}

/// Market figures for a coin
///
/// The per-currency maps are keyed by lowercase currency code ("usd", "cad",
/// ...). The API ships several dozen currencies; lookups for a currency the
/// payload lacks return `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketData {
  /// Current price per currency
  pub current_price: HashMap<String, f64>,

  /// 24-hour price change in percent
  pub price_change_percentage_24h: f64,

  /// 24-hour high per currency
  pub high_24h: HashMap<String, f64>,

  /// 24-hour low per currency
  pub low_24h: HashMap<String, f64>,

  /// Market capitalization per currency
  pub market_cap: HashMap<String, f64>,

  /// All-time high per currency
  pub ath: HashMap<String, f64>,

  /// All-time low per currency
  pub atl: HashMap<String, f64>,

  /// Maximum supply; null for assets without a cap
  pub max_supply: Option<f64>,

  /// Circulating supply
  pub circulating_supply: f64,

  /// When the API last refreshed these figures
  pub last_updated: DateTime<Utc>,
}

impl CoinSnapshot {
  /// Current price in the given currency, if the payload carries it
  pub fn price_in(&self, code: &str) -> Option<f64> {
    self.market_data.current_price.get(code).copied()
  }

  /// 24-hour high in the given currency
  pub fn high_24h_in(&self, code: &str) -> Option<f64> {
    self.market_data.high_24h.get(code).copied()
  }

  /// 24-hour low in the given currency
  pub fn low_24h_in(&self, code: &str) -> Option<f64> {
    self.market_data.low_24h.get(code).copied()
  }

  /// Market capitalization in the given currency
  pub fn market_cap_in(&self, code: &str) -> Option<f64> {
    self.market_data.market_cap.get(code).copied()
  }

  /// All-time high in the given currency
  pub fn ath_in(&self, code: &str) -> Option<f64> {
    self.market_data.ath.get(code).copied()
  }

  /// All-time low in the given currency
  pub fn atl_in(&self, code: &str) -> Option<f64> {
    self.market_data.atl.get(code).copied()
  }
}
