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

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// One sampled price: epoch milliseconds paired with the price value.
///
/// The API ships these as two-element arrays (`[timestampMs, price]`), so
/// (de)serialization goes through a tuple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(i64, f64)", into = "(i64, f64)")]
pub struct PricePoint {
  /// Sample time in epoch milliseconds
  pub timestamp: i64,

  /// Price at that time, in the requested currency
  pub price: f64,
}

impl PricePoint {
  /// Sample time as a timezone-aware datetime, when in chrono's range
  pub fn datetime(&self) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt(self.timestamp).single()
  }
}

impl From<(i64, f64)> for PricePoint {
  fn from((timestamp, price): (i64, f64)) -> Self {
    PricePoint { timestamp, price }
  }
}

impl From<PricePoint> for (i64, f64) {
  fn from(point: PricePoint) -> Self {
    (point.timestamp, point.price)
  }
}

/// Ordered price samples, ascending by timestamp, as the API returns them.
///
/// Dense for short windows, downsampled for long ones.
pub type PriceSeries = Vec<PricePoint>;

/// Historical chart payload from `GET /coins/{id}/market_chart`.
///
/// Only `prices` feeds the detail view; the companion series come along in
/// the same response and are kept for completeness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketChart {
  /// Price samples over the requested window
  pub prices: PriceSeries,

  /// Market capitalization samples
  #[serde(default)]
  pub market_caps: PriceSeries,

  /// Trading volume samples
  #[serde(default)]
  pub total_volumes: PriceSeries,
}

impl MarketChart {
  /// Price of the most recent sample
  pub fn latest_price(&self) -> Option<f64> {
    self.prices.last().map(|point| point.price)
  }

  /// (min, max) price over the window, for chart axis scaling
  pub fn price_bounds(&self) -> Option<(f64, f64)> {
    let first = self.prices.first()?.price;
    let bounds = self.prices.iter().fold((first, first), |(min, max), point| {
      (min.min(point.price), max.max(point.price))
    });
    Some(bounds)
  }
}
