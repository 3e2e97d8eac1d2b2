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

//! Provider trait the controller fetches through.

use async_trait::async_trait;
use cg_client::CoinGeckoClient;
use cg_core::{Currency, RangeLabel, Result};
use cg_models::{CoinSnapshot, MarketChart};

/// Remote market-data surface the controller needs.
///
/// Implement this trait to back the controller with a different data source;
/// tests implement it with scripted responses.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
  /// Fetch the coin detail payload for an asset
  async fn coin_detail(&self, asset_id: &str) -> Result<CoinSnapshot>;

  /// Fetch the priced history for an asset over a window
  async fn market_chart(
    &self,
    asset_id: &str,
    currency: Currency,
    range: RangeLabel,
  ) -> Result<MarketChart>;
}

#[async_trait]
impl MarketDataProvider for CoinGeckoClient {
  async fn coin_detail(&self, asset_id: &str) -> Result<CoinSnapshot> {
    self.coins().detail(asset_id).await
  }

  async fn market_chart(
    &self,
    asset_id: &str,
    currency: Currency,
    range: RangeLabel,
  ) -> Result<MarketChart> {
    self.coins().market_chart(asset_id, currency, range).await
  }
}
