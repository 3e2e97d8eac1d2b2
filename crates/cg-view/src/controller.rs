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

//! The coin detail state machine.

use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tracing::{debug, warn};

use cg_core::{Currency, RangeLabel};

use crate::derive;
use crate::market::MarketDataProvider;
use crate::state::{Selection, ViewState};

/// Owns the selection, the fetch epoch and the published view state.
///
/// Every selection mutation bumps the epoch, publishes a Loading snapshot
/// and spawns a combined fetch tagged with the new epoch. A finished fetch
/// is applied only while its tag still equals the current epoch; everything
/// else is dropped, so network completion order can never leak a superseded
/// selection into the view. Superseded requests are not cancelled at the
/// transport level, only ignored on arrival.
///
/// Cloning the controller is cheap; clones share state.
#[derive(Clone)]
pub struct CoinDetailController {
  inner: Arc<Inner>,
}

struct Inner {
  market: Arc<dyn MarketDataProvider>,
  state: Mutex<Shared>,
  tx: watch::Sender<ViewState>,
}

/// Everything a selection mutation must touch atomically
struct Shared {
  selection: Selection,
  epoch: u64,
}

impl CoinDetailController {
  /// Create a controller for an asset and start the initial fetch.
  ///
  /// Must be called within a tokio runtime; fetches run as spawned tasks.
  pub fn new(market: Arc<dyn MarketDataProvider>, asset_id: impl Into<String>) -> Self {
    let selection = Selection::new(asset_id);
    let (tx, _rx) = watch::channel(ViewState::loading(selection.clone()));
    let inner = Arc::new(Inner {
      market,
      state: Mutex::new(Shared { selection: selection.clone(), epoch: 0 }),
      tx,
    });

    Inner::spawn_fetch(&inner, selection, 0);
    Self { inner }
  }

  /// Subscribe to snapshot updates.
  ///
  /// The receiver always holds the latest snapshot; intermediate snapshots
  /// may be skipped by slow consumers, which is fine because snapshots are
  /// complete replacements.
  pub fn subscribe(&self) -> watch::Receiver<ViewState> {
    self.inner.tx.subscribe()
  }

  /// Current snapshot
  pub fn view_state(&self) -> ViewState {
    self.inner.tx.borrow().clone()
  }

  /// Current selection
  pub fn selection(&self) -> Selection {
    self.inner.state.lock().expect("controller state poisoned").selection.clone()
  }

  /// Select the display currency.
  ///
  /// Selection changes are structural, not value-diffed: re-selecting the
  /// current currency still refetches.
  pub fn set_currency(&self, currency: Currency) {
    self.mutate(|selection| selection.currency = currency);
  }

  /// Select the historical window
  pub fn set_range(&self, range: RangeLabel) {
    self.mutate(|selection| selection.range = range);
  }

  /// Select the historical window by its button label.
  ///
  /// A label outside the catalog cannot come from the range buttons; it
  /// logs a warning and falls back to the 24-hour window.
  pub fn set_range_label(&self, label: &str) {
    let range = RangeLabel::from_label(label).unwrap_or_else(|e| {
      warn!("range label fallback: {}", e);
      RangeLabel::default()
    });
    self.set_range(range);
  }

  /// Switch the displayed asset
  pub fn set_asset_id(&self, asset_id: impl Into<String>) {
    let asset_id = asset_id.into();
    self.mutate(move |selection| selection.asset_id = asset_id);
  }

  fn mutate(&self, apply: impl FnOnce(&mut Selection)) {
    let (selection, epoch) = {
      let mut shared = self.inner.state.lock().expect("controller state poisoned");
      apply(&mut shared.selection);
      shared.epoch += 1;
      // Loading goes out under the same lock that guards the epoch, so a
      // completing fetch cannot publish between the bump and this snapshot
      self.inner.tx.send_replace(ViewState::loading(shared.selection.clone()));
      (shared.selection.clone(), shared.epoch)
    };

    debug!("selection changed (epoch {}): {:?}", epoch, selection);
    Inner::spawn_fetch(&self.inner, selection, epoch);
  }
}

impl Inner {
  fn spawn_fetch(inner: &Arc<Inner>, selection: Selection, epoch: u64) {
    let inner = Arc::clone(inner);
    tokio::spawn(async move {
      let outcome = Inner::fetch(inner.market.as_ref(), &selection).await;
      inner.apply(epoch, selection, outcome);
    });
  }

  /// The combined fetch: both payloads, then derivation. All-or-nothing;
  /// a partial result is treated as total failure.
  async fn fetch(
    market: &dyn MarketDataProvider,
    selection: &Selection,
  ) -> cg_core::Result<ViewState> {
    let (coin, chart) = tokio::try_join!(
      market.coin_detail(&selection.asset_id),
      market.market_chart(&selection.asset_id, selection.currency, selection.range),
    )?;

    derive::to_view_state(coin, chart, selection)
  }

  /// Apply a finished fetch if its epoch is still current, drop it otherwise
  fn apply(&self, epoch: u64, selection: Selection, outcome: cg_core::Result<ViewState>) {
    let shared = self.state.lock().expect("controller state poisoned");
    if shared.epoch != epoch {
      debug!("discarding stale response (epoch {} != {})", epoch, shared.epoch);
      return;
    }

    match outcome {
      Ok(view) => {
        self.tx.send_replace(view);
      }
      Err(e) => {
        warn!("fetch failed for {:?}: {}", selection, e);
        self.tx.send_replace(ViewState::error(selection));
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::state::ViewStatus;
  use async_trait::async_trait;
  use cg_core::Result;
  use cg_models::{CoinSnapshot, MarketChart};

  struct NeverMarket;

  #[async_trait]
  impl MarketDataProvider for NeverMarket {
    async fn coin_detail(&self, _asset_id: &str) -> Result<CoinSnapshot> {
      std::future::pending().await
    }

    async fn market_chart(
      &self,
      _asset_id: &str,
      _currency: Currency,
      _range: RangeLabel,
    ) -> Result<MarketChart> {
      std::future::pending().await
    }
  }

  #[tokio::test]
  async fn test_initial_state_is_loading() {
    let controller = CoinDetailController::new(Arc::new(NeverMarket), "bitcoin");

    let view = controller.view_state();
    assert_eq!(view.status, ViewStatus::Loading);
    assert_eq!(view.selection.asset_id, "bitcoin");
    assert_eq!(view.selection.currency, Currency::Cad);
    assert_eq!(view.selection.range, RangeLabel::Day);
  }

  #[tokio::test]
  async fn test_setters_publish_loading_synchronously() {
    let controller = CoinDetailController::new(Arc::new(NeverMarket), "bitcoin");

    controller.set_currency(Currency::Usd);
    let view = controller.view_state();
    assert_eq!(view.status, ViewStatus::Loading);
    assert_eq!(view.selection.currency, Currency::Usd);
    assert_eq!(view.currency_symbol, "$ ");

    controller.set_range_label("1 Month");
    assert_eq!(controller.selection().range, RangeLabel::Month);
  }

  #[tokio::test]
  async fn test_unknown_range_label_falls_back() {
    let controller = CoinDetailController::new(Arc::new(NeverMarket), "bitcoin");

    controller.set_range(RangeLabel::Year);
    controller.set_range_label("3 Days");

    assert_eq!(controller.selection().range, RangeLabel::Day);
  }
}
