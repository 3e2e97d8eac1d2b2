//! Immutable view-state snapshots published by the controller.

use cg_core::{Currency, RangeLabel};
use cg_models::{CoinSnapshot, PriceSeries};
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::derive::PriceDelta;

/// Current value of the three selection axes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
  /// API identifier of the displayed asset
  pub asset_id: String,

  /// Currency prices are displayed in
  pub currency: Currency,

  /// Historical window of the chart
  pub range: RangeLabel,
}

impl Selection {
  /// Initial selection for an asset: CAD over the 24-hour window
  pub fn new(asset_id: impl Into<String>) -> Self {
    Selection {
      asset_id: asset_id.into(),
      currency: Currency::default(),
      range: RangeLabel::default(),
    }
  }
}

/// Lifecycle phase of a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewStatus {
  /// A fetch for the current selection is in flight
  Loading,
  /// The last fetch for the current selection failed
  Error,
  /// Coin, series and display figures are present and coherent
  Ready,
}

/// Presentation-ready figures derived from one coherent fetch
#[derive(Debug, Clone, PartialEq)]
pub struct CoinDisplay {
  /// Currency-prefixed current price, e.g. "CA$ 50000"
  pub price: String,

  /// 24-hour change, split into arrow direction and magnitude
  pub delta: PriceDelta,

  /// Currency-prefixed 24-hour high
  pub high_24h: String,

  /// Currency-prefixed 24-hour low
  pub low_24h: String,

  /// Marker position on the 24-hour range bar, in 0.0..=1.0
  pub range_bar: f64,

  /// Rank badge, e.g. "#1"
  pub rank_badge: String,

  /// Currency-prefixed market capitalization
  pub market_cap: String,

  /// Currency-prefixed all-time high
  pub ath: String,

  /// Currency-prefixed all-time low
  pub atl: String,

  /// Maximum supply; absent for uncapped assets
  pub max_supply: Option<f64>,

  /// Circulating supply
  pub circulating_supply: f64,

  /// When the API last refreshed the figures
  pub last_updated: DateTime<Utc>,
}

/// The one artifact rendering collaborators consume.
///
/// Replaced wholesale on every transition, never patched in place. `coin`,
/// `series` and `display` are all present on Ready and all absent otherwise,
/// so a snapshot can never mix data from two selections.
#[derive(Debug, Clone)]
pub struct ViewState {
  /// Lifecycle phase
  pub status: ViewStatus,

  /// Selection this snapshot belongs to
  pub selection: Selection,

  /// Display prefix for the selected currency
  pub currency_symbol: &'static str,

  /// Raw coin payload backing the snapshot
  pub coin: Option<Arc<CoinSnapshot>>,

  /// Price series for the selected window
  pub series: Option<Arc<PriceSeries>>,

  /// Presentation-ready figures
  pub display: Option<CoinDisplay>,
}

impl ViewState {
  /// Loading snapshot for a selection
  pub fn loading(selection: Selection) -> Self {
    let currency_symbol = selection.currency.symbol();
    ViewState {
      status: ViewStatus::Loading,
      selection,
      currency_symbol,
      coin: None,
      series: None,
      display: None,
    }
  }

  /// Error snapshot for a selection
  pub fn error(selection: Selection) -> Self {
    let currency_symbol = selection.currency.symbol();
    ViewState {
      status: ViewStatus::Error,
      selection,
      currency_symbol,
      coin: None,
      series: None,
      display: None,
    }
  }

  /// True when the snapshot carries coherent Ready data
  pub fn is_ready(&self) -> bool {
    self.status == ViewStatus::Ready
  }
}
