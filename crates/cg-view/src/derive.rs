//! Pure derivation of presentation values from raw payloads.
//!
//! No I/O here: everything is a deterministic function of the payloads and
//! the selection, so the controller can treat derivation failures exactly
//! like fetch failures.

use cg_core::{Error, Result};
use cg_models::{CoinSnapshot, MarketChart};
use std::sync::Arc;

use crate::state::{CoinDisplay, Selection, ViewState, ViewStatus};

/// Direction of a price change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
  /// Price went up over the window
  Up,
  /// Price went down (or did not move) over the window
  Down,
}

/// 24-hour price movement split into direction and magnitude
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceDelta {
  /// Which way the arrow points
  pub direction: Direction,

  /// Absolute change in percent
  pub magnitude: f64,
}

/// Prefix a value with a currency symbol
pub fn format_price(value: f64, symbol: &str) -> String {
  format!("{}{}", symbol, value)
}

/// Split a signed percentage into arrow direction and magnitude.
///
/// Exactly-zero change points Down: the comparison is strictly
/// greater-than, which is the established behavior for the 24h arrow.
pub fn price_delta(pct: f64) -> PriceDelta {
  let direction = if pct > 0.0 { Direction::Up } else { Direction::Down };
  PriceDelta { direction, magnitude: pct.abs() }
}

/// Marker position on the 24-hour range bar.
///
/// Fixed midpoint regardless of where the current price sits between the
/// bounds; the bar conveys the bounds, not the position.
pub fn range_bar_position(_low: f64, _high: f64) -> f64 {
  0.5
}

/// Assemble the Ready snapshot for one coherent fetch.
///
/// Fails with [`Error::Derivation`] when the payload carries no entry for
/// the selected currency in one of the price maps the view renders.
pub fn to_view_state(
  coin: CoinSnapshot,
  chart: MarketChart,
  selection: &Selection,
) -> Result<ViewState> {
  let code = selection.currency.code();
  let symbol = selection.currency.symbol();

  let price = require(coin.price_in(code), "current_price", code)?;
  let high = require(coin.high_24h_in(code), "high_24h", code)?;
  let low = require(coin.low_24h_in(code), "low_24h", code)?;
  let market_cap = require(coin.market_cap_in(code), "market_cap", code)?;
  let ath = require(coin.ath_in(code), "ath", code)?;
  let atl = require(coin.atl_in(code), "atl", code)?;

  let display = CoinDisplay {
    price: format_price(price, symbol),
    delta: price_delta(coin.market_data.price_change_percentage_24h),
    high_24h: format_price(high, symbol),
    low_24h: format_price(low, symbol),
    range_bar: range_bar_position(low, high),
    rank_badge: format!("#{}", coin.market_cap_rank),
    market_cap: format_price(market_cap, symbol),
    ath: format_price(ath, symbol),
    atl: format_price(atl, symbol),
    max_supply: coin.market_data.max_supply,
    circulating_supply: coin.market_data.circulating_supply,
    last_updated: coin.market_data.last_updated,
  };

  Ok(ViewState {
    status: ViewStatus::Ready,
    selection: selection.clone(),
    currency_symbol: symbol,
    coin: Some(Arc::new(coin)),
    series: Some(Arc::new(chart.prices)),
    display: Some(display),
  })
}

fn require(value: Option<f64>, field: &str, currency: &str) -> Result<f64> {
  value
    .ok_or_else(|| Error::Derivation { field: field.to_string(), currency: currency.to_string() })
}

#[cfg(test)]
mod tests {
  use super::*;
  use cg_core::Currency;

  fn sample_coin() -> CoinSnapshot {
    serde_json::from_value(serde_json::json!({
      "id": "bitcoin",
      "symbol": "btc",
      "name": "Bitcoin",
      "image": {"large": "https://assets.coingecko.com/coins/images/1/large/bitcoin.png"},
      "market_cap_rank": 1,
      "market_data": {
        "current_price": {"cad": 50000.0, "inr": 3100000.0, "usd": 37000.0},
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
    }))
    .unwrap()
  }

  fn sample_chart() -> MarketChart {
    serde_json::from_value(serde_json::json!({
      "prices": [[1736899200000i64, 49500.0], [1736902800000i64, 50000.0]]
    }))
    .unwrap()
  }

  #[test]
  fn test_format_price() {
    assert_eq!(format_price(50000.0, "CA$ "), "CA$ 50000");
    assert_eq!(format_price(69.81, "$ "), "$ 69.81");
  }

  #[test]
  fn test_price_delta_positive() {
    let delta = price_delta(2.35);
    assert_eq!(delta.direction, Direction::Up);
    assert_eq!(delta.magnitude, 2.35);
  }

  #[test]
  fn test_price_delta_negative() {
    let delta = price_delta(-1.2);
    assert_eq!(delta.direction, Direction::Down);
    assert_eq!(delta.magnitude, 1.2);
  }

  #[test]
  fn test_price_delta_zero_points_down() {
    // strict greater-than: no movement renders as a decrease
    let delta = price_delta(0.0);
    assert_eq!(delta.direction, Direction::Down);
    assert_eq!(delta.magnitude, 0.0);
  }

  #[test]
  fn test_range_bar_is_fixed_midpoint() {
    assert_eq!(range_bar_position(48500.0, 51000.0), 0.5);
    assert_eq!(range_bar_position(0.0, 1.0), 0.5);
  }

  #[test]
  fn test_to_view_state_ready() {
    let selection = Selection::new("bitcoin");
    let view = to_view_state(sample_coin(), sample_chart(), &selection).unwrap();

    assert_eq!(view.status, ViewStatus::Ready);
    assert_eq!(view.currency_symbol, "CA$ ");

    let display = view.display.unwrap();
    assert_eq!(display.price, "CA$ 50000");
    assert_eq!(display.high_24h, "CA$ 51000");
    assert_eq!(display.low_24h, "CA$ 48500");
    assert_eq!(display.rank_badge, "#1");
    assert_eq!(display.range_bar, 0.5);
    assert_eq!(display.delta.direction, Direction::Up);
    assert_eq!(display.max_supply, Some(21000000.0));

    assert_eq!(view.series.unwrap().len(), 2);
    assert_eq!(view.coin.unwrap().name, "Bitcoin");
  }

  #[test]
  fn test_to_view_state_missing_currency() {
    let mut selection = Selection::new("bitcoin");
    selection.currency = Currency::Kwd;

    let result = to_view_state(sample_coin(), sample_chart(), &selection);

    match result {
      Err(Error::Derivation { field, currency }) => {
        assert_eq!(field, "current_price");
        assert_eq!(currency, "kwd");
      }
      other => panic!("expected derivation error, got {:?}", other.map(|v| v.status)),
    }
  }

  #[test]
  fn test_to_view_state_missing_secondary_map() {
    // inr has a current price but no 24h bounds in the sample payload
    let mut selection = Selection::new("bitcoin");
    selection.currency = Currency::Inr;

    let result = to_view_state(sample_coin(), sample_chart(), &selection);

    match result {
      Err(Error::Derivation { field, .. }) => assert_eq!(field, "high_24h"),
      other => panic!("expected derivation error, got {:?}", other.map(|v| v.status)),
    }
  }
}
