//! Drive the coin detail controller against the live API and print each
//! settled snapshot.
//!
//! Usage:
//!   cargo run -p cg-view --example coin_detail [asset-id]

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::watch;

use cg_client::CoinGeckoClient;
use cg_core::{Config, Currency, RangeLabel};
use cg_view::{CoinDetailController, ViewState, ViewStatus};

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
    )
    .init();

  let asset_id = std::env::args().nth(1).unwrap_or_else(|| "bitcoin".to_string());

  let client = Arc::new(CoinGeckoClient::new(Config::from_env()?)?);
  let controller = CoinDetailController::new(client, asset_id.as_str());
  let mut snapshots = controller.subscribe();

  println!("== initial load ({asset_id}, CAD, 24 Hours) ==");
  print_until_settled(&mut snapshots).await;

  println!("\n== switch window to 7 Days ==");
  controller.set_range(RangeLabel::Week);
  print_until_settled(&mut snapshots).await;

  println!("\n== switch currency to USD ==");
  controller.set_currency(Currency::Usd);
  print_until_settled(&mut snapshots).await;

  Ok(())
}

/// Print snapshots until the controller leaves the Loading state.
async fn print_until_settled(snapshots: &mut watch::Receiver<ViewState>) {
  loop {
    {
      let view = snapshots.borrow_and_update().clone();
      match view.status {
        ViewStatus::Loading => println!("loading ..."),
        ViewStatus::Error => {
          println!("fetch failed; change the selection to retry");
          return;
        }
        ViewStatus::Ready => {
          let coin = view.coin.as_ref().expect("ready view carries the coin");
          let series = view.series.as_ref().expect("ready view carries the series");
          let display = view.display.as_ref().expect("ready view carries display data");

          println!("{} {} ({})", display.rank_badge, coin.name, coin.symbol.to_uppercase());
          println!("  price:        {}", display.price);
          println!("  24h change:   {:?} {}%", display.delta.direction, display.delta.magnitude);
          println!("  24h range:    {} .. {}", display.low_24h, display.high_24h);
          println!("  market cap:   {}", display.market_cap);
          println!("  ath / atl:    {} / {}", display.ath, display.atl);
          println!("  supply:       {} circulating, max {:?}",
            display.circulating_supply, display.max_supply);
          println!("  samples:      {} over {}", series.len(), view.selection.range);
          println!("  last updated: {}", display.last_updated);
          return;
        }
      }
    }
    if snapshots.changed().await.is_err() {
      return;
    }
  }
}
