//! # cg-view
//!
//! View-state controller for the coin detail view.
//!
//! This crate owns the data-orchestration logic behind a single-asset detail
//! page: which currency and historical window are selected, when to refetch,
//! and what the rendering layer gets to see. Rendering collaborators consume
//! exactly one artifact, an immutable [`ViewState`] snapshot, and drive the
//! controller through the selection setters.
//!
//! ## Concurrency model
//!
//! Selection mutations bump a monotonically increasing epoch. Each mutation
//! spawns a combined fetch (coin detail + market chart) tagged with its
//! epoch; only a result whose tag still equals the current epoch is ever
//! published. Rapidly clicking through range buttons therefore never shows
//! data from a superseded selection, no matter which request finishes first.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use cg_client::CoinGeckoClient;
//! use cg_core::{Config, Currency};
//! use cg_view::CoinDetailController;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Arc::new(CoinGeckoClient::new(Config::from_env()?)?);
//!     let controller = CoinDetailController::new(client, "bitcoin");
//!
//!     let mut snapshots = controller.subscribe();
//!     controller.set_currency(Currency::Usd);
//!     snapshots.changed().await?;
//!     println!("{:?}", snapshots.borrow().status);
//!
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod controller;
pub mod derive;
pub mod market;
pub mod state;

// Re-export commonly used types
pub use controller::CoinDetailController;
pub use derive::{format_price, price_delta, range_bar_position, Direction, PriceDelta};
pub use market::MarketDataProvider;
pub use state::{CoinDisplay, Selection, ViewState, ViewStatus};

// Prelude for convenient imports
pub mod prelude {
  pub use crate::{
    CoinDetailController, CoinDisplay, Direction, MarketDataProvider, PriceDelta, Selection,
    ViewState, ViewStatus,
  };
}
