//! # cg-models
//!
//! Data models for CoinGecko API responses.
//!
//! This crate provides strongly-typed Rust structures for the two endpoints
//! the coin detail view consumes: the coin detail payload and the historical
//! market chart.
//!
//! ## Features
//!
//! - **Type Safety**: Required fields are non-optional, so a payload missing
//!   them fails at deserialization rather than at field access
//! - **Serde Integration**: Built-in serialization/deserialization
//! - **Date Handling**: Timezone-aware parsing of `last_updated`
//!
//! ## Usage
//!
//! ```ignore
//! use cg_models::coin::CoinSnapshot;
//! use cg_models::market_chart::MarketChart;
//!
//! // Deserialize API responses
//! let coin: CoinSnapshot = serde_json::from_str(&detail_json)?;
//! let chart: MarketChart = serde_json::from_str(&chart_json)?;
//! ```

#![warn(clippy::all)]

pub mod coin;
pub mod market_chart;

// Re-export the payload types for convenience
pub use coin::{CoinImage, CoinSnapshot, MarketData};
pub use market_chart::{MarketChart, PricePoint, PriceSeries};
