//! # cg-client
//!
//! A pure CoinGecko API client for Rust with no UI dependencies.
//!
//! ## Features
//!
//! - **Clean API**: Simple, idiomatic Rust interface
//! - **Async/Await**: Built on tokio for high performance
//! - **Type Safe**: Strongly typed responses using cg-models
//! - **Configurable**: Environment-based configuration via cg-core
//! - **Fail Fast**: Missing payload fields surface at deserialization
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cg_client::CoinGeckoClient;
//! use cg_core::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = CoinGeckoClient::new(config)?;
//!
//!     let coin = client.coins().detail("bitcoin").await?;
//!     println!("Current CAD price: {:?}", coin.price_in("cad"));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, cg_core::Error>` for consistent error
//! handling across the entire cg-* ecosystem: transport failures surface as
//! `Network`, unknown asset ids as `NotFound`, throttling as `RateLimit` and
//! undecodable payloads as `MalformedResponse`. No retries are performed at
//! this layer.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod transport;

// Re-export the main client and common types
pub use client::CoinGeckoClient;
pub use cg_core::{Config, Error, Result};
pub use cg_models::*;

// Re-export endpoint modules for direct access if needed
pub use endpoints::coins::CoinsEndpoints;
