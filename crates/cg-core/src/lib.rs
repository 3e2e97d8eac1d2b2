pub mod config;
pub mod error;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use types::{Currency, RangeLabel};

/// Base URL for the public CoinGecko REST API
pub const COINGECKO_BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
