use thiserror::Error;

/// The main error type for the cg-* crates
#[derive(Error, Debug, Clone)]
pub enum Error {
  /// Transport-level failure: connection refused, TLS, timeout
  #[error("network error: {0}")]
  Network(String),

  /// The remote API does not recognize the asset id
  #[error("asset not found: {0}")]
  NotFound(String),

  /// The remote API throttled the request
  #[error("rate limit exceeded: {0}")]
  RateLimit(String),

  /// Response decoded but required fields were absent or mistyped
  #[error("malformed response: {0}")]
  MalformedResponse(String),

  /// Payload was valid but carries no data for the selected currency
  #[error("no {field} entry for currency {currency}")]
  Derivation {
    /// Price map that was missing the entry
    field: String,
    /// Lowercase code of the currency that was requested
    currency: String,
  },

  /// Invalid selection value or environment configuration
  #[error("configuration error: {0}")]
  Configuration(String),
}

/// Result type alias for the cg-* crates
pub type Result<T> = std::result::Result<T, Error>;
