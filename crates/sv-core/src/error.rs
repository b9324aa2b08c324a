use thiserror::Error;

/// The main error type for sv-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// API key error
  #[error("Failed to retrieve API key: {0}")]
  ApiKey(String),

  /// Serialization/Deserialization error
  #[error("Serialization error")]
  Serde(#[from] serde_json::Error),

  /// HTTP transport error
  #[error("HTTP error: {0}")]
  Http(String),

  /// Error reported by an external API in its response body
  #[error("API error: {0}")]
  Api(String),

  /// Parse error for data processing
  #[error("Parse error: {0}")]
  Parse(String),

  /// The price fetch produced no data for any symbol
  #[error("no price data available for any symbol")]
  DataUnavailable,

  /// News retrieval or scoring failed for one symbol
  #[error("Error fetching news data for {symbol}: {reason}")]
  SentimentFetchFailed { symbol: String, reason: String },
}

impl Error {
  /// Wrap any failure from the fetch-and-score step for one symbol
  pub fn sentiment_failed(symbol: &str, source: impl std::fmt::Display) -> Self {
    Error::SentimentFetchFailed { symbol: symbol.to_string(), reason: source.to_string() }
  }
}

/// Result type alias for sv-* crates
pub type Result<T> = std::result::Result<T, Error>;
