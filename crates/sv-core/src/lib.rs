pub mod config;
pub mod error;

pub use config::Config;
pub use error::{Error, Result};

/// Base URL for the Yahoo-style market data chart API
pub const MARKET_BASE_URL: &str = "https://query1.finance.yahoo.com";

/// Base URL for the NewsAPI service
pub const NEWS_BASE_URL: &str = "https://newsapi.org";

/// Symbols charted by the dashboard. Fixed set; there is no runtime
/// symbol configuration surface.
pub const DEFAULT_SYMBOLS: [&str; 3] = ["AAPL", "MSFT", "GOOGL"];

/// Trailing window length in days, ending "today"
pub const DEFAULT_WINDOW_DAYS: i64 = 30;

/// Maximum articles requested per symbol
pub const NEWS_PAGE_SIZE: u32 = 100;

/// Language filter passed to the news API
pub const NEWS_LANGUAGE: &str = "en";

/// Sort order passed to the news API
pub const NEWS_SORT_BY: &str = "publishedAt";

/// Default HTTP request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
