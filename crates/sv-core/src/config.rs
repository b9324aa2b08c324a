//! Configuration management for the sentiview dashboard

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

/// Main configuration struct for the dashboard process
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// NewsAPI key; absence is fatal at startup
  pub news_api_key: String,

  /// Base URL for the news API
  pub news_base_url: String,

  /// Base URL for the market data API
  pub market_base_url: String,

  /// Request timeout in seconds
  pub timeout_secs: u64,

  /// Address the web server binds to
  pub bind_addr: String,

  /// Port the web server binds to
  pub bind_port: u16,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let news_api_key =
      env::var("NEWS_API_KEY").map_err(|_| Error::ApiKey("NEWS_API_KEY not set".to_string()))?;

    let news_base_url =
      env::var("SV_NEWS_BASE_URL").unwrap_or_else(|_| crate::NEWS_BASE_URL.to_string());

    let market_base_url =
      env::var("SV_MARKET_BASE_URL").unwrap_or_else(|_| crate::MARKET_BASE_URL.to_string());

    let timeout_secs = env::var("SV_TIMEOUT_SECS")
      .unwrap_or_else(|_| crate::DEFAULT_TIMEOUT_SECS.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid SV_TIMEOUT_SECS".to_string()))?;

    let bind_addr = env::var("SV_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());

    let bind_port = env::var("SV_BIND_PORT")
      .unwrap_or_else(|_| "8080".to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid SV_BIND_PORT".to_string()))?;

    Ok(Config { news_api_key, news_base_url, market_base_url, timeout_secs, bind_addr, bind_port })
  }

  /// Create a config with default values (for testing)
  pub fn default_with_key(news_api_key: String) -> Self {
    Config {
      news_api_key,
      news_base_url: crate::NEWS_BASE_URL.to_string(),
      market_base_url: crate::MARKET_BASE_URL.to_string(),
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
      bind_addr: "127.0.0.1".to_string(),
      bind_port: 8080,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_with_key() {
    let config = Config::default_with_key("test_key".to_string());
    assert_eq!(config.news_api_key, "test_key");
    assert_eq!(config.timeout_secs, 30);
    assert_eq!(config.news_base_url, "https://newsapi.org");
  }

  #[test]
  fn test_config_from_env() {
    env::set_var("NEWS_API_KEY", "test_key");
    let config = Config::from_env().unwrap();
    assert_eq!(config.news_api_key, "test_key");
    assert_eq!(config.bind_port, 8080);
  }
}
