//! Market data client for daily closing prices

use crate::transport::Transport;
use chrono::{Days, NaiveDate, NaiveTime};
use std::sync::Arc;
use sv_core::{Config, Error, Result};
use sv_models::market::{ChartResponse, PriceSeries};
use tracing::{instrument, warn};
use url::Url;

/// Client for the chart API serving historical daily prices
pub struct MarketClient {
    transport: Arc<Transport>,
    base_url: String,
}

impl MarketClient {
    /// Create a new market data client
    pub fn new(config: &Config, transport: Arc<Transport>) -> Self {
        Self { transport, base_url: config.market_base_url.clone() }
    }

    /// Fetch daily closing prices for `symbol` over `[start, end]`.
    ///
    /// The API has no documented error contract beyond "may return empty";
    /// an error object in the response envelope is logged and mapped to an
    /// empty series so the symbol simply contributes no line.
    #[instrument(skip(self))]
    pub async fn daily_closes(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceSeries> {
        let url = self.build_url(symbol, start, end)?;
        let response: ChartResponse = self.transport.get_json(url).await?;

        if let Some(api_error) = &response.chart.error {
            warn!(
                "chart API reported an error for {}: {} ({})",
                symbol, api_error.description, api_error.code
            );
            return Ok(PriceSeries::empty(symbol));
        }

        Ok(response.into_price_series(symbol))
    }

    /// Build the chart URL for one symbol and window
    fn build_url(&self, symbol: &str, start: NaiveDate, end: NaiveDate) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/v8/finance/chart/{}", self.base_url, symbol))
            .map_err(|e| Error::Http(format!("Invalid base URL: {}", e)))?;

        // period2 is exclusive; push it one day past the window end
        let period1 = start.and_time(NaiveTime::MIN).and_utc().timestamp();
        let period2 = end
            .checked_add_days(Days::new(1))
            .unwrap_or(end)
            .and_time(NaiveTime::MIN)
            .and_utc()
            .timestamp();

        url.query_pairs_mut()
            .append_pair("period1", &period1.to_string())
            .append_pair("period2", &period2.to_string())
            .append_pair("interval", "1d")
            .append_pair("events", "history");

        Ok(url)
    }
}
