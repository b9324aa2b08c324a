//! Market data models for the chart API and the derived price types

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level chart API response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartResponse {
    /// Response envelope
    pub chart: ChartEnvelope,
}

/// Result/error envelope wrapped around every chart response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEnvelope {
    /// Per-symbol results; absent when the request failed
    pub result: Option<Vec<ChartResult>>,

    /// Error reported by the API, if any
    pub error: Option<ChartApiError>,
}

/// Error object embedded in a chart response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartApiError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable description
    pub description: String,
}

/// One symbol's chart data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartResult {
    /// Chart metadata
    pub meta: ChartMeta,

    /// Unix timestamps (seconds) for each bar
    #[serde(default)]
    pub timestamp: Vec<i64>,

    /// Price indicator blocks
    pub indicators: Indicators,
}

/// Metadata attached to a chart result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartMeta {
    /// Symbol the data belongs to
    pub symbol: String,

    /// Quote currency
    #[serde(default)]
    pub currency: Option<String>,

    /// Bar granularity (e.g. "1d")
    #[serde(default, rename = "dataGranularity")]
    pub data_granularity: Option<String>,
}

/// Indicator container in a chart result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Indicators {
    /// Quote blocks; daily charts carry exactly one
    pub quote: Vec<QuoteBlock>,
}

/// OHLCV arrays aligned with the timestamp array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteBlock {
    /// Closing prices; null entries mark bars without a close
    #[serde(default)]
    pub close: Vec<Option<f64>>,
}

impl ChartResponse {
    /// Convert the response into a [`PriceSeries`] for `symbol`.
    ///
    /// Timestamps are truncated to their UTC calendar date and paired with
    /// the close array. Null closes and any timestamp without a matching
    /// close are dropped, never interpolated. An empty or absent result
    /// yields an empty series.
    pub fn into_price_series(self, symbol: &str) -> PriceSeries {
        let mut closes = BTreeMap::new();

        if let Some(results) = self.chart.result {
            for result in results {
                let Some(quote) = result.indicators.quote.first() else {
                    continue;
                };
                for (ts, close) in result.timestamp.iter().zip(quote.close.iter()) {
                    let (Some(date), Some(price)) =
                        (DateTime::from_timestamp(*ts, 0), close)
                    else {
                        continue;
                    };
                    closes.insert(date.date_naive(), *price);
                }
            }
        }

        PriceSeries { symbol: symbol.to_string(), closes }
    }
}

/// Daily closing prices for one symbol, keyed by trading date.
///
/// Dates are unique per symbol; missing trading days are simply absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    /// Symbol the series belongs to
    pub symbol: String,

    /// Closing price per trading date
    pub closes: BTreeMap<NaiveDate, f64>,
}

impl PriceSeries {
    /// Series with no data points
    pub fn empty(symbol: &str) -> Self {
        Self { symbol: symbol.to_string(), closes: BTreeMap::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.closes.len()
    }
}

/// Date-indexed table of closing prices, one column per symbol.
///
/// The row index is the union of all dates seen across symbols; a symbol
/// without data for a date simply has a gap there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTable {
    /// Sorted union of all dates across columns
    pub dates: Vec<NaiveDate>,

    /// One column per requested symbol, in request order
    pub columns: Vec<PriceSeries>,
}

impl PriceTable {
    /// Build a table from per-symbol series, unioning their dates
    pub fn from_series(columns: Vec<PriceSeries>) -> Self {
        let mut dates: Vec<NaiveDate> =
            columns.iter().flat_map(|s| s.closes.keys().copied()).collect();
        dates.sort_unstable();
        dates.dedup();

        Self { dates, columns }
    }

    /// True when no symbol contributed any data point
    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(PriceSeries::is_empty)
    }

    /// Column for `symbol`, if it was requested
    pub fn series(&self, symbol: &str) -> Option<&PriceSeries> {
        self.columns.iter().find(|s| s.symbol == symbol)
    }
}
