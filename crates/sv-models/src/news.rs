//! News article models and the derived sentiment types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// News search response ("everything" endpoint shape)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsResponse {
    /// "ok" on success, "error" otherwise
    pub status: String,

    /// Total matches reported by the API
    #[serde(default)]
    pub total_results: u32,

    /// Matching articles, in the order returned by the API
    #[serde(default)]
    pub articles: Vec<RawArticle>,

    /// Error code when status is "error"
    #[serde(default)]
    pub code: Option<String>,

    /// Error message when status is "error"
    #[serde(default)]
    pub message: Option<String>,
}

/// One article as returned by the news API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArticle {
    /// Headline; the API occasionally returns null here
    #[serde(default)]
    pub title: Option<String>,

    /// Canonical article URL
    pub url: String,

    /// Publish timestamp, ISO-8601
    pub published_at: String,
}

/// One article with its headline sentiment, publish day, and link.
/// Immutable once produced by the aggregator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredArticle {
    /// Headline that was scored
    pub title: String,

    /// Compound sentiment score in [-1, 1]
    pub score: f64,

    /// Publish date truncated to day granularity (YYYY-MM-DD)
    pub date: String,

    /// Article URL
    pub url: String,
}

/// Mean compound score per truncated publish date.
///
/// ISO date strings sort lexicographically in chronological order, so a
/// BTreeMap keeps the series in x-axis order for free.
pub type DailySentiment = BTreeMap<String, f64>;

/// Sentiment aggregation output for one symbol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolSentiment {
    /// Symbol the articles were fetched for
    pub symbol: String,

    /// Every scored article, in fetch order
    pub articles: Vec<ScoredArticle>,

    /// Daily-averaged sentiment series
    pub daily: DailySentiment,
}

impl SymbolSentiment {
    /// Output for a symbol with zero matching articles
    pub fn empty(symbol: &str) -> Self {
        Self { symbol: symbol.to_string(), articles: Vec::new(), daily: BTreeMap::new() }
    }

    /// True when no articles matched the query window
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}
