//! News sentiment aggregation
//!
//! Fetches recent articles for a symbol, scores each headline with the
//! VADER lexicon, truncates publish timestamps to calendar days, and
//! averages the scores per day.

use crate::window::DateWindow;
use std::collections::BTreeMap;
use sv_client::NewsClient;
use sv_core::{Error, Result};
use sv_models::news::{DailySentiment, ScoredArticle, SymbolSentiment};
use tracing::{debug, instrument};
use vader_sentiment::SentimentIntensityAnalyzer;

/// Lexicon-based headline scorer producing compound scores in [-1, 1].
///
/// Owned by the pipeline driver and shared across symbols; construction
/// parses the lexicon once.
pub struct HeadlineScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl HeadlineScorer {
    pub fn new() -> Self {
        Self { analyzer: SentimentIntensityAnalyzer::new() }
    }

    /// Compound polarity for a piece of text: > 0 roughly positive,
    /// < 0 roughly negative, 0 neutral or mixed.
    pub fn compound(&self, text: &str) -> f64 {
        self.analyzer.polarity_scores(text).get("compound").copied().unwrap_or(0.0)
    }
}

impl Default for HeadlineScorer {
    fn default() -> Self {
        Self::new()
    }
}

/// Truncate an ISO-8601 timestamp to its date portion (first 10
/// characters). Lossy on purpose: articles published at different intraday
/// times, or in different time zones, merge into the same calendar day.
pub fn truncate_to_day(published_at: &str) -> String {
    published_at.chars().take(10).collect()
}

/// Arithmetic mean of article scores per truncated publish date
pub fn daily_average(articles: &[ScoredArticle]) -> DailySentiment {
    let mut sums: BTreeMap<String, (f64, u32)> = BTreeMap::new();

    for article in articles {
        let entry = sums.entry(article.date.clone()).or_insert((0.0, 0));
        entry.0 += article.score;
        entry.1 += 1;
    }

    sums.into_iter().map(|(date, (total, count))| (date, total / f64::from(count))).collect()
}

/// Fetch and score recent news for one symbol.
///
/// The symbol is used verbatim as a free-text query. Only headlines are
/// scored, never article bodies. Any failure in the fetch step is wrapped
/// in [`Error::SentimentFetchFailed`] for the caller to inspect; zero
/// matching articles is a valid, empty result, not an error.
#[instrument(skip(news, scorer))]
pub async fn fetch_news_sentiment(
    news: &NewsClient,
    scorer: &HeadlineScorer,
    symbol: &str,
    window: &DateWindow,
) -> Result<SymbolSentiment> {
    let raw = news
        .everything(symbol, &window.start_ymd(), &window.end_ymd())
        .await
        .map_err(|e| Error::sentiment_failed(symbol, e))?;

    debug!("{}: {} articles fetched", symbol, raw.len());

    let articles: Vec<ScoredArticle> = raw
        .into_iter()
        .map(|article| {
            let title = article.title.unwrap_or_default();
            ScoredArticle {
                score: scorer.compound(&title),
                date: truncate_to_day(&article.published_at),
                url: article.url,
                title,
            }
        })
        .collect();

    let daily = daily_average(&articles);

    Ok(SymbolSentiment { symbol: symbol.to_string(), articles, daily })
}
