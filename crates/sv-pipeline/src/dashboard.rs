//! Top-level pipeline driver
//!
//! Owns the clients and scorer for the duration of one render and runs
//! the control flow the dashboard needs: prices for all symbols first,
//! then sentiment per symbol feeding the chart and the article sections.

use crate::chart::ChartAssembler;
use crate::prices::fetch_price_table;
use crate::sentiment::{fetch_news_sentiment, HeadlineScorer};
use crate::window::DateWindow;
use sv_client::{MarketClient, NewsClient};
use sv_core::{Error, Result};
use sv_models::chart::Figure;
use sv_models::news::ScoredArticle;
use tracing::{instrument, warn};

/// Per-symbol render input: either the scored articles backing the
/// symbol's sentiment trace, or the error message to show inline.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolSection {
    pub symbol: String,
    pub articles: Vec<ScoredArticle>,
    pub error: Option<String>,
}

/// Everything the presentation layer needs for one page render
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub figure: Figure,
    pub sections: Vec<SymbolSection>,
}

/// Run the whole pipeline once.
///
/// Returns [`Error::DataUnavailable`] when the price fetch yields nothing
/// for any symbol; the chart is never assembled in that case. A sentiment
/// failure for one symbol becomes an inline error section and the
/// pipeline continues; the symbol's price line (if present) still
/// renders. A symbol with zero articles gets neither a trace nor a
/// section.
#[instrument(skip(market, news, scorer), fields(symbols = symbols.len()))]
pub async fn build_dashboard(
    market: &MarketClient,
    news: &NewsClient,
    scorer: &HeadlineScorer,
    symbols: &[&str],
    window: &DateWindow,
) -> Result<DashboardData> {
    let table = fetch_price_table(market, symbols, window).await?;
    if table.is_empty() {
        return Err(Error::DataUnavailable);
    }

    let mut chart = ChartAssembler::new();
    let mut sections = Vec::new();

    for symbol in symbols {
        if let Some(series) = table.series(symbol) {
            chart.add_price_trace(series);
        }

        match fetch_news_sentiment(news, scorer, symbol, window).await {
            Ok(sentiment) if !sentiment.is_empty() => {
                chart.add_sentiment_trace(symbol, &sentiment.daily);
                sections.push(SymbolSection {
                    symbol: symbol.to_string(),
                    articles: sentiment.articles,
                    error: None,
                });
            }
            Ok(_) => {}
            Err(e) => {
                warn!("sentiment unavailable for {}: {}", symbol, e);
                sections.push(SymbolSection {
                    symbol: symbol.to_string(),
                    articles: Vec::new(),
                    error: Some(e.to_string()),
                });
            }
        }
    }

    Ok(DashboardData { figure: chart.into_figure(), sections })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::sync::Arc;
    use sv_client::Transport;
    use sv_core::Config;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn chart_body() -> serde_json::Value {
        serde_json::json!({
            "chart": {
                "result": [{
                    "meta": {"symbol": "X", "currency": "USD", "dataGranularity": "1d"},
                    "timestamp": [1704196800, 1704283200],
                    "indicators": {"quote": [{"close": [185.64, 184.25]}]}
                }],
                "error": null
            }
        })
    }

    fn empty_chart_body() -> serde_json::Value {
        serde_json::json!({"chart": {"result": [], "error": null}})
    }

    fn news_body() -> serde_json::Value {
        serde_json::json!({
            "status": "ok",
            "totalResults": 1,
            "articles": [
                {"title": "Shares climb on strong outlook", "url": "https://example.com/a", "publishedAt": "2024-01-02T10:00:00Z"}
            ]
        })
    }

    fn no_news_body() -> serde_json::Value {
        serde_json::json!({"status": "ok", "totalResults": 0, "articles": []})
    }

    async fn clients_for(server: &MockServer) -> (MarketClient, NewsClient) {
        let mut config = Config::default_with_key("test_key".to_string());
        config.market_base_url = server.uri();
        config.news_base_url = server.uri();
        let transport = Arc::new(Transport::new(5).unwrap());
        (MarketClient::new(&config, transport.clone()), NewsClient::new(&config, transport))
    }

    fn window() -> DateWindow {
        DateWindow {
            start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_price_and_sentiment_traces_per_symbol() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v8/finance/chart/AAPL"))
            .respond_with(ResponseTemplate::new(200).set_body_json(chart_body()))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v2/everything"))
            .respond_with(ResponseTemplate::new(200).set_body_json(news_body()))
            .mount(&server)
            .await;

        let (market, news) = clients_for(&server).await;
        let scorer = HeadlineScorer::new();
        let data =
            build_dashboard(&market, &news, &scorer, &["AAPL"], &window()).await.unwrap();

        assert_eq!(data.figure.data.len(), 2);
        assert_eq!(data.figure.data[0].name, "AAPL Price");
        assert_eq!(data.figure.data[1].name, "AAPL Sentiment");
        assert_eq!(data.sections.len(), 1);
        assert!(data.sections[0].error.is_none());
        assert_eq!(data.sections[0].articles.len(), 1);
    }

    #[tokio::test]
    async fn test_scenario_b_news_failure_keeps_price_line() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v8/finance/chart/AAPL"))
            .respond_with(ResponseTemplate::new(200).set_body_json(chart_body()))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v2/everything"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let (market, news) = clients_for(&server).await;
        let scorer = HeadlineScorer::new();
        let data =
            build_dashboard(&market, &news, &scorer, &["AAPL"], &window()).await.unwrap();

        assert_eq!(data.figure.data.len(), 1);
        assert_eq!(data.figure.data[0].name, "AAPL Price");
        let section = &data.sections[0];
        assert!(section.articles.is_empty());
        assert!(section.error.as_deref().unwrap().contains("AAPL"));
    }

    #[tokio::test]
    async fn test_scenario_c_all_prices_empty_short_circuits() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v8/finance/chart/AAPL"))
            .respond_with(ResponseTemplate::new(200).set_body_json(empty_chart_body()))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v8/finance/chart/MSFT"))
            .respond_with(ResponseTemplate::new(200).set_body_json(empty_chart_body()))
            .mount(&server)
            .await;
        // The news endpoint must never be called on the warning path
        Mock::given(method("GET"))
            .and(path("/v2/everything"))
            .respond_with(ResponseTemplate::new(200).set_body_json(news_body()))
            .expect(0)
            .mount(&server)
            .await;

        let (market, news) = clients_for(&server).await;
        let scorer = HeadlineScorer::new();
        let result = build_dashboard(&market, &news, &scorer, &["AAPL", "MSFT"], &window()).await;

        assert!(matches!(result, Err(Error::DataUnavailable)));
    }

    #[tokio::test]
    async fn test_zero_articles_no_trace_no_section() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v8/finance/chart/AAPL"))
            .respond_with(ResponseTemplate::new(200).set_body_json(chart_body()))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v2/everything"))
            .and(query_param("q", "AAPL"))
            .respond_with(ResponseTemplate::new(200).set_body_json(no_news_body()))
            .mount(&server)
            .await;

        let (market, news) = clients_for(&server).await;
        let scorer = HeadlineScorer::new();
        let data =
            build_dashboard(&market, &news, &scorer, &["AAPL"], &window()).await.unwrap();

        assert_eq!(data.figure.data.len(), 1);
        assert!(data.sections.is_empty());
    }
}
