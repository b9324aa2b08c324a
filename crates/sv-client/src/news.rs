//! News search client

use crate::transport::Transport;
use std::sync::Arc;
use sv_core::{Config, Error, Result, NEWS_LANGUAGE, NEWS_PAGE_SIZE, NEWS_SORT_BY};
use sv_models::news::{NewsResponse, RawArticle};
use tracing::instrument;
use url::Url;

/// Client for the news search API.
///
/// The query string is passed verbatim as free text; a ticker symbol is
/// not a semantic filter here, just a search term.
pub struct NewsClient {
    transport: Arc<Transport>,
    base_url: String,
    api_key: String,
}

impl NewsClient {
    /// Create a new news client
    pub fn new(config: &Config, transport: Arc<Transport>) -> Self {
        Self {
            transport,
            base_url: config.news_base_url.clone(),
            api_key: config.news_api_key.clone(),
        }
    }

    /// Fetch up to [`NEWS_PAGE_SIZE`] articles matching `query` within
    /// `[from, to]` (dates as YYYY-MM-DD strings), English only, sorted by
    /// publish time.
    ///
    /// # Errors
    ///
    /// Returns an error on authentication failure, quota exhaustion, or a
    /// malformed query, as reported by the API's status field.
    #[instrument(skip(self))]
    pub async fn everything(&self, query: &str, from: &str, to: &str) -> Result<Vec<RawArticle>> {
        let url = self.build_url(query, from, to)?;
        let response: NewsResponse = self.transport.get_json(url).await?;

        if response.status != "ok" {
            let message = response.message.unwrap_or_else(|| "unknown news API error".to_string());
            return Err(Error::Api(message));
        }

        Ok(response.articles)
    }

    /// Build the search URL for one query and window
    fn build_url(&self, query: &str, from: &str, to: &str) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/v2/everything", self.base_url))
            .map_err(|e| Error::Http(format!("Invalid base URL: {}", e)))?;

        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("from", from)
            .append_pair("to", to)
            .append_pair("language", NEWS_LANGUAGE)
            .append_pair("sortBy", NEWS_SORT_BY)
            .append_pair("pageSize", &NEWS_PAGE_SIZE.to_string())
            .append_pair("apiKey", &self.api_key);

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> NewsClient {
        let mut config = Config::default_with_key("test_key".to_string());
        config.news_base_url = server.uri();
        NewsClient::new(&config, Arc::new(Transport::new(5).unwrap()))
    }

    #[tokio::test]
    async fn test_everything_returns_articles_in_order() {
        let server = MockServer::start().await;
        let body = serde_json::json!({
            "status": "ok",
            "totalResults": 2,
            "articles": [
                {"title": "Second headline", "url": "https://example.com/b", "publishedAt": "2024-01-02T08:00:00Z"},
                {"title": "First headline", "url": "https://example.com/a", "publishedAt": "2024-01-01T08:00:00Z"}
            ]
        });

        Mock::given(method("GET"))
            .and(path("/v2/everything"))
            .and(query_param("q", "AAPL"))
            .and(query_param("language", "en"))
            .and(query_param("sortBy", "publishedAt"))
            .and(query_param("pageSize", "100"))
            .and(query_param("apiKey", "test_key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let articles =
            client_for(&server).everything("AAPL", "2024-01-01", "2024-01-31").await.unwrap();

        // Fetch order is preserved, never re-sorted
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title.as_deref(), Some("Second headline"));
    }

    #[tokio::test]
    async fn test_error_status_maps_to_api_error() {
        let server = MockServer::start().await;
        let body = serde_json::json!({
            "status": "error",
            "code": "rateLimited",
            "message": "You have made too many requests recently."
        });

        Mock::given(method("GET"))
            .and(path("/v2/everything"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let result = client_for(&server).everything("AAPL", "2024-01-01", "2024-01-31").await;

        match result {
            Err(Error::Api(message)) => assert!(message.contains("too many requests")),
            other => panic!("expected Api error, got {:?}", other.map(|a| a.len())),
        }
    }

    #[tokio::test]
    async fn test_zero_articles_is_not_an_error() {
        let server = MockServer::start().await;
        let body = serde_json::json!({"status": "ok", "totalResults": 0, "articles": []});

        Mock::given(method("GET"))
            .and(path("/v2/everything"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let articles =
            client_for(&server).everything("AAPL", "2024-01-01", "2024-01-31").await.unwrap();
        assert!(articles.is_empty());
    }
}
