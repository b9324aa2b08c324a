//! View models and template rendering for the dashboard page

use serde::Serialize;
use sv_core::{Error, Result};
use sv_pipeline::DashboardData;
use tera::Tera;

/// Banner shown when the price fetch produced no data at all
pub const WARNING_TEXT: &str = "Unable to fetch stock data. Please try again later.";

const DASHBOARD_TEMPLATE: &str = "dashboard.html";

/// One article row in a collapsible section
#[derive(Debug, Clone, Serialize)]
pub struct ArticleView {
    pub title: String,
    /// Score pre-rounded to 2 decimal places
    pub score: String,
    pub date: String,
    pub url: String,
}

/// Per-symbol block under the chart: article list or inline error
#[derive(Debug, Clone, Serialize)]
pub struct SectionView {
    pub symbol: String,
    pub error: Option<String>,
    pub articles: Vec<ArticleView>,
}

/// Everything the template needs for one page
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub warning: Option<String>,
    pub chart_json: Option<String>,
    pub sections: Vec<SectionView>,
}

impl DashboardView {
    /// The warning-only page; no chart, no sections
    pub fn unavailable() -> Self {
        Self { warning: Some(WARNING_TEXT.to_string()), chart_json: None, sections: Vec::new() }
    }

    /// Build the full page view from one pipeline run
    pub fn from_data(data: &DashboardData) -> Result<Self> {
        let chart_json = serde_json::to_string(&data.figure)?;

        let sections = data
            .sections
            .iter()
            .map(|section| SectionView {
                symbol: section.symbol.clone(),
                error: section.error.clone(),
                articles: section
                    .articles
                    .iter()
                    .map(|article| ArticleView {
                        title: article.title.clone(),
                        score: format!("{:.2}", article.score),
                        date: article.date.clone(),
                        url: article.url.clone(),
                    })
                    .collect(),
            })
            .collect();

        Ok(Self { warning: None, chart_json: Some(chart_json), sections })
    }
}

/// Template set for the dashboard binary; the template is compiled in
/// so the binary has no runtime file dependencies.
pub fn build_templates() -> tera::Result<Tera> {
    let mut tera = Tera::default();
    tera.add_raw_template(DASHBOARD_TEMPLATE, include_str!("../templates/dashboard.html"))?;
    Ok(tera)
}

/// Render the dashboard page to HTML
pub fn render_dashboard(templates: &Tera, view: &DashboardView) -> Result<String> {
    let context = tera::Context::from_serialize(view)
        .map_err(|e| Error::Parse(format!("Template context error: {}", e)))?;

    templates
        .render(DASHBOARD_TEMPLATE, &context)
        .map_err(|e| Error::Parse(format!("Template render error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sv_models::news::ScoredArticle;
    use sv_pipeline::{ChartAssembler, SymbolSection};

    fn sample_data() -> DashboardData {
        let mut assembler = ChartAssembler::new();
        let mut daily = std::collections::BTreeMap::new();
        daily.insert("2024-01-02".to_string(), 0.2333333);
        assembler.add_sentiment_trace("AAPL", &daily);

        DashboardData {
            figure: assembler.into_figure(),
            sections: vec![SymbolSection {
                symbol: "AAPL".to_string(),
                articles: vec![ScoredArticle {
                    title: "Apple shares climb on upbeat forecast".to_string(),
                    score: 0.2333333,
                    date: "2024-01-02".to_string(),
                    url: "https://example.com/a".to_string(),
                }],
                error: None,
            }],
        }
    }

    #[test]
    fn test_warning_page_has_no_chart() {
        let templates = build_templates().unwrap();
        let html = render_dashboard(&templates, &DashboardView::unavailable()).unwrap();

        assert!(html.contains(WARNING_TEXT));
        assert!(!html.contains("Plotly.newPlot"));
    }

    #[test]
    fn test_scores_are_rounded_to_two_decimals() {
        let view = DashboardView::from_data(&sample_data()).unwrap();
        assert_eq!(view.sections[0].articles[0].score, "0.23");
    }

    #[test]
    fn test_full_page_embeds_chart_and_articles() {
        let templates = build_templates().unwrap();
        let view = DashboardView::from_data(&sample_data()).unwrap();
        let html = render_dashboard(&templates, &view).unwrap();

        assert!(html.contains("Plotly.newPlot"));
        assert!(html.contains("AAPL Sentiment"));
        assert!(html.contains("Articles used for AAPL sentiment analysis:"));
        assert!(html.contains("(Sentiment: 0.23)"));
        assert!(html.contains("Date: 2024-01-02"));
        assert!(html.contains("https://example.com/a"));
    }

    #[test]
    fn test_inline_error_section_renders_message() {
        let templates = build_templates().unwrap();
        let mut data = sample_data();
        data.sections = vec![SymbolSection {
            symbol: "MSFT".to_string(),
            articles: Vec::new(),
            error: Some("Error fetching news data for MSFT: HTTP error: 500".to_string()),
        }];

        let view = DashboardView::from_data(&data).unwrap();
        let html = render_dashboard(&templates, &view).unwrap();

        assert!(html.contains("Error fetching news data for MSFT"));
        assert!(!html.contains("Articles used for MSFT"));
    }
}
