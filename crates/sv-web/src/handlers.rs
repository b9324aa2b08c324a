//! Dashboard route handler

use crate::view::{render_dashboard, DashboardView};
use actix_web::error::ErrorInternalServerError;
use actix_web::http::header::ContentType;
use actix_web::{get, web, HttpResponse};
use chrono::Utc;
use sv_client::{MarketClient, NewsClient};
use sv_core::{Error, DEFAULT_SYMBOLS};
use sv_pipeline::{build_dashboard, DateWindow, HeadlineScorer};
use tera::Tera;
use tracing::info;

/// Process-wide collaborators, constructed once at startup and shared
/// across requests; each request still recomputes everything from scratch.
pub struct AppState {
    pub market: MarketClient,
    pub news: NewsClient,
    pub scorer: HeadlineScorer,
    pub templates: Tera,
}

/// Run the full pipeline and render the dashboard page.
///
/// `DataUnavailable` becomes the warning banner; a per-symbol sentiment
/// failure is already folded into the page by the pipeline. Anything else
/// surfaces as the default 500 error page.
#[get("/")]
pub async fn dashboard(state: web::Data<AppState>) -> actix_web::Result<HttpResponse> {
    let window = DateWindow::last_30_days(Utc::now());
    info!("rendering dashboard for {:?} over {} to {}", DEFAULT_SYMBOLS, window.start, window.end);

    let result =
        build_dashboard(&state.market, &state.news, &state.scorer, &DEFAULT_SYMBOLS, &window).await;

    let view = match result {
        Ok(data) => DashboardView::from_data(&data).map_err(ErrorInternalServerError)?,
        Err(Error::DataUnavailable) => DashboardView::unavailable(),
        Err(e) => return Err(ErrorInternalServerError(e)),
    };

    let html = render_dashboard(&state.templates, &view).map_err(ErrorInternalServerError)?;

    Ok(HttpResponse::Ok().content_type(ContentType::html()).body(html))
}
