//! Dashboard server entry point
//!
//! Constructs the shared transport, the two API clients, and the
//! headline scorer once, then serves the single dashboard route. All
//! chart data is recomputed per request; nothing is cached or persisted.

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use sv_client::{MarketClient, NewsClient, Transport};
use sv_core::Config;
use sv_pipeline::HeadlineScorer;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod handlers;
mod view;

use handlers::AppState;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env().context("failed to load configuration")?;
    let transport = Arc::new(Transport::new(config.timeout_secs)?);

    let state = web::Data::new(AppState {
        market: MarketClient::new(&config, transport.clone()),
        news: NewsClient::new(&config, transport),
        scorer: HeadlineScorer::new(),
        templates: view::build_templates().context("failed to compile templates")?,
    });

    let bind = (config.bind_addr.clone(), config.bind_port);
    info!("dashboard listening on {}:{}", bind.0, bind.1);

    HttpServer::new(move || App::new().app_data(state.clone()).service(handlers::dashboard))
        .bind(bind)?
        .run()
        .await?;

    Ok(())
}
