//! Data models for the sentiview dashboard
//!
//! This crate contains the wire models for the two external APIs
//! (market data chart endpoint, news search endpoint) and the derived
//! domain types the pipeline works with: price series and tables,
//! scored articles, daily sentiment, and the serializable chart figure.

pub mod chart;
pub mod market;
pub mod news;

pub use chart::{Figure, Layout, Trace};
pub use market::{ChartResponse, PriceSeries, PriceTable};
pub use news::{DailySentiment, NewsResponse, RawArticle, ScoredArticle, SymbolSentiment};
