//! The dashboard pipeline: fetch, score, aggregate, assemble
//!
//! One linear pass per render, with no state surviving between runs:
//!
//! 1. [`window`] resolves the trailing date window.
//! 2. [`prices`] fetches daily closes for every symbol into one table.
//! 3. [`sentiment`] fetches and scores news per symbol, averaged by day.
//! 4. [`chart`] merges both series into a dual-axis figure.
//! 5. [`dashboard`] drives the above and collects the render inputs.

pub mod chart;
pub mod dashboard;
pub mod prices;
pub mod sentiment;
pub mod window;

pub use chart::ChartAssembler;
pub use dashboard::{build_dashboard, DashboardData, SymbolSection};
pub use sentiment::{fetch_news_sentiment, HeadlineScorer};
pub use window::DateWindow;
