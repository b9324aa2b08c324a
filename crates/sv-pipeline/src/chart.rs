//! Dual-axis chart assembly

use sv_models::chart::{AxisTitle, Figure, Layout, Legend, LegendTitle, SecondaryAxis, Trace};
use sv_models::market::PriceSeries;
use sv_models::news::DailySentiment;

/// Builds the dashboard figure one trace at a time.
///
/// The assembler owns the figure for the duration of one render; traces
/// are added in symbol order, price first, sentiment second.
pub struct ChartAssembler {
    figure: Figure,
}

impl ChartAssembler {
    pub fn new() -> Self {
        Self { figure: Figure { data: Vec::new(), layout: base_layout() } }
    }

    /// Add a "{symbol} Price" line on the primary y-axis.
    /// A symbol without price data adds nothing.
    pub fn add_price_trace(&mut self, series: &PriceSeries) {
        if series.is_empty() {
            return;
        }

        let x = series.closes.keys().map(|d| d.format("%Y-%m-%d").to_string()).collect();
        let y = series.closes.values().copied().collect();
        self.figure.data.push(Trace::lines(format!("{} Price", series.symbol), x, y));
    }

    /// Add a "{symbol} Sentiment" line on the secondary y-axis.
    /// Points appear only on dates with at least one article; an empty
    /// series adds nothing.
    pub fn add_sentiment_trace(&mut self, symbol: &str, daily: &DailySentiment) {
        if daily.is_empty() {
            return;
        }

        let x = daily.keys().cloned().collect();
        let y = daily.values().copied().collect();
        self.figure
            .data
            .push(Trace::lines(format!("{} Sentiment", symbol), x, y).on_secondary_axis());
    }

    pub fn trace_count(&self) -> usize {
        self.figure.data.len()
    }

    /// Finish the render and hand the figure over
    pub fn into_figure(self) -> Figure {
        self.figure
    }
}

impl Default for ChartAssembler {
    fn default() -> Self {
        Self::new()
    }
}

/// Layout shared by every render: price on the left axis, sentiment on a
/// right-hand axis fixed to [-1, 1], hover unified across traces by date.
fn base_layout() -> Layout {
    Layout {
        title: "Stock Prices and News Sentiment".to_string(),
        xaxis: AxisTitle { title: "Date".to_string() },
        yaxis: AxisTitle { title: "Price".to_string() },
        yaxis2: SecondaryAxis {
            title: "Sentiment".to_string(),
            overlaying: "y".to_string(),
            side: "right".to_string(),
            range: [-1.0, 1.0],
            tickvals: vec![-1.0, -0.5, 0.0, 0.5, 1.0],
            ticktext: vec![
                "-1".to_string(),
                "-0.5".to_string(),
                "0".to_string(),
                "0.5".to_string(),
                "1".to_string(),
            ],
        },
        legend: Legend { title: LegendTitle { text: "Stocks".to_string() } },
        hovermode: "x unified".to_string(),
    }
}
