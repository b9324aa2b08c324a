//! Price table assembly across symbols

use crate::window::DateWindow;
use sv_client::MarketClient;
use sv_core::Result;
use sv_models::market::PriceTable;
use tracing::{debug, instrument};

/// Fetch daily closes for every symbol over the window and combine them
/// into one date-indexed table.
///
/// Symbols are fetched one after another, never in parallel. A symbol that
/// comes back empty keeps its (empty) column and simply contributes no
/// line later; transport failures propagate unhandled.
#[instrument(skip(market), fields(symbols = symbols.len()))]
pub async fn fetch_price_table(
    market: &MarketClient,
    symbols: &[&str],
    window: &DateWindow,
) -> Result<PriceTable> {
    let mut columns = Vec::with_capacity(symbols.len());

    for symbol in symbols {
        let series = market.daily_closes(symbol, window.start, window.end).await?;
        debug!("{}: {} trading days", symbol, series.len());
        columns.push(series);
    }

    Ok(PriceTable::from_series(columns))
}
