//! Console rendering of the service views.
use price_service::{CurrentPriceView, HistoricalMarketDataView, Series};
use strum::IntoEnumIterator;

/// One block per coin: the id line, then `currency=value` pairs.
pub fn current_prices(view: &CurrentPriceView) -> String {
    let mut out = String::new();
    for coin in &view.coin_prices {
        out.push_str(&coin.to_string());
        out.push('\n');
    }
    out
}

/// Header line, then each series name followed by its `date=value` lines.
pub fn historical(view: &HistoricalMarketDataView, days: u32) -> String {
    let mut out = format!("{} ({}), {} day(s)\n", view.coin, view.currency, days);
    for series in Series::iter() {
        out.push_str(&format!("{}\n", series));
        for point in view.series(series) {
            out.push_str(&format!("{}={}\n", point.date, point.value));
        }
    }
    out
}
