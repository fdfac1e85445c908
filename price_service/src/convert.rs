//! Wire → view conversions.
//!
//! The price matrix is flattened into `CoinPrice` entries in body order. Chart
//! points are mapped one to one: the epoch-millisecond timestamp is truncated to
//! its UTC calendar date, sub-day resolution is dropped and points falling on
//! the same date are all kept.
use chrono::{DateTime, Datelike, Utc};
use market_client::{ChartPoint, MarketChart, PriceMatrix};
use price_common::{PriceError, Result};

use crate::model::price::{CoinPrice, Price};
use crate::model::view::{HistoricalMarketDataView, SeriesPoint};

/// ISO 8601 calendar date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Years that `DATE_FORMAT` renders as four plain digits.
const FOUR_DIGIT_YEARS: std::ops::RangeInclusive<i32> = 1..=9999;

/// One `CoinPrice` per coin key, each with every returned currency.
pub fn coin_prices(matrix: PriceMatrix) -> Vec<CoinPrice> {
    matrix
        .into_iter()
        .map(|(id, quotes)| CoinPrice {
            id,
            prices: quotes
                .into_iter()
                .map(|(currency, value)| Price::new(currency, value))
                .collect(),
        })
        .collect()
}

/// UTC calendar date of an epoch-millisecond timestamp.
///
/// Fractional milliseconds are truncated. Fails for non-finite values and for
/// instants outside years 1 to 9999.
pub fn date_of(timestamp_ms: f64) -> Result<String> {
    if !timestamp_ms.is_finite() {
        return Err(PriceError::Timestamp(timestamp_ms));
    }
    DateTime::<Utc>::from_timestamp_millis(timestamp_ms as i64)
        .filter(|instant| FOUR_DIGIT_YEARS.contains(&instant.year()))
        .map(|instant| instant.format(DATE_FORMAT).to_string())
        .ok_or(PriceError::Timestamp(timestamp_ms))
}

/// Maps raw points to dated points, preserving length and order.
pub fn series_points(points: &[ChartPoint]) -> Result<Vec<SeriesPoint>> {
    points
        .iter()
        .map(|point| date_of(point.timestamp_ms()).map(|date| SeriesPoint::new(date, point.value())))
        .collect()
}

/// Builds the historical view; any undatable point fails the whole chart.
pub fn historical_view(
    coin: &str,
    currency: &str,
    chart: &MarketChart,
) -> Result<HistoricalMarketDataView> {
    Ok(HistoricalMarketDataView {
        coin: coin.to_string(),
        currency: currency.to_string(),
        prices: series_points(&chart.prices)?,
        market_caps: series_points(&chart.market_caps)?,
        total_volumes: series_points(&chart.total_volumes)?,
    })
}
