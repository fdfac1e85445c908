//! Views returned by the price query service.
use strum::{Display, EnumIter};

use crate::model::price::CoinPrice;

/// Current prices, one entry per coin the API returned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurrentPriceView {
    /// Coins in upstream order; empty when the upstream call failed.
    pub coin_prices: Vec<CoinPrice>,
}

/// A value on a calendar date (`YYYY-MM-DD`, UTC).
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    /// Calendar date of the raw timestamp.
    pub date: String,
    /// Price, market cap or volume.
    pub value: f64,
}

impl SeriesPoint {
    /// Creates a point.
    pub fn new(date: impl Into<String>, value: f64) -> Self {
        SeriesPoint {
            date: date.into(),
            value,
        }
    }
}

/// The three series of a market chart, named as in the API payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Series {
    /// Prices.
    Prices,
    /// Market capitalisation.
    MarketCaps,
    /// Total traded volume.
    TotalVolumes,
}

/// Historical market data of one coin in one currency.
///
/// `coin` and `currency` always echo the query, whatever upstream returned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoricalMarketDataView {
    /// Requested coin id.
    pub coin: String,
    /// Requested currency code.
    pub currency: String,
    /// Price points in upstream order.
    pub prices: Vec<SeriesPoint>,
    /// Market-cap points in upstream order.
    pub market_caps: Vec<SeriesPoint>,
    /// Volume points in upstream order.
    pub total_volumes: Vec<SeriesPoint>,
}

impl HistoricalMarketDataView {
    /// View with three empty series.
    pub fn empty(coin: impl Into<String>, currency: impl Into<String>) -> Self {
        HistoricalMarketDataView {
            coin: coin.into(),
            currency: currency.into(),
            ..Default::default()
        }
    }

    /// Borrows one series.
    pub fn series(&self, series: Series) -> &[SeriesPoint] {
        match series {
            Series::Prices => &self.prices,
            Series::MarketCaps => &self.market_caps,
            Series::TotalVolumes => &self.total_volumes,
        }
    }

    /// Returns `true` if all three series are empty.
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty() && self.market_caps.is_empty() && self.total_volumes.is_empty()
    }
}
