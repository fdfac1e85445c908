//! Historical market chart payload of `/coins/{coin}/market_chart`.
use serde::Deserialize;

/// One `[epoch_ms, value]` pair exactly as received.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ChartPoint(
    /// Epoch milliseconds.
    pub f64,
    /// Value at that instant.
    pub f64,
);

impl ChartPoint {
    /// Timestamp in milliseconds since the UNIX epoch.
    pub fn timestamp_ms(&self) -> f64 {
        self.0
    }

    /// Price, market cap or volume, depending on the series.
    pub fn value(&self) -> f64 {
        self.1
    }
}

/// Three parallel series in upstream order.
///
/// A series missing from the body decodes as empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MarketChart {
    /// Price points.
    #[serde(default)]
    pub prices: Vec<ChartPoint>,
    /// Market capitalisation points.
    #[serde(default)]
    pub market_caps: Vec<ChartPoint>,
    /// Total traded volume points.
    #[serde(default)]
    pub total_volumes: Vec<ChartPoint>,
}
