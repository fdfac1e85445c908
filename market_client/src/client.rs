//! Abstract market data source.
use async_trait::async_trait;
use price_common::Result;

use crate::model::request::{CoinMarketChartRequest, SimplePriceRequest};
use crate::model::response::{CoinMarketChartResponse, SimplePriceResponse};

/// Capability consumed by the price query service.
///
/// Implementations return `Err` only for a missing request or a missing
/// required field, and do so before any I/O. Every operational failure is
/// reported as `ApiResponse::Failed`.
#[async_trait]
pub trait MarketDataClient: Send + Sync {
    /// Current prices of `request.coins` in `request.currencies`.
    async fn get_simple_price(
        &self,
        request: Option<&SimplePriceRequest>,
    ) -> Result<SimplePriceResponse>;

    /// Price, market-cap and volume history of one coin.
    async fn get_coin_market_chart(
        &self,
        request: Option<&CoinMarketChartRequest>,
    ) -> Result<CoinMarketChartResponse>;
}
