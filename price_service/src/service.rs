//! Price query service over any [`MarketDataClient`].
//!
//! Each query is validated, turned into exactly one client call and reshaped.
//! Argument errors are returned to the caller; everything that goes wrong after
//! validation (client failure, client error, reshaping error) yields an empty
//! view instead.
use log::{debug, warn};
use market_client::{ApiResponse, CoinMarketChartRequest, MarketDataClient, SimplePriceRequest};
use price_common::Result;

use crate::convert;
use crate::model::query::{GetCurrentPriceQuery, GetHistoricalMarketDataQuery};
use crate::model::view::{CurrentPriceView, HistoricalMarketDataView};

/// Validates queries and reshapes market data for display.
pub struct PriceQueryService<C> {
    client: C,
}

impl<C: MarketDataClient> PriceQueryService<C> {
    /// Creates a service on top of `client`.
    pub fn new(client: C) -> Self {
        PriceQueryService { client }
    }

    /// Current prices of `query.coins` in `query.currencies`.
    ///
    /// Fails only with `NullArgument("query")`, `InvalidArgument("coins")` or
    /// `InvalidArgument("currencies")`, checked in that order.
    pub async fn get_current_price(
        &self,
        query: Option<&GetCurrentPriceQuery>,
    ) -> Result<CurrentPriceView> {
        let (coins, currencies) = GetCurrentPriceQuery::checked(query)?;
        let request = SimplePriceRequest::new(coins.to_vec(), currencies.to_vec());

        let coin_prices = match self.client.get_simple_price(Some(&request)).await {
            Ok(ApiResponse::Succeeded(matrix)) => convert::coin_prices(matrix),
            Ok(ApiResponse::Failed) => {
                debug!("No current prices for {:?} in {:?}", coins, currencies);
                Vec::new()
            }
            Err(err) => {
                warn!("Current price lookup failed: {}", err);
                Vec::new()
            }
        };

        Ok(CurrentPriceView { coin_prices })
    }

    /// Price, market-cap and volume history of `query.coin` in `query.currency`.
    ///
    /// Fails only with `NullArgument("query")`, `InvalidArgument("coin")` or
    /// `InvalidArgument("currency")`, checked in that order.
    pub async fn get_historical_market_data(
        &self,
        query: Option<&GetHistoricalMarketDataQuery>,
    ) -> Result<HistoricalMarketDataView> {
        let (coin, currency, days) = GetHistoricalMarketDataQuery::checked(query)?;
        let request = CoinMarketChartRequest::new(coin, currency, days);

        let chart = match self.client.get_coin_market_chart(Some(&request)).await {
            Ok(ApiResponse::Succeeded(chart)) => chart,
            Ok(ApiResponse::Failed) => {
                debug!("No market chart for {} in {} over {} day(s)", coin, currency, days);
                return Ok(HistoricalMarketDataView::empty(coin, currency));
            }
            Err(err) => {
                warn!("Market chart lookup failed: {}", err);
                return Ok(HistoricalMarketDataView::empty(coin, currency));
            }
        };

        match convert::historical_view(coin, currency, &chart) {
            Ok(view) => Ok(view),
            Err(err) => {
                warn!("Market chart for {} could not be reshaped: {}", coin, err);
                Ok(HistoricalMarketDataView::empty(coin, currency))
            }
        }
    }
}
