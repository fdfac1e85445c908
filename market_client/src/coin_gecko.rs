//! CoinGecko-backed implementation of [`MarketDataClient`].
//!
//! Each call issues exactly one `GET` against the API root, with no retries and
//! no timeout beyond the transport defaults. URLs are built by plain
//! interpolation: coin ids and currency codes are assumed to be URL-safe tokens.
//!
//! Two layers are provided:
//! - `try_simple_price` / `try_coin_market_chart` return `Result<_, PriceError>`
//!   with the transport, status or JSON cause of a failure;
//! - the trait methods collapse every operational failure into
//!   [`ApiResponse::Failed`] and log the cause at `warn` level.
use async_trait::async_trait;
use log::{debug, warn};
use price_common::net::{API_ROOT_URL, join_ids};
use price_common::{PriceError, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::client::MarketDataClient;
use crate::model::market_chart::MarketChart;
use crate::model::price_matrix::PriceMatrix;
use crate::model::request::{CoinMarketChartRequest, SimplePriceRequest};
use crate::model::response::{ApiResponse, CoinMarketChartResponse, SimplePriceResponse};

/// HTTP client for the CoinGecko v3 API.
#[derive(Debug, Clone)]
pub struct CoinGeckoClient {
    client: Client,
    base_url: String,
}

impl Default for CoinGeckoClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CoinGeckoClient {
    /// Client targeting the public API root.
    pub fn new() -> Self {
        Self::with_base_url(API_ROOT_URL)
    }

    /// Client targeting another API root, e.g. a local stub.
    pub fn with_base_url(base_url: &str) -> Self {
        Self::with_http_client(base_url, Client::new())
    }

    /// Client reusing a preconfigured `reqwest::Client`.
    pub fn with_http_client(base_url: &str, client: Client) -> Self {
        CoinGeckoClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetches current prices, keeping the failure cause.
    ///
    /// A `null` body decodes as an empty matrix.
    pub async fn try_simple_price(
        &self,
        request: Option<&SimplePriceRequest>,
    ) -> Result<PriceMatrix> {
        let (coins, currencies) = SimplePriceRequest::checked(request)?;
        let url = simple_price_url(&self.base_url, coins, currencies);
        let matrix: Option<PriceMatrix> = self.get_json(&url).await?;
        Ok(matrix.unwrap_or_default())
    }

    /// Fetches a market chart, keeping the failure cause.
    ///
    /// A `null` body decodes as three empty series.
    pub async fn try_coin_market_chart(
        &self,
        request: Option<&CoinMarketChartRequest>,
    ) -> Result<MarketChart> {
        let (coin, currency, days) = CoinMarketChartRequest::checked(request)?;
        let url = market_chart_url(&self.base_url, coin, currency, days);
        let chart: Option<MarketChart> = self.get_json(&url).await?;
        Ok(chart.unwrap_or_default())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET {}", url);
        let resp = self.client.get(url).send().await?;
        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(PriceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = resp.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl MarketDataClient for CoinGeckoClient {
    async fn get_simple_price(
        &self,
        request: Option<&SimplePriceRequest>,
    ) -> Result<SimplePriceResponse> {
        collapse("simple price", self.try_simple_price(request).await)
    }

    async fn get_coin_market_chart(
        &self,
        request: Option<&CoinMarketChartRequest>,
    ) -> Result<CoinMarketChartResponse> {
        collapse("market chart", self.try_coin_market_chart(request).await)
    }
}

/// Argument errors pass through; anything else becomes `Failed`.
fn collapse<T>(operation: &str, result: Result<T>) -> Result<ApiResponse<T>> {
    match result {
        Ok(payload) => Ok(ApiResponse::Succeeded(payload)),
        Err(err) if err.is_argument_error() => Err(err),
        Err(err) => {
            warn!("{} request failed: {}", operation, err);
            Ok(ApiResponse::Failed)
        }
    }
}

/// `{root}/simple/price?ids={coins}&vs_currencies={currencies}`
pub fn simple_price_url(base_url: &str, coins: &[String], currencies: &[String]) -> String {
    format!(
        "{}/simple/price?ids={}&vs_currencies={}",
        base_url,
        join_ids(coins),
        join_ids(currencies)
    )
}

/// `{root}/coins/{coin}/market_chart?vs_currencies={currency}&days={days}`
pub fn market_chart_url(base_url: &str, coin: &str, currency: &str, days: u32) -> String {
    format!(
        "{}/coins/{}/market_chart?vs_currencies={}&days={}",
        base_url, coin, currency, days
    )
}
