//! Typed request parameters for the two API endpoints.
//!
//! Fields are optional so that a partially built request can be represented;
//! a missing field is a caller error reported by [`SimplePriceRequest::checked`]
//! and [`CoinMarketChartRequest::checked`] before any network call.
use price_common::{PriceError, Result};

/// Parameters of `GET /simple/price`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimplePriceRequest {
    /// Coin ids, e.g. `bitcoin`.
    pub coins: Option<Vec<String>>,
    /// Currency codes, e.g. `usd`.
    pub currencies: Option<Vec<String>>,
}

impl SimplePriceRequest {
    /// Creates a request with both lists present.
    pub fn new(coins: Vec<String>, currencies: Vec<String>) -> Self {
        SimplePriceRequest {
            coins: Some(coins),
            currencies: Some(currencies),
        }
    }

    /// Validates a possibly missing request and borrows its lists.
    ///
    /// Checks run in order: the request itself, `coins`, `currencies`.
    pub fn checked(request: Option<&Self>) -> Result<(&[String], &[String])> {
        let request = request.ok_or(PriceError::NullArgument("request"))?;
        let coins = request
            .coins
            .as_deref()
            .ok_or(PriceError::InvalidArgument("coins"))?;
        let currencies = request
            .currencies
            .as_deref()
            .ok_or(PriceError::InvalidArgument("currencies"))?;
        Ok((coins, currencies))
    }
}

/// Parameters of `GET /coins/{coin}/market_chart`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoinMarketChartRequest {
    /// Coin id, interpolated into the path.
    pub coin: Option<String>,
    /// Target currency code.
    pub currency: Option<String>,
    /// Trailing window in days.
    pub days: u32,
}

impl CoinMarketChartRequest {
    /// Creates a request with coin and currency present.
    pub fn new(coin: impl Into<String>, currency: impl Into<String>, days: u32) -> Self {
        CoinMarketChartRequest {
            coin: Some(coin.into()),
            currency: Some(currency.into()),
            days,
        }
    }

    /// Validates a possibly missing request and borrows coin and currency.
    ///
    /// Checks run in order: the request itself, `coin`, `currency`.
    pub fn checked(request: Option<&Self>) -> Result<(&str, &str, u32)> {
        let request = request.ok_or(PriceError::NullArgument("request"))?;
        let coin = request
            .coin
            .as_deref()
            .ok_or(PriceError::InvalidArgument("coin"))?;
        let currency = request
            .currency
            .as_deref()
            .ok_or(PriceError::InvalidArgument("currency"))?;
        Ok((coin, currency, request.days))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn simple_price_missing_request() {
        let err = SimplePriceRequest::checked(None).unwrap_err();
        assert!(matches!(err, PriceError::NullArgument("request")));
    }

    #[test]
    fn simple_price_missing_coins_reported_before_currencies() {
        let request = SimplePriceRequest::default();
        let err = SimplePriceRequest::checked(Some(&request)).unwrap_err();
        assert!(matches!(err, PriceError::InvalidArgument("coins")));
    }

    #[test]
    fn simple_price_missing_currencies() {
        let request = SimplePriceRequest {
            coins: Some(strings(&["bitcoin"])),
            currencies: None,
        };
        let err = SimplePriceRequest::checked(Some(&request)).unwrap_err();
        assert!(matches!(err, PriceError::InvalidArgument("currencies")));
    }

    #[test]
    fn simple_price_empty_lists_are_valid() {
        let request = SimplePriceRequest::new(Vec::new(), Vec::new());
        let (coins, currencies) = SimplePriceRequest::checked(Some(&request)).unwrap();
        assert!(coins.is_empty());
        assert!(currencies.is_empty());
    }

    #[test]
    fn market_chart_checks_in_order() {
        assert!(matches!(
            CoinMarketChartRequest::checked(None),
            Err(PriceError::NullArgument("request"))
        ));

        let no_coin = CoinMarketChartRequest::default();
        assert!(matches!(
            CoinMarketChartRequest::checked(Some(&no_coin)),
            Err(PriceError::InvalidArgument("coin"))
        ));

        let no_currency = CoinMarketChartRequest {
            coin: Some("bitcoin".into()),
            currency: None,
            days: 1,
        };
        assert!(matches!(
            CoinMarketChartRequest::checked(Some(&no_currency)),
            Err(PriceError::InvalidArgument("currency"))
        ));
    }

    #[test]
    fn market_chart_valid_request() {
        let request = CoinMarketChartRequest::new("bitcoin", "eur", 7);
        let (coin, currency, days) = CoinMarketChartRequest::checked(Some(&request)).unwrap();
        assert_eq!((coin, currency, days), ("bitcoin", "eur", 7));
    }
}
