//! Outcome of a market data call.
use crate::model::market_chart::MarketChart;
use crate::model::price_matrix::PriceMatrix;

/// Result of one API call: either the deserialized payload or a failure.
///
/// A failure carries no detail. Network errors, non-success statuses and
/// malformed bodies all end up as `Failed`.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    /// The call succeeded and the body was decoded.
    Succeeded(T),
    /// The call failed for any operational reason.
    Failed,
}

impl<T> ApiResponse<T> {
    /// Returns `true` for `Succeeded`.
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Succeeded(_))
    }

    /// Borrows the payload, if any.
    pub fn payload(&self) -> Option<&T> {
        match self {
            ApiResponse::Succeeded(payload) => Some(payload),
            ApiResponse::Failed => None,
        }
    }

    /// Consumes the response and returns the payload, if any.
    pub fn into_payload(self) -> Option<T> {
        match self {
            ApiResponse::Succeeded(payload) => Some(payload),
            ApiResponse::Failed => None,
        }
    }
}

/// Response of `GET /simple/price`.
pub type SimplePriceResponse = ApiResponse<PriceMatrix>;

/// Response of `GET /coins/{coin}/market_chart`.
pub type CoinMarketChartResponse = ApiResponse<MarketChart>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn succeeded_exposes_payload() {
        let response = ApiResponse::Succeeded(3);
        assert!(response.is_success());
        assert_eq!(response.payload(), Some(&3));
        assert_eq!(response.into_payload(), Some(3));
    }

    #[test]
    fn failed_has_no_payload() {
        let response: ApiResponse<u8> = ApiResponse::Failed;
        assert!(!response.is_success());
        assert_eq!(response.payload(), None);
        assert_eq!(response.into_payload(), None);
    }
}
