//! Error types shared between the client, the service and the viewer.
//!
//! `PriceError` distinguishes two tiers. Argument errors (`NullArgument`,
//! `InvalidArgument`) are caller contract violations and are returned before
//! any I/O happens. The remaining variants describe operational failures; the
//! client and the service collapse those into empty results, so they only
//! reach callers through the client's `try_*` methods.
use thiserror::Error;

/// Unified error type shared by the workspace crates.
#[derive(Error, Debug)]
pub enum PriceError {
    /// A required query or request object was not supplied.
    #[error("Value cannot be null. (Parameter '{0}')")]
    NullArgument(&'static str),

    /// A required field of a query or request was not supplied.
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Transport-level failure (connection, TLS, body read).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status code.
    #[error("Unexpected HTTP status {status}: {body}")]
    Status {
        /// Numeric HTTP status.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// Failure while decoding a JSON body via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Epoch-millisecond timestamp that does not map to a calendar date.
    #[error("Timestamp out of range: {0}")]
    Timestamp(f64),
}

impl PriceError {
    /// Returns `true` for caller contract violations.
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            PriceError::NullArgument(_) | PriceError::InvalidArgument(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_argument_names_the_parameter() {
        let err = PriceError::NullArgument("query");
        assert_eq!(err.to_string(), "Value cannot be null. (Parameter 'query')");
        assert!(err.is_argument_error());
    }

    #[test]
    fn invalid_argument_names_the_field() {
        let err = PriceError::InvalidArgument("currencies");
        assert_eq!(err.to_string(), "Invalid argument: currencies");
        assert!(err.is_argument_error());
    }

    #[test]
    fn operational_errors_are_not_argument_errors() {
        let err = PriceError::Status {
            status: 503,
            body: String::from("busy"),
        };
        assert_eq!(err.to_string(), "Unexpected HTTP status 503: busy");
        assert!(!err.is_argument_error());
        assert!(!PriceError::Timestamp(1e300).is_argument_error());
    }
}
