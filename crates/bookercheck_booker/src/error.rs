// --- File: crates/bookercheck_booker/src/error.rs ---
use bookercheck_common::{contract_error, external_service_error, BookercheckError};
use thiserror::Error;

/// Errors produced while talking to, or checking, the booking service.
#[derive(Error, Debug)]
pub enum BookerError {
    /// Error occurred during a booking API request
    #[error("Booking API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Unexpected status returned by the booking API
    #[error("Booking API returned an error: {message} (Status: {status_code})")]
    ApiError { status_code: u16, message: String },

    /// Error parsing a booking API response
    #[error("Failed to parse booking API response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// The auth endpoint answered without issuing a token
    #[error("Authentication rejected: {0}")]
    AuthRejected(String),

    /// Booking id unknown to the service
    #[error("Booking {0} not found")]
    NotFound(i64),

    /// A returned field did not match the value the checker sent
    #[error("Field '{field}' mismatch: expected {expected}, got {actual}")]
    FieldMismatch {
        field: String,
        expected: String,
        actual: String,
    },

    /// A deleted booking was still retrievable
    #[error("Booking {0} still retrievable after delete")]
    NotDeleted(i64),
}

/// Convert BookerError to BookercheckError
impl From<BookerError> for BookercheckError {
    fn from(err: BookerError) -> Self {
        match err {
            BookerError::RequestError(e) => {
                BookercheckError::HttpError(format!("Booking API request error: {}", e))
            }
            BookerError::ApiError {
                status_code,
                message,
            } => external_service_error(
                "restful-booker",
                format!("Status: {}, Message: {}", status_code, message),
            ),
            BookerError::ParseError(e) => {
                BookercheckError::ParseError(format!("Booking API response parse error: {}", e))
            }
            BookerError::AuthRejected(msg) => BookercheckError::AuthError(msg),
            BookerError::NotFound(id) => BookercheckError::NotFoundError(format!("booking {}", id)),
            err @ BookerError::FieldMismatch { .. } => contract_error(err),
            err @ BookerError::NotDeleted(_) => contract_error(err),
        }
    }
}
