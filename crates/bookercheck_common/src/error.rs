// --- File: crates/bookercheck_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for all bookercheck errors.
///
/// This enum provides the common set of error variants the runner reports.
/// Crate-specific errors convert into it by implementing From<SpecificError>
/// next to the specific error type.
#[derive(Error, Debug)]
pub enum BookercheckError {
    /// Error occurred during an HTTP request
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred during authentication
    #[error("Authentication error: {0}")]
    AuthError(String),

    /// Error occurred due to a remote resource not being found
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// Error occurred during external service call
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    /// The remote service broke one of the checked response contracts
    #[error("Contract violation: {0}")]
    ContractError(String),
}

// Utility functions for error construction
pub fn config_error<T: fmt::Display>(message: T) -> BookercheckError {
    BookercheckError::ConfigError(message.to_string())
}

pub fn contract_error<T: fmt::Display>(message: T) -> BookercheckError {
    BookercheckError::ContractError(message.to_string())
}

pub fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> BookercheckError {
    BookercheckError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}
