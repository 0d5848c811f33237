// --- File: crates/bookercheck_common/src/lib.rs ---

// Declare modules within this crate
pub mod error; // Error handling
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities

// Re-export error types and utilities for easier access
pub use error::{config_error, contract_error, external_service_error, BookercheckError};

// Re-export the shared HTTP client for easier access
pub use http::HTTP_CLIENT;

// Re-export logging utilities for easier access
pub use logging::{init, init_with_level};
