//! # Client Error Types
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Client Error Categories                            │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │   Transport     │  │     Payload             │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidConfig  │  │  Transport      │  │  Parse                  │ │
//! │  │  InvalidUrl     │  │  HttpStatus     │  │                         │ │
//! │  │  ConfigLoad/Save│  │  Timeout, Io    │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  Transport and payload errors become CoreError::ProductFetchFailed      │
//! │  at the ProductStore boundary and end up as `status = failed`.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use storefront_core::CoreError;
use thiserror::Error;

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid product source URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    // =========================================================================
    // Transport Errors
    // =========================================================================
    /// The request could not be sent or the response could not be read.
    #[error("Request failed: {0}")]
    Transport(String),

    /// The source answered with a non-success status.
    #[error("Product source returned HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // =========================================================================
    // Payload Errors
    // =========================================================================
    /// The body was not a JSON list of product records.
    #[error("Malformed product response: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Parse(err.to_string())
    }
}

impl From<toml::de::Error> for ClientError {
    fn from(err: toml::de::Error) -> Self {
        ClientError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for ClientError {
    fn from(err: toml::ser::Error) -> Self {
        ClientError::ConfigSaveFailed(err.to_string())
    }
}

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        ClientError::InvalidUrl(err.to_string())
    }
}

/// Every source failure is the one recoverable domain error.
impl From<ClientError> for CoreError {
    fn from(err: ClientError) -> Self {
        CoreError::fetch_failed(err.to_string())
    }
}
