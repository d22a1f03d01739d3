//! # API Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  Shell                        Commands                                  │
//! │  ─────                        ────────                                  │
//! │                                                                         │
//! │  "add 42"                                                               │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  add_to_cart(catalog, cart, 42)                                  │  │
//! │  │  Result<CartResponse, ApiError>                                  │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Not in catalog? ─── ApiError::not_found (NOT_FOUND) ───────────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Shell prints:  Error: Product not found: 42                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Fetch failures never reach this type: the Product Store records them as
//! `status = failed` and the home page shows the indicator.

use serde::Serialize;

use crate::shell::ParseCommandError;

/// API error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: 42"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Shell input could not be understood
    InvalidCommand,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }
}

impl From<ParseCommandError> for ApiError {
    fn from(err: ParseCommandError) -> Self {
        ApiError::new(ErrorCode::InvalidCommand, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_code_and_message() {
        let err = ApiError::not_found("Product", "42");
        let json = serde_json::to_value(&err).unwrap();

        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Product not found: 42");
    }

    #[test]
    fn test_from_parse_error() {
        let err: ApiError = ParseCommandError::MissingPath.into();
        assert_eq!(err.code, ErrorCode::InvalidCommand);
        assert_eq!(err.message, "goto needs a path");
    }

    #[test]
    fn test_display_includes_code() {
        let err = ApiError::new(ErrorCode::InvalidCommand, "Unknown command: dance");
        assert_eq!(err.to_string(), "[InvalidCommand] Unknown command: dance");
    }
}
