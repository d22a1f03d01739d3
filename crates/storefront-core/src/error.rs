//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  ├── CoreError        - Domain errors                                  │
//! │  └── ValidationError  - Malformed product records                      │
//! │                                                                         │
//! │  storefront-client errors (separate crate)                             │
//! │  └── ClientError      - Transport, status, parse, config failures      │
//! │                                                                         │
//! │  App errors                                                            │
//! │  └── ApiError         - What the view layer sees                       │
//! │                                                                         │
//! │  Flow: ClientError → CoreError::ProductFetchFailed → status = failed   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart mutations have no error kind: they are total over well-formed
//! products.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The catalog load failed.
    ///
    /// ## When This Occurs
    /// - The product source could not be reached
    /// - The source answered with a non-success status
    /// - The response body was not a list of product records
    /// - A record failed validation
    ///
    /// This is the only error the stores report. It is recorded
    /// on the catalog as `status = failed` and never propagated further.
    #[error("Failed to load products: {reason}")]
    ProductFetchFailed { reason: String },
}

impl CoreError {
    /// Creates a fetch failure from anything displayable.
    pub fn fetch_failed(reason: impl Into<String>) -> Self {
        CoreError::ProductFetchFailed {
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Product record validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Two records in one response share an id.
    #[error("{field} '{value}' appears more than once")]
    Duplicate { field: String, value: String },
}
