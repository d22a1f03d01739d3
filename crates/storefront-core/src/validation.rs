//! # Validation Module
//!
//! Rules a product record must satisfy before it may enter the catalog.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (serde)                                      │
//! │  ├── Every field present, right JSON type                              │
//! │  └── Price is a finite number                                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Title and image are not blank                                     │
//! │  ├── Price is not negative                                             │
//! │  └── Ids are unique within one response                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Catalog accepts the list, or the load is recorded as failed           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::validation::validate_product;
//! use storefront_core::{Money, Product, ProductId};
//!
//! let ok = Product::new(ProductId::new(1), "Shirt", Money::from_cents(2000), "a.png");
//! assert!(validate_product(&ok).is_ok());
//!
//! let blank = Product::new(ProductId::new(2), "  ", Money::from_cents(2000), "a.png");
//! assert!(validate_product(&blank).is_err());
//! ```

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::types::Product;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a single product record.
///
/// ## Rules
/// - `title` must not be blank
/// - `image` must not be blank
/// - `price` must not be negative (zero is a valid price)
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    if product.title.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }

    if product.image.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "image".to_string(),
        });
    }

    if product.price.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a whole product list as returned by one fetch.
///
/// Fails on the first bad record, or on the first id seen twice.
pub fn validate_catalog(products: &[Product]) -> ValidationResult<()> {
    let mut seen = HashSet::with_capacity(products.len());

    for product in products {
        validate_product(product)?;

        if !seen.insert(product.id) {
            return Err(ValidationError::Duplicate {
                field: "id".to_string(),
                value: product.id.to_string(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
