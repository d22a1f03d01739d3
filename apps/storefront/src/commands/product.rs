//! # Product Commands
//!
//! Catalog load and retrieval.
//!
//! ## Load Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Load Flow                                    │
//! │                                                                         │
//! │  Home page mounted (or "fetch" typed)                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  fetch_products(catalog)                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ProductStore: status = loading ──► source.fetch().await               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  succeeded (items replaced) │ failed (items kept) │ superseded         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  get_products(catalog) ──► CatalogSnapshot { items, status, error }    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use storefront_core::{CatalogSnapshot, Product, ProductId, Resolution};
use tracing::debug;

use crate::error::ApiError;
use crate::state::CatalogState;

/// Current `(items, status)` of the catalog.
pub fn get_products(catalog: &CatalogState) -> CatalogSnapshot {
    debug!("get_products command");
    catalog.snapshot()
}

/// Loads the catalog and waits for the outcome.
///
/// A failed load is not an error here: it is visible as
/// `status = failed` on the returned snapshot.
pub async fn fetch_products(catalog: &CatalogState) -> (Resolution, CatalogSnapshot) {
    debug!("fetch_products command");
    let resolution = catalog.store().fetch_products().await;
    (resolution, catalog.snapshot())
}

/// Looks up one loaded product. Unknown ids are `NOT_FOUND`.
pub fn get_product(catalog: &CatalogState, product_id: ProductId) -> Result<Product, ApiError> {
    debug!(product_id = %product_id, "get_product command");

    catalog
        .store()
        .find(product_id)
        .ok_or_else(|| ApiError::not_found("Product", &product_id.to_string()))
}
