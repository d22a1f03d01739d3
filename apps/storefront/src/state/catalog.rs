//! # Catalog State
//!
//! Holds the Product Store. Fetches run as spawned tasks, so the store is
//! shared through an `Arc`.

use std::sync::Arc;

use storefront_client::ProductStore;
use storefront_core::CatalogSnapshot;

#[derive(Debug, Clone)]
pub struct CatalogState {
    store: Arc<ProductStore>,
}

impl CatalogState {
    pub fn new(store: ProductStore) -> Self {
        CatalogState {
            store: Arc::new(store),
        }
    }

    /// Shared handle for tasks that outlive the caller.
    pub fn store(&self) -> &Arc<ProductStore> {
        &self.store
    }

    pub fn snapshot(&self) -> CatalogSnapshot {
        self.store.snapshot()
    }
}
