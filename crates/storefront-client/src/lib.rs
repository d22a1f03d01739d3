//! # storefront-client: Product Loading
//!
//! Fetches the catalog from a product source and owns the Product Store.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Catalog Load                                    │
//! │                                                                         │
//! │  view ── fetch_products() ──► ProductStore                              │
//! │                                  │                                      │
//! │                                  │ 1. catalog.begin_fetch()  (Loading)  │
//! │                                  │ 2. source.fetch().await              │
//! │                                  │ 3. catalog.resolve(ticket, result)   │
//! │                                  ▼                                      │
//! │                     Succeeded(items) | Failed(error) | Superseded       │
//! │                                                                         │
//! │  view ── snapshot() ─────────► (items, status) as one value            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//! - [`config`] - Source URL/file, timeout, store display settings
//! - [`source`] - `ProductSource` trait with HTTP and file implementations
//! - [`store`] - `ProductStore`, the async wrapper around `Catalog`
//! - [`error`] - `ClientError`

pub mod config;
pub mod error;
pub mod source;
pub mod store;

pub use config::{SourceSettings, StoreSettings, StorefrontConfig};
pub use error::{ClientError, ClientResult};
pub use source::{FileProductSource, HttpProductSource, ProductSource};
pub use store::ProductStore;

/// Default product source.
pub const DEFAULT_SOURCE_URL: &str = "https://fakestoreapi.com/products";
