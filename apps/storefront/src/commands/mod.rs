//! # Commands Module
//!
//! Every operation the view layer can request.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── product.rs  ◄─── Catalog load and lookup
//! └── cart.rs     ◄─── Cart manipulation
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the catalog
//! async fn fetch_products(catalog: &CatalogState)
//!
//! // Only needs the cart
//! fn get_cart(cart: &CartState)
//!
//! // Needs both
//! fn add_to_cart(catalog: &CatalogState, cart: &CartState, product_id: ProductId)
//! ```

pub mod cart;
pub mod product;
