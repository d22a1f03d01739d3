//! # storefront-core: Pure State Containers for the Storefront
//!
//! This crate holds the two stores the storefront is built around, as pure
//! data structures with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    View Layer (apps/storefront)                 │   │
//! │  │         Navbar ──► Home (catalog) ──► Cart page                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ add / remove_item / fetch_products     │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               storefront-client (ProductStore, sources)         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ storefront-core (THIS CRATE) ★                  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  catalog  │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │  Catalog  │  │   │
//! │  │   │ LoadStatus│  │           │  │ CartTotals│  │ FetchTicket│ │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO FILES                               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, CartItem, LoadStatus)
//! - [`money`] - Money type with integer arithmetic
//! - [`cart`] - The cart list: append, remove by product id, clear
//! - [`catalog`] - The product list and its load lifecycle
//! - [`validation`] - Rules a fetched product record must satisfy
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{Cart, Money, Product, ProductId};
//!
//! let shirt = Product::new(ProductId::new(1), "Shirt", Money::from_cents(2000), "a.png");
//!
//! let mut cart = Cart::new();
//! cart.add(&shirt);
//! cart.add(&shirt);
//!
//! // No deduplication: the same product twice is two entries
//! assert_eq!(cart.len(), 2);
//!
//! cart.remove_item(ProductId::new(1));
//! assert!(cart.is_empty());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartTotals};
pub use catalog::{Catalog, CatalogSnapshot, FetchTicket, Resolution};
pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use types::*;
