//! # State Module
//!
//! Application state for the storefront, one focused type per store.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌──────────────────┬──────────────────┐                       │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │ CatalogState │  │  CartState   │  │   ConfigState    │              │
//! │  │              │  │              │  │                  │              │
//! │  │  Arc<        │  │  Arc<Mutex<  │  │  store_name      │              │
//! │  │  Product-    │  │    Cart      │  │  currency_symbol │              │
//! │  │  Store>      │  │  >>          │  │  source          │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CatalogState: ProductStore locks internally, never across an await  │
//! │  • CartState: Protected by Arc<Mutex<T>> for exclusive access          │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The states are plain owned values handed to the shell at startup; there
//! is no global store.

mod cart;
mod catalog;
mod config;

pub use cart::CartState;
pub use catalog::CatalogState;
pub use config::ConfigState;
