//! # Domain Types
//!
//! Core domain types shared by the stores and the view layer.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    CartItem     │   │   LoadStatus    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │──►│  line_id (UUID) │   │  Idle           │       │
//! │  │  title          │   │  product (copy) │   │  Loading        │       │
//! │  │  price (Money)  │   │  added_at       │   │  Succeeded      │       │
//! │  │  image          │   └─────────────────┘   │  Failed         │       │
//! │  └─────────────────┘                         └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A `CartItem` owns a full copy of the product taken when it was added.
//! Reloading the catalog never changes what is already in the cart.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;
use uuid::Uuid;

use crate::money::Money;

// =============================================================================
// Product Identifier
// =============================================================================

/// Stable key of a catalog product, as assigned by the product source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductId(#[ts(type = "number")] u64);

impl ProductId {
    #[inline]
    pub const fn new(id: u64) -> Self {
        ProductId(id)
    }

    #[inline]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(ProductId)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        ProductId(id)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog item as returned by the product source.
///
/// ## Wire Format
/// ```json
/// {
///   "id": 1,
///   "title": "Fjallraven - Foldsack No. 1 Backpack",
///   "price": 109.95,
///   "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
///   "description": "Your perfect pack for everyday use",
///   "category": "men's clothing"
/// }
/// ```
/// Unknown fields (e.g. `rating`) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier assigned by the source.
    pub id: ProductId,

    /// Display name.
    pub title: String,

    /// Unit price. Decimal major units on the wire.
    pub price: Money,

    /// Image URL or path.
    pub image: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub category: Option<String>,
}

impl Product {
    /// Creates a product with the four fields every record carries.
    pub fn new(
        id: ProductId,
        title: impl Into<String>,
        price: Money,
        image: impl Into<String>,
    ) -> Self {
        Product {
            id,
            title: title.into(),
            price,
            image: image.into(),
            description: None,
            category: None,
        }
    }
}

// =============================================================================
// Load Status
// =============================================================================

/// Lifecycle stage of the most recent catalog load.
///
/// ## Transitions
/// ```text
///            fetch_products()
///   Idle ───────────────────────► Loading ──── ok ────► Succeeded
///                                   ▲   │
///                                   │   └──── err ───► Failed
///                                   │                     │
///                                   └── fetch_products() ─┘ (also from Succeeded)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum LoadStatus {
    /// No load has been requested yet.
    #[default]
    Idle,
    /// A load is in flight.
    Loading,
    /// The item list was populated by the most recent load.
    Succeeded,
    /// The most recent load failed; the item list is what it was before.
    Failed,
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadStatus::Idle => write!(f, "idle"),
            LoadStatus::Loading => write!(f, "loading"),
            LoadStatus::Succeeded => write!(f, "succeeded"),
            LoadStatus::Failed => write!(f, "failed"),
        }
    }
}

// =============================================================================
// Cart Item
// =============================================================================

/// One entry of the cart list.
///
/// There is no quantity field: adding a product twice yields two entries,
/// told apart by `line_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartItem {
    /// Unique key of this entry (UUID v4).
    pub line_id: String,

    /// Value copy of the catalog product at the moment of adding.
    pub product: Product,

    /// When this entry was added.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Snapshots a product into a new cart entry.
    pub fn from_product(product: &Product) -> Self {
        CartItem {
            line_id: Uuid::new_v4().to_string(),
            product: product.clone(),
            added_at: Utc::now(),
        }
    }

    /// The identifier removal matches on.
    #[inline]
    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    #[inline]
    pub fn price(&self) -> Money {
        self.product.price
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_from_source_json() {
        let json = r#"{
            "id": 1,
            "title": "Shirt",
            "price": 20,
            "image": "a.png",
            "rating": { "rate": 3.9, "count": 120 }
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.title, "Shirt");
        assert_eq!(product.price, Money::from_cents(2000));
        assert_eq!(product.image, "a.png");
        assert!(product.description.is_none());
    }

    #[test]
    fn test_product_missing_field_is_rejected() {
        let json = r#"{ "id": 1, "title": "Shirt", "image": "a.png" }"#;
        assert!(serde_json::from_str::<Product>(json).is_err());
    }

    #[test]
    fn test_product_id_parsing() {
        assert_eq!(" 7 ".parse::<ProductId>().unwrap(), ProductId::new(7));
        assert!("seven".parse::<ProductId>().is_err());
        assert!("-1".parse::<ProductId>().is_err());
    }

    #[test]
    fn test_load_status_default_and_wire_name() {
        assert_eq!(LoadStatus::default(), LoadStatus::Idle);
        assert_eq!(
            serde_json::to_string(&LoadStatus::Succeeded).unwrap(),
            r#""succeeded""#
        );
    }

    #[test]
    fn test_cart_item_is_a_copy_with_unique_line_id() {
        let mut product = Product::new(ProductId::new(1), "Shirt", Money::from_cents(2000), "a.png");
        let first = CartItem::from_product(&product);
        let second = CartItem::from_product(&product);

        product.title = "Renamed".to_string();

        assert_eq!(first.product.title, "Shirt");
        assert_eq!(first.product_id(), second.product_id());
        assert_ne!(first.line_id, second.line_id);
    }
}
