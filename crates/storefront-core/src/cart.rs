//! # Cart
//!
//! The ordered list of items a user has added.
//!
//! ## Cart Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Request                      Cart Change                               │
//! │  ───────                      ───────────                               │
//! │                                                                         │
//! │  add(product) ──────────────► items.push(copy of product)               │
//! │                                                                         │
//! │  remove_item(id) ───────────► items.retain(|i| i.product_id() != id)    │
//! │                                                                         │
//! │  clear() ───────────────────► items.clear()                             │
//! │                                                                         │
//! │  items() ───────────────────► (read only, insertion order)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - No deduplication: every `add` appends exactly one entry
//! - Order is insertion order and is never re-sorted
//! - `remove_item` drops *every* entry with the given product id; an id
//!   that is not in the cart is a no-op
//! - No capacity limit

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{CartItem, Product, ProductId};

/// The shopping cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Appends a value copy of `product` to the end of the cart.
    ///
    /// Returns the new entry.
    pub fn add(&mut self, product: &Product) -> &CartItem {
        self.items.push(CartItem::from_product(product));
        let last = self.items.len() - 1;
        &self.items[last]
    }

    /// Removes all entries whose product id matches.
    ///
    /// Returns how many entries were removed (zero when the id was absent).
    pub fn remove_item(&mut self, id: ProductId) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.product_id() != id);
        before - self.items.len()
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// The cart list, in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of entries (duplicates counted individually).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true if any entry holds this product.
    pub fn contains(&self, id: ProductId) -> bool {
        self.items.iter().any(|item| item.product_id() == id)
    }

    /// Sum of every entry's price, saturating at the largest [`Money`].
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(CartItem::price).sum()
    }
}

/// Cart summary for the navbar and the cart page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub item_count: usize,
    pub subtotal: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.len(),
            subtotal: cart.subtotal(),
        }
    }
}
