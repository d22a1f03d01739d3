//! # Cart State
//!
//! Holds the Cart Store for the running app.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Shell Input              Command                 Cart State Change     │
//! │  ───────────              ───────                 ─────────────────     │
//! │                                                                         │
//! │  add 3 ──────────────────► add_to_cart() ───────► items.push(copy)     │
//! │                                                                         │
//! │  remove 3 ───────────────► remove_from_cart() ──► items.retain(id!=3)  │
//! │                                                                         │
//! │  clear ──────────────────► clear_cart() ────────► items.clear()        │
//! │                                                                         │
//! │  cart ───────────────────► get_cart() ──────────► (read only)          │
//! │                                                                         │
//! │  NOTE: All write operations acquire the Mutex lock exclusively.         │
//! │        Read operations also acquire the lock but release it quickly.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use storefront_core::Cart;

/// Thread-safe cart state.
///
/// Clones share the same cart.
#[derive(Debug, Clone)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = cart_state.with_cart(|cart| CartTotals::from(cart));
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.remove_item(id));
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut cart)
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{CartTotals, Money, Product, ProductId};

    fn test_product(id: u64, price_cents: i64) -> Product {
        Product::new(
            ProductId::new(id),
            format!("Product {}", id),
            Money::from_cents(price_cents),
            format!("https://img.example/{}.png", id),
        )
    }

    #[test]
    fn test_cart_state_starts_empty() {
        let state = CartState::new();
        assert!(state.with_cart(|c| c.is_empty()));
    }

    #[test]
    fn test_clones_share_the_cart() {
        let state = CartState::new();
        let other = state.clone();

        other.with_cart_mut(|c| {
            c.add(&test_product(1, 999));
        });

        let totals = state.with_cart(|c| CartTotals::from(c));
        assert_eq!(totals.item_count, 1);
        assert_eq!(totals.subtotal, Money::from_cents(999));
    }

    #[test]
    fn test_mutation_returns_value() {
        let state = CartState::new();
        state.with_cart_mut(|c| {
            c.add(&test_product(1, 100));
            c.add(&test_product(1, 100));
        });

        let removed = state.with_cart_mut(|c| c.remove_item(ProductId::new(1)));

        assert_eq!(removed, 2);
        assert!(state.with_cart(|c| c.is_empty()));
    }
}
