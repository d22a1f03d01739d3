//! # Cart Commands
//!
//! Cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐   add_to_cart    ┌──────────┐                            │
//! │  │  Empty   │─────────────────►│ In Cart  │◄──┐ add_to_cart            │
//! │  │  Cart    │                  │          │───┘ remove_from_cart       │
//! │  └──────────┘                  └──────────┘                            │
//! │       ▲                              │                                  │
//! │       └──────── clear_cart ──────────┘                                  │
//! │                 (or removing the last product)                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use storefront_core::{Cart, CartItem, CartTotals, ProductId};
use tracing::debug;

use super::product::get_product;
use crate::error::ApiError;
use crate::state::{CartState, CatalogState};

/// Cart response including items and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            items: cart.items().to_vec(),
            totals: CartTotals::from(cart),
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(cart: &CartState) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::from(c))
}

/// Adds a loaded product to the cart.
///
/// ## Behavior
/// - The product is looked up in the current catalog snapshot
/// - A value copy is appended; adding the same product again appends again
/// - Unknown id: `NOT_FOUND`, cart untouched
pub fn add_to_cart(
    catalog: &CatalogState,
    cart: &CartState,
    product_id: ProductId,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "add_to_cart command");

    let product = get_product(catalog, product_id)?;

    Ok(cart.with_cart_mut(|c| {
        c.add(&product);
        CartResponse::from(&*c)
    }))
}

/// Removes every entry for `product_id`. Unknown ids are a no-op.
pub fn remove_from_cart(cart: &CartState, product_id: ProductId) -> CartResponse {
    debug!(product_id = %product_id, "remove_from_cart command");

    cart.with_cart_mut(|c| {
        let removed = c.remove_item(product_id);
        debug!(product_id = %product_id, removed, "cart entries removed");
        CartResponse::from(&*c)
    })
}

/// Clears all items from the cart.
pub fn clear_cart(cart: &CartState) -> CartResponse {
    debug!("clear_cart command");

    cart.with_cart_mut(|c| {
        c.clear();
        CartResponse::from(&*c)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::Money;

    use crate::commands::product::fetch_products;
    use crate::commands::product::tests::{file_catalog, PRODUCTS_JSON};
    use crate::error::ErrorCode;

    fn ids(response: &CartResponse) -> Vec<u64> {
        response.items.iter().map(|i| i.product_id().get()).collect()
    }

    #[tokio::test]
    async fn test_add_in_order_with_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = file_catalog(dir.path(), PRODUCTS_JSON);
        fetch_products(&catalog).await;
        let cart = CartState::new();

        add_to_cart(&catalog, &cart, ProductId::new(1)).unwrap();
        add_to_cart(&catalog, &cart, ProductId::new(2)).unwrap();
        let response = add_to_cart(&catalog, &cart, ProductId::new(1)).unwrap();

        assert_eq!(ids(&response), vec![1, 2, 1]);
        assert_eq!(response.totals.item_count, 3);
        assert_eq!(response.totals.subtotal, Money::from_cents(5000));
    }

    #[tokio::test]
    async fn test_add_unknown_product() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = file_catalog(dir.path(), PRODUCTS_JSON);
        fetch_products(&catalog).await;
        let cart = CartState::new();

        let err = add_to_cart(&catalog, &cart, ProductId::new(42)).unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(get_cart(&cart).items.is_empty());
    }

    #[test]
    fn test_add_before_catalog_load_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = file_catalog(dir.path(), PRODUCTS_JSON);
        let cart = CartState::new();

        assert!(add_to_cart(&catalog, &cart, ProductId::new(1)).is_err());
    }

    #[tokio::test]
    async fn test_remove_and_clear() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = file_catalog(dir.path(), PRODUCTS_JSON);
        fetch_products(&catalog).await;
        let cart = CartState::new();
        for id in [1, 2, 1] {
            add_to_cart(&catalog, &cart, ProductId::new(id)).unwrap();
        }

        let response = remove_from_cart(&cart, ProductId::new(1));
        assert_eq!(ids(&response), vec![2]);

        let response = remove_from_cart(&cart, ProductId::new(7));
        assert_eq!(ids(&response), vec![2]);

        let response = clear_cart(&cart);
        assert!(response.items.is_empty());
        assert_eq!(response.totals.subtotal, Money::zero());
    }

    #[tokio::test]
    async fn test_cart_keeps_copy_after_catalog_reset() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = file_catalog(dir.path(), PRODUCTS_JSON);
        fetch_products(&catalog).await;
        let cart = CartState::new();
        add_to_cart(&catalog, &cart, ProductId::new(2)).unwrap();

        catalog.store().reset();

        let response = get_cart(&cart);
        assert_eq!(response.items[0].product.title, "Hat");
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let cart = CartState::new();
        let json = serde_json::to_value(get_cart(&cart)).unwrap();
        assert_eq!(json["totals"]["itemCount"], 0);
    }
}
