//! # Cart Page
//!
//! Entries in insertion order, duplicates listed individually, then the
//! subtotal.

use crate::commands::cart::CartResponse;

pub const EMPTY_CART: &str = "Your cart is empty.";

pub fn render_cart(cart: &CartResponse, currency_symbol: &str) -> String {
    let mut out = format!("Cart\n{}\n", "─".repeat(4));

    if cart.items.is_empty() {
        out.push_str(EMPTY_CART);
        out.push('\n');
        return out;
    }

    let title_width = cart
        .items
        .iter()
        .map(|item| item.product.title.chars().count())
        .max()
        .unwrap_or(0);

    for (n, item) in cart.items.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}. {:<width$}  {}   (remove {})\n",
            n + 1,
            item.product.title,
            item.price().format_with(currency_symbol),
            item.product_id(),
            width = title_width,
        ));
    }

    let noun = if cart.totals.item_count == 1 { "item" } else { "items" };
    out.push_str(&format!(
        "\nSubtotal ({} {}): {}\n",
        cart.totals.item_count,
        noun,
        cart.totals.subtotal.format_with(currency_symbol)
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{Cart, Money, Product, ProductId};

    fn product(id: u64, title: &str, cents: i64) -> Product {
        Product::new(ProductId::new(id), title, Money::from_cents(cents), "x.png")
    }

    #[test]
    fn test_empty_cart() {
        let page = render_cart(&CartResponse::from(&Cart::new()), "$");
        assert!(page.ends_with("Your cart is empty.\n"));
    }

    #[test]
    fn test_lists_entries_and_subtotal() {
        let mut cart = Cart::new();
        cart.add(&product(1, "Shirt", 2000));
        cart.add(&product(2, "Hat", 1000));
        cart.add(&product(1, "Shirt", 2000));

        let page = render_cart(&CartResponse::from(&cart), "$");
        let lines: Vec<&str> = page.lines().collect();

        assert_eq!(lines[2], "  1. Shirt  $20.00   (remove 1)");
        assert_eq!(lines[3], "  2. Hat    $10.00   (remove 2)");
        assert_eq!(lines[4], "  3. Shirt  $20.00   (remove 1)");
        assert!(page.ends_with("Subtotal (3 items): $50.00\n"));
    }

    #[test]
    fn test_single_item_wording() {
        let mut cart = Cart::new();
        cart.add(&product(5, "Mug", 899));

        let page = render_cart(&CartResponse::from(&cart), "£");
        assert!(page.ends_with("Subtotal (1 item): £8.99\n"));
    }
}
