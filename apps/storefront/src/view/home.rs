//! # Home Page
//!
//! ```text
//! Welcome to the Store
//!
//! Product
//! ───────
//!   idle       ──► (nothing)
//!   loading    ──► Loading...
//!   failed     ──► Error loading products
//!   succeeded  ──► one card per product, source order
//! ```

use storefront_core::{CatalogSnapshot, LoadStatus, Product};

pub const HEADING: &str = "Welcome to the Store";
pub const SECTION: &str = "Product";
pub const LOADING: &str = "Loading...";
pub const LOAD_ERROR: &str = "Error loading products";

pub fn render_home(catalog: &CatalogSnapshot, currency_symbol: &str) -> String {
    let mut out = format!("{}\n\n{}\n{}\n", HEADING, SECTION, "─".repeat(SECTION.len()));

    match catalog.status {
        LoadStatus::Idle => {}
        LoadStatus::Loading => {
            out.push_str(LOADING);
            out.push('\n');
        }
        LoadStatus::Failed => {
            out.push_str(LOAD_ERROR);
            out.push('\n');
        }
        LoadStatus::Succeeded => {
            for product in &catalog.items {
                out.push('\n');
                out.push_str(&render_card(product, currency_symbol));
            }
        }
    }

    out
}

/// Title, price, image and the shell input that adds it.
fn render_card(product: &Product, currency_symbol: &str) -> String {
    format!(
        "  [{id}] {title}\n      {price}\n      {image}\n      Add to Cart: add {id}\n",
        id = product.id,
        title = product.title,
        price = product.price.format_with(currency_symbol),
        image = product.image,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{Money, ProductId};

    fn snapshot(status: LoadStatus, items: Vec<Product>) -> CatalogSnapshot {
        CatalogSnapshot {
            items,
            status,
            error: None,
        }
    }

    fn shirt() -> Product {
        Product::new(ProductId::new(1), "Shirt", Money::from_cents(2000), "a.png")
    }

    #[test]
    fn test_idle_shows_only_headings() {
        let page = render_home(&snapshot(LoadStatus::Idle, Vec::new()), "$");
        assert_eq!(page, "Welcome to the Store\n\nProduct\n───────\n");
    }

    #[test]
    fn test_loading_and_failed_indicators() {
        let loading = render_home(&snapshot(LoadStatus::Loading, vec![shirt()]), "$");
        assert!(loading.ends_with("Loading...\n"));
        assert!(!loading.contains("Shirt"));

        let failed = render_home(&snapshot(LoadStatus::Failed, vec![shirt()]), "$");
        assert!(failed.ends_with("Error loading products\n"));
        assert!(!failed.contains("Shirt"));
    }

    #[test]
    fn test_cards_in_source_order() {
        let hat = Product::new(ProductId::new(2), "Hat", Money::from_cents(1099), "b.png");
        let page = render_home(&snapshot(LoadStatus::Succeeded, vec![shirt(), hat]), "€");

        let shirt_at = page.find("[1] Shirt").unwrap();
        let hat_at = page.find("[2] Hat").unwrap();
        assert!(shirt_at < hat_at);
        assert!(page.contains("€20.00"));
        assert!(page.contains("€10.99"));
        assert!(page.contains("b.png"));
        assert!(page.contains("Add to Cart: add 2"));
    }
}
