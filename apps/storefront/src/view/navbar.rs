//! Navbar: store name, page links, live cart count.

use super::Route;

pub fn render_navbar(store_name: &str, cart_count: usize) -> String {
    let line = format!(
        "{}   Home ({})   Cart ({})   Cart Items: {}",
        store_name,
        Route::Home.path(),
        Route::Cart.path(),
        cart_count
    );
    let rule = "─".repeat(line.chars().count());
    format!("{}\n{}\n", line, rule)
}
