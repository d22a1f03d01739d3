//! # View Layer
//!
//! Renders pages as plain text from the stores. Nothing here holds state:
//! every function takes the values it draws.
//!
//! ## Page Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Redux Store   Home (/)   Cart (/cart)   Cart Items: 2    ◄── navbar   │
//! │  ───────────────────────────────────────────────────────                │
//! │                                                                         │
//! │  route "/"      ──► home::render_home(catalog snapshot)                 │
//! │  route "/cart"  ──► cart::render_cart(cart response)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Routes match case-insensitively, so `/Cart` reaches the cart page.

pub mod cart;
pub mod home;
pub mod navbar;

use std::fmt;

use storefront_core::CatalogSnapshot;

use crate::commands::cart::CartResponse;
use crate::state::ConfigState;

/// A page the storefront can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Cart,
}

impl Route {
    /// Resolves a path, ignoring case and a trailing slash.
    ///
    /// ```rust
    /// use storefront_lib::view::Route;
    ///
    /// assert_eq!(Route::from_path("/Cart"), Some(Route::Cart));
    /// assert_eq!(Route::from_path("/checkout"), None);
    /// ```
    pub fn from_path(path: &str) -> Option<Route> {
        let path = path.trim();
        let path = path.strip_suffix('/').unwrap_or(path);

        if path.is_empty() {
            Some(Route::Home)
        } else if path.eq_ignore_ascii_case("/cart") {
            Some(Route::Cart)
        } else {
            None
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Cart => "/cart",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Navbar followed by the page for `route`.
pub fn render_page(
    route: Route,
    config: &ConfigState,
    catalog: &CatalogSnapshot,
    cart: &CartResponse,
) -> String {
    let mut page = navbar::render_navbar(&config.store_name, cart.totals.item_count);
    page.push('\n');

    let body = match route {
        Route::Home => home::render_home(catalog, &config.currency_symbol),
        Route::Cart => cart::render_cart(cart, &config.currency_symbol),
    };
    page.push_str(&body);
    page
}
