//! # Configuration State
//!
//! Display settings derived from [`StorefrontConfig`] at startup.
//!
//! ## Thread Safety
//! Read-only after initialization, so no mutex needed.

use serde::Serialize;
use storefront_client::StorefrontConfig;

/// What the view layer needs from the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (navbar logo)
    pub store_name: String,

    /// Currency symbol for prices
    pub currency_symbol: String,

    /// Where products are loaded from, for the help text
    pub source: String,
}

impl From<&StorefrontConfig> for ConfigState {
    fn from(config: &StorefrontConfig) -> Self {
        let source = match config.source_path() {
            Some(path) => path.display().to_string(),
            None => config.source_url().to_string(),
        };

        ConfigState {
            store_name: config.store.name.clone(),
            currency_symbol: config.store.currency_symbol.clone(),
            source,
        }
    }
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState::from(&StorefrontConfig::default())
    }
}
