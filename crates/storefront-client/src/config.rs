//! # Storefront Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     STOREFRONT_SOURCE_URL=https://example.com/products                 │
//! │     STOREFRONT_SOURCE_PATH=./products.json                             │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/storefront/storefront.toml (Linux)                       │
//! │     ~/Library/Application Support/com.storefront.storefront/... (macOS)│
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     https://fakestoreapi.com/products, 10s timeout                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [source]
//! url = "https://fakestoreapi.com/products"
//! # path = "./products.json"   # read a local file instead of the URL
//! timeout_secs = 10
//!
//! [store]
//! name = "Redux Store"
//! currency_symbol = "$"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{ClientError, ClientResult};
use crate::DEFAULT_SOURCE_URL;

// =============================================================================
// Source Settings
// =============================================================================

/// Where the catalog comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSettings {
    /// HTTP(S) endpoint returning a JSON array of products.
    #[serde(default = "default_source_url")]
    pub url: String,

    /// Local JSON file. When set, it is used instead of `url`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Request timeout (seconds).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_source_url() -> String {
    DEFAULT_SOURCE_URL.to_string()
}

fn default_timeout() -> u64 {
    10
}

impl Default for SourceSettings {
    fn default() -> Self {
        SourceSettings {
            url: default_source_url(),
            path: None,
            timeout_secs: default_timeout(),
        }
    }
}

// =============================================================================
// Store Settings
// =============================================================================

/// Display settings for the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Name shown in the navbar.
    #[serde(default = "default_store_name")]
    pub name: String,

    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_store_name() -> String {
    "Redux Store".to_string()
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for StoreSettings {
    fn default() -> Self {
        StoreSettings {
            name: default_store_name(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete storefront configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub source: SourceSettings,

    #[serde(default)]
    pub store: StoreSettings,
}

impl StorefrontConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from file, environment, and defaults, then
    /// validates it.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (storefront.toml)
    /// 3. Environment variables
    ///
    /// An explicitly passed path that does not exist is an error; a missing
    /// file at the default location is not.
    pub fn load(config_path: Option<PathBuf>) -> ClientResult<Self> {
        let config = Self::load_unvalidated(config_path)?;
        config.validate()?;
        Ok(config)
    }

    /// Same load order as [`StorefrontConfig::load`] without the final
    /// [`StorefrontConfig::validate`]. For callers that layer more
    /// overrides on top and validate the result themselves.
    pub fn load_unvalidated(config_path: Option<PathBuf>) -> ClientResult<Self> {
        let mut config = Self::default();

        let explicit = config_path.is_some();
        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading storefront config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else if explicit {
                return Err(ClientError::ConfigLoadFailed(format!(
                    "{} does not exist",
                    path.display()
                )));
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        Ok(config)
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> ClientResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| ClientError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Storefront config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ClientResult<()> {
        if self.source.path.is_none() {
            let url = Url::parse(&self.source.url)?;
            if url.scheme() != "http" && url.scheme() != "https" {
                return Err(ClientError::InvalidUrl(format!(
                    "Product source URL must start with http:// or https://, got: {}",
                    self.source.url
                )));
            }
        }

        if self.source.timeout_secs == 0 {
            return Err(ClientError::InvalidConfig(
                "timeout_secs must be greater than 0".into(),
            ));
        }

        if self.store.name.trim().is_empty() {
            return Err(ClientError::InvalidConfig("store name must not be empty".into()));
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Applies overrides from a key lookup (the process environment in
    /// production).
    fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("STOREFRONT_SOURCE_URL") {
            debug!(url = %url, "Overriding product source URL from environment");
            self.source.url = url;
        }

        if let Some(path) = lookup("STOREFRONT_SOURCE_PATH") {
            debug!(path = %path, "Overriding product source file from environment");
            self.source.path = Some(PathBuf::from(path));
        }

        if let Some(timeout) = lookup("STOREFRONT_TIMEOUT_SECS") {
            match timeout.parse::<u64>() {
                Ok(secs) => self.source.timeout_secs = secs,
                Err(_) => warn!(value = %timeout, "Ignoring invalid STOREFRONT_TIMEOUT_SECS"),
            }
        }

        if let Some(name) = lookup("STOREFRONT_NAME") {
            self.store.name = name;
        }

        if let Some(symbol) = lookup("STOREFRONT_CURRENCY_SYMBOL") {
            self.store.currency_symbol = symbol;
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "storefront", "storefront")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    pub fn source_url(&self) -> &str {
        &self.source.url
    }

    pub fn source_path(&self) -> Option<&PathBuf> {
        self.source.path.as_ref()
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.source.timeout_secs)
    }
}
