//! # Storefront Library
//!
//! Core library for the terminal storefront. `main.rs` parses flags and
//! calls [`run`].
//!
//! ## Module Organization
//! ```text
//! storefront_lib/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── cli.rs          ◄─── Command-line flags
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── catalog.rs  ◄─── Product Store handle
//! │   ├── cart.rs     ◄─── Cart Store
//! │   └── config.rs   ◄─── Display configuration
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── Catalog load/lookup commands
//! │   └── cart.rs     ◄─── Cart manipulation commands
//! ├── view/           ◄─── Navbar, home page, cart page, routes
//! ├── shell.rs        ◄─── Input parsing and the event loop
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod shell;
pub mod state;
pub mod view;

use std::error::Error;

use storefront_client::{source, ClientResult, ProductStore, StorefrontConfig};
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use state::{CartState, CatalogState, ConfigState};

/// Runs the storefront on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: info,storefront=debug; override with RUST_LOG            │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults → storefront.toml → STOREFRONT_* env → CLI flags         │
/// │                                                                         │
/// │  3. Build Product Source ─────────────────────────────────────────────► │
/// │     • file when a path is set, HTTP otherwise                           │
/// │                                                                         │
/// │  4. Initialize State Objects ─────────────────────────────────────────► │
/// │     • CatalogState: idle Product Store                                  │
/// │     • CartState: empty cart                                             │
/// │     • ConfigState: store name, currency                                 │
/// │                                                                         │
/// │  5. Run Shell ────────────────────────────────────────────────────────► │
/// │     • open Home (starts a load unless --no-fetch)                       │
/// │     • read commands until quit or end of input                          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    init_tracing();

    info!("Starting storefront");

    let config = resolve_config(&cli)?;
    let product_source = source::from_config(&config)?;
    info!(source = %product_source.describe(), "Product source configured");

    let catalog = CatalogState::new(ProductStore::new(product_source));
    let cart = CartState::new();
    let config_state = ConfigState::from(&config);
    info!("State initialized");

    let (shell, fetches) = shell::Shell::new(config_state, catalog, cart, !cli.no_fetch);

    let input = BufReader::new(tokio::io::stdin());
    let mut output = tokio::io::stdout();
    shell::run_shell(shell, fetches, input, &mut output).await?;

    Ok(())
}

/// Loads the configuration and applies command-line overrides on top.
///
/// Validation runs once, on the merged result, so a flag can replace a bad
/// source setting from the file or environment.
pub fn resolve_config(cli: &Cli) -> ClientResult<StorefrontConfig> {
    let mut config = StorefrontConfig::load_unvalidated(cli.config.clone())?;
    apply_cli_overrides(&mut config, cli);
    config.validate()?;
    Ok(config)
}

/// Flags beat every other source. An explicit URL also drops a configured
/// file so that the URL is what gets read.
fn apply_cli_overrides(config: &mut StorefrontConfig, cli: &Cli) {
    if let Some(url) = &cli.source_url {
        config.source.url = url.clone();
        config.source.path = None;
    }

    if let Some(path) = &cli.source_file {
        config.source.path = Some(path.clone());
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront=trace` - Show trace for storefront crates only
/// - Default: `info,storefront=debug`
///
/// Logs go to stderr; stdout carries the rendered pages.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
