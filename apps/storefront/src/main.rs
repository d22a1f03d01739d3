//! # Storefront Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront                                       │
//! │                                                                         │
//! │  stdin ──► shell ──► commands ──► CatalogState / CartState              │
//! │                                        │                                │
//! │  stdout ◄── view (navbar, home, cart) ◄┘                                │
//! │                                                                         │
//! │  stderr ◄── tracing                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The setup is in lib.rs so it can be tested.

use clap::Parser;
use storefront_lib::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    storefront_lib::run(cli).await
}
