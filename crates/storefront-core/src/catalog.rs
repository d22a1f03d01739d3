//! # Catalog
//!
//! The product list and the lifecycle of the load that fills it.
//!
//! This is the pure half of the Product Store: it never performs the fetch,
//! it only records that one started and decides what its result does.
//!
//! ## Fetch Tickets
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Overlapping Fetches                                  │
//! │                                                                         │
//! │  begin_fetch() ──► ticket #1 ─────────────── resolves late ──┐          │
//! │                                                              │          │
//! │  begin_fetch() ──► ticket #2 ── resolves ──► Applied         │          │
//! │                                                              ▼          │
//! │                                             Superseded (discarded)      │
//! │                                                                         │
//! │  Only the most recently issued ticket may change the catalog.           │
//! │  A stale result never overwrites a newer one, whatever the order in     │
//! │  which the two requests complete.                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - `status() == Succeeded` only if `items()` was set by the latest fetch
//! - `status() == Failed` implies `items()` is what it was before that fetch
//! - `items()` and `status()` are read from one place, so a snapshot is
//!   always a consistent pair

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::types::{LoadStatus, Product, ProductId};
use crate::validation::validate_catalog;

/// Identifies one call to [`Catalog::begin_fetch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(u64);

impl FetchTicket {
    /// Sequence number of the fetch (1 for the first).
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

/// What [`Catalog::resolve`] did with a fetch result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The result belonged to the latest fetch and is now the catalog state.
    Applied(LoadStatus),
    /// A newer fetch was issued (or the catalog was reset); the result was
    /// dropped without touching the catalog.
    Superseded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum LoadState {
    Idle,
    Loading(FetchTicket),
    Succeeded,
    Failed(CoreError),
}

/// Product list plus load state.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Product>,
    state: LoadState,
    issued: u64,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Creates an empty, idle catalog.
    pub fn new() -> Self {
        Catalog {
            items: Vec::new(),
            state: LoadState::Idle,
            issued: 0,
        }
    }

    /// Records the start of a fetch and returns its ticket.
    ///
    /// Status becomes `Loading` immediately. Any earlier ticket is now stale.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued += 1;
        let ticket = FetchTicket(self.issued);
        self.state = LoadState::Loading(ticket);
        ticket
    }

    /// Returns true if `ticket` is the fetch the catalog is waiting on.
    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        matches!(self.state, LoadState::Loading(current) if current == ticket)
    }

    /// Applies the outcome of the fetch identified by `ticket`.
    ///
    /// ## Behavior
    /// - Stale ticket: nothing changes, returns `Superseded`
    /// - `Ok(items)` that pass validation: items replaced in source order,
    ///   status `Succeeded`
    /// - `Ok(items)` with a bad record, or `Err(_)`: items untouched,
    ///   status `Failed`
    pub fn resolve(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Product>, CoreError>,
    ) -> Resolution {
        if !self.is_current(ticket) {
            return Resolution::Superseded;
        }

        let validated = result.and_then(|items| {
            validate_catalog(&items)
                .map(|()| items)
                .map_err(|e| CoreError::fetch_failed(format!("invalid product record: {}", e)))
        });

        match validated {
            Ok(items) => {
                self.items = items;
                self.state = LoadState::Succeeded;
            }
            Err(error) => {
                self.state = LoadState::Failed(error);
            }
        }

        Resolution::Applied(self.status())
    }

    /// Drops the product list and returns to `Idle`.
    ///
    /// Any fetch still in flight becomes stale.
    pub fn reset(&mut self) {
        self.items.clear();
        self.state = LoadState::Idle;
    }

    pub fn status(&self) -> LoadStatus {
        match self.state {
            LoadState::Idle => LoadStatus::Idle,
            LoadState::Loading(_) => LoadStatus::Loading,
            LoadState::Succeeded => LoadStatus::Succeeded,
            LoadState::Failed(_) => LoadStatus::Failed,
        }
    }

    /// Products in source order.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// The failure of the latest fetch, if it failed.
    pub fn error(&self) -> Option<&CoreError> {
        match &self.state {
            LoadState::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Looks up a loaded product by id.
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.items.iter().find(|p| p.id == id)
    }

    /// Number of fetches issued so far.
    pub fn fetches_issued(&self) -> u64 {
        self.issued
    }

    /// Copies out `(items, status)` as one consistent value.
    pub fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            items: self.items.clone(),
            status: self.status(),
            error: self.error().map(ToString::to_string),
        }
    }
}

/// Read-side view of the catalog handed to the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CatalogSnapshot {
    pub items: Vec<Product>,
    pub status: LoadStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub error: Option<String>,
}
