//! # Product Store
//!
//! Owns the catalog and the source it is loaded from.
//!
//! ## Fetch Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       fetch_products()                                  │
//! │                                                                         │
//! │  lock ─► catalog.begin_fetch() ─► unlock        status = loading        │
//! │                │                                                        │
//! │                ▼                                                        │
//! │          source.fetch().await   ◄── the only suspension point           │
//! │                │                                                        │
//! │                ▼                                                        │
//! │  lock ─► catalog.resolve(ticket, result) ─► unlock                      │
//! │                                                                         │
//! │  The lock is never held across the await, so reads during the fetch     │
//! │  see `loading` with the previous item list.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use storefront_core::{
    Catalog, CatalogSnapshot, CoreError, FetchTicket, LoadStatus, Product, ProductId, Resolution,
};
use tracing::{debug, info, warn};

use crate::source::ProductSource;

/// The Product Store.
///
/// Cheap to share: wrap it in an `Arc` and hand clones to whoever issues
/// fetches.
pub struct ProductStore {
    catalog: Mutex<Catalog>,
    source: Arc<dyn ProductSource>,
}

impl std::fmt::Debug for ProductStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductStore")
            .field("source", &self.source.describe())
            .field("status", &self.status())
            .finish()
    }
}

impl ProductStore {
    /// Creates an idle, empty store reading from `source`.
    pub fn new(source: Arc<dyn ProductSource>) -> Self {
        ProductStore {
            catalog: Mutex::new(Catalog::new()),
            source,
        }
    }

    /// Loads the catalog from the source.
    ///
    /// ## Behavior
    /// - Status is `loading` as soon as this is called
    /// - Success: items replaced, status `succeeded`
    /// - Failure: items untouched, status `failed`; never returns an error
    /// - If another fetch was issued meanwhile, this result is discarded and
    ///   `Resolution::Superseded` is returned
    pub async fn fetch_products(&self) -> Resolution {
        let ticket = self.begin_fetch();
        self.finish_fetch(ticket).await
    }

    /// First half of [`fetch_products`](Self::fetch_products): marks the
    /// store `loading` and issues a ticket, without suspending.
    ///
    /// Lets a caller that spawns the read show `loading` right away.
    pub fn begin_fetch(&self) -> FetchTicket {
        let ticket = self.with_catalog_mut(Catalog::begin_fetch);
        info!(
            sequence = ticket.sequence(),
            source = %self.source.describe(),
            "Loading products"
        );
        ticket
    }

    /// Second half: reads the source and resolves `ticket`.
    ///
    /// A ticket that is already stale resolves as `Superseded` without
    /// touching the source.
    pub async fn finish_fetch(&self, ticket: FetchTicket) -> Resolution {
        if !self.with_catalog(|c| c.is_current(ticket)) {
            debug!(sequence = ticket.sequence(), "Skipping superseded product load");
            return Resolution::Superseded;
        }

        let result = self.source.fetch().await.map_err(CoreError::from);

        let resolution = self.with_catalog_mut(|catalog| catalog.resolve(ticket, result));
        match resolution {
            Resolution::Applied(LoadStatus::Succeeded) => {
                info!(
                    sequence = ticket.sequence(),
                    count = self.with_catalog(|c| c.items().len()),
                    "Products loaded"
                );
            }
            Resolution::Applied(_) => {
                let reason = self.with_catalog(|c| c.error().map(ToString::to_string));
                warn!(
                    sequence = ticket.sequence(),
                    reason = reason.as_deref().unwrap_or("unknown"),
                    "Product load failed"
                );
            }
            Resolution::Superseded => {
                debug!(sequence = ticket.sequence(), "Discarding superseded product load");
            }
        }

        resolution
    }

    /// `(items, status)` as one consistent value.
    pub fn snapshot(&self) -> CatalogSnapshot {
        self.with_catalog(Catalog::snapshot)
    }

    pub fn status(&self) -> LoadStatus {
        self.with_catalog(Catalog::status)
    }

    /// Copy of a loaded product, if the catalog has it.
    pub fn find(&self, id: ProductId) -> Option<Product> {
        self.with_catalog(|catalog| catalog.find(id).cloned())
    }

    /// Number of fetches issued so far.
    pub fn fetches_issued(&self) -> u64 {
        self.with_catalog(Catalog::fetches_issued)
    }

    /// Drops the catalog and returns to `idle`.
    pub fn reset(&self) {
        self.with_catalog_mut(Catalog::reset);
        debug!("Product store reset");
    }

    /// Location of the product source, for display.
    pub fn source_description(&self) -> String {
        self.source.describe()
    }

    /// Executes a function with read access to the catalog.
    pub fn with_catalog<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Catalog) -> R,
    {
        let catalog = self.catalog.lock().unwrap_or_else(PoisonError::into_inner);
        f(&catalog)
    }

    fn with_catalog_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Catalog) -> R,
    {
        let mut catalog = self.catalog.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::time::Duration;
    use storefront_core::Money;
    use tokio::sync::oneshot;

    use crate::error::{ClientError, ClientResult};

    type Reply = ClientResult<Vec<Product>>;

    /// A source whose answers are released by the test, one per fetch.
    struct GatedSource {
        gates: Mutex<VecDeque<oneshot::Receiver<Reply>>>,
    }

    impl GatedSource {
        fn new(count: usize) -> (Arc<Self>, Vec<oneshot::Sender<Reply>>) {
            let (senders, receivers): (Vec<_>, VecDeque<_>) =
                (0..count).map(|_| oneshot::channel()).unzip();
            let source = Arc::new(GatedSource {
                gates: Mutex::new(receivers),
            });
            (source, senders)
        }
    }

    #[async_trait]
    impl ProductSource for GatedSource {
        async fn fetch(&self) -> Reply {
            let gate = self.gates.lock().unwrap().pop_front();
            match gate {
                Some(rx) => rx
                    .await
                    .unwrap_or_else(|_| Err(ClientError::Transport("gate dropped".into()))),
                None => Err(ClientError::Transport("no more replies".into())),
            }
        }

        fn describe(&self) -> String {
            "gated".to_string()
        }
    }

    fn shirt() -> Product {
        Product::new(ProductId::new(1), "Shirt", Money::from_cents(2000), "a.png")
    }

    fn hat() -> Product {
        Product::new(ProductId::new(2), "Hat", Money::from_cents(1000), "b.png")
    }

    async fn wait_for_fetches(store: &ProductStore, count: u64) {
        tokio::time::timeout(Duration::from_secs(5), async {
            while store.fetches_issued() < count {
                tokio::task::yield_now().await;
            }
        })
        .await
        .expect("fetch was never issued");
    }

    #[tokio::test]
    async fn test_success_sets_items_and_status() {
        let (source, mut senders) = GatedSource::new(1);
        let store = ProductStore::new(source);
        assert_eq!(store.status(), LoadStatus::Idle);

        senders.remove(0).send(Ok(vec![shirt()])).unwrap();
        let resolution = store.fetch_products().await;

        assert_eq!(resolution, Resolution::Applied(LoadStatus::Succeeded));
        let snapshot = store.snapshot();
        assert_eq!(snapshot.status, LoadStatus::Succeeded);
        assert_eq!(snapshot.items, vec![shirt()]);
        assert_eq!(store.find(ProductId::new(1)), Some(shirt()));
    }

    #[tokio::test]
    async fn test_transport_error_on_first_fetch() {
        let (source, mut senders) = GatedSource::new(1);
        let store = ProductStore::new(source);

        senders
            .remove(0)
            .send(Err(ClientError::Transport("connection refused".into())))
            .unwrap();
        store.fetch_products().await;

        let snapshot = store.snapshot();
        assert_eq!(snapshot.status, LoadStatus::Failed);
        assert!(snapshot.items.is_empty());
        assert_eq!(
            snapshot.error.as_deref(),
            Some("Failed to load products: Request failed: connection refused")
        );
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_items() {
        let (source, mut senders) = GatedSource::new(2);
        let store = ProductStore::new(source);

        senders.remove(0).send(Ok(vec![shirt(), hat()])).unwrap();
        store.fetch_products().await;

        senders
            .remove(0)
            .send(Err(ClientError::Parse("expected value".into())))
            .unwrap();
        store.fetch_products().await;

        let snapshot = store.snapshot();
        assert_eq!(snapshot.status, LoadStatus::Failed);
        assert_eq!(snapshot.items, vec![shirt(), hat()]);
    }

    #[tokio::test]
    async fn test_status_is_loading_while_suspended() {
        let (source, mut senders) = GatedSource::new(1);
        let store = Arc::new(ProductStore::new(source));

        let task = tokio::spawn({
            let store = store.clone();
            async move { store.fetch_products().await }
        });
        wait_for_fetches(&store, 1).await;

        assert_eq!(store.status(), LoadStatus::Loading);
        assert!(store.snapshot().items.is_empty());

        senders.remove(0).send(Ok(vec![hat()])).unwrap();
        task.await.unwrap();
        assert_eq!(store.status(), LoadStatus::Succeeded);
    }

    #[tokio::test]
    async fn test_later_fetch_wins_when_earlier_resolves_last() {
        let (source, senders) = GatedSource::new(2);
        let store = Arc::new(ProductStore::new(source));
        let mut senders = senders.into_iter();
        let (first_tx, second_tx) = (senders.next().unwrap(), senders.next().unwrap());

        let first = tokio::spawn({
            let store = store.clone();
            async move { store.fetch_products().await }
        });
        wait_for_fetches(&store, 1).await;

        let second = tokio::spawn({
            let store = store.clone();
            async move { store.fetch_products().await }
        });
        wait_for_fetches(&store, 2).await;

        second_tx.send(Ok(vec![hat()])).unwrap();
        assert_eq!(
            second.await.unwrap(),
            Resolution::Applied(LoadStatus::Succeeded)
        );

        first_tx.send(Ok(vec![shirt()])).unwrap();
        assert_eq!(first.await.unwrap(), Resolution::Superseded);

        assert_eq!(store.snapshot().items, vec![hat()]);
        assert_eq!(store.status(), LoadStatus::Succeeded);
    }

    #[tokio::test]
    async fn test_stale_failure_does_not_clobber_pending_fetch() {
        let (source, senders) = GatedSource::new(2);
        let store = Arc::new(ProductStore::new(source));
        let mut senders = senders.into_iter();
        let (first_tx, second_tx) = (senders.next().unwrap(), senders.next().unwrap());

        let first = tokio::spawn({
            let store = store.clone();
            async move { store.fetch_products().await }
        });
        wait_for_fetches(&store, 1).await;
        let second = tokio::spawn({
            let store = store.clone();
            async move { store.fetch_products().await }
        });
        wait_for_fetches(&store, 2).await;

        first_tx
            .send(Err(ClientError::Transport("reset".into())))
            .unwrap();
        assert_eq!(first.await.unwrap(), Resolution::Superseded);
        assert_eq!(store.status(), LoadStatus::Loading);

        second_tx.send(Ok(vec![shirt()])).unwrap();
        second.await.unwrap();
        assert_eq!(store.snapshot().items, vec![shirt()]);
    }

    #[tokio::test]
    async fn test_begin_fetch_marks_loading_before_any_read() {
        let (source, mut senders) = GatedSource::new(1);
        let store = ProductStore::new(source);

        let stale = store.begin_fetch();
        assert_eq!(store.status(), LoadStatus::Loading);
        let current = store.begin_fetch();

        // The stale ticket never reaches the source, so the only gate is
        // left for the current one.
        assert_eq!(store.finish_fetch(stale).await, Resolution::Superseded);

        senders.remove(0).send(Ok(vec![hat()])).unwrap();
        assert_eq!(
            store.finish_fetch(current).await,
            Resolution::Applied(LoadStatus::Succeeded)
        );
        assert_eq!(store.snapshot().items, vec![hat()]);
    }

    #[tokio::test]
    async fn test_reset() {
        let (source, mut senders) = GatedSource::new(1);
        let store = ProductStore::new(source);
        senders.remove(0).send(Ok(vec![shirt()])).unwrap();
        store.fetch_products().await;

        store.reset();

        assert_eq!(store.status(), LoadStatus::Idle);
        assert!(store.find(ProductId::new(1)).is_none());
    }
}
