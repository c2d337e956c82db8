//! Item detail: the selected media item joined with its artist and the
//! artist's other catalog entries.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::{watch, Mutex};
use tracing::{debug, instrument};

use ms_core::catalog::{Artist, MediaItem};
use ms_core::ports::CatalogPort;
use ms_core::search::Lifecycle;

/// Published view of the detail state.
#[derive(Debug, Clone, Serialize)]
pub struct DetailSnapshot {
    pub item: MediaItem,
    pub artists: Vec<Artist>,
    pub related_works: Vec<MediaItem>,
    pub lifecycle: Lifecycle,
}

/// Resolves a selected item's artist info and the artist's other works.
///
/// The two lookups run concurrently and join all-or-nothing: a snapshot is
/// published only after both complete, `Loaded` only when both succeed, and
/// the first encountered failure's message otherwise. Partial success is
/// never surfaced.
pub struct DetailController {
    catalog: Arc<dyn CatalogPort>,
    item: MediaItem,
    /// Serializes fetches; snapshots are only published under this lock.
    fetch_lock: Mutex<()>,
    snapshot_tx: watch::Sender<DetailSnapshot>,
}

impl DetailController {
    pub fn new(catalog: Arc<dyn CatalogPort>, item: MediaItem) -> Self {
        let initial = DetailSnapshot {
            item: item.clone(),
            artists: Vec::new(),
            related_works: Vec::new(),
            lifecycle: Lifecycle::Idle,
        };
        let (snapshot_tx, _) = watch::channel(initial);
        Self {
            catalog,
            item,
            fetch_lock: Mutex::new(()),
            snapshot_tx,
        }
    }

    /// Subscribe to state snapshots.
    pub fn subscribe(&self) -> watch::Receiver<DetailSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Current state snapshot.
    pub fn snapshot(&self) -> DetailSnapshot {
        self.snapshot_tx.borrow().clone()
    }

    /// Resolve the artist and related works for the selected item.
    ///
    /// An item carrying neither an artist id nor a collection-artist id has
    /// no traceable artist; it yields `Loaded` with empty lists immediately
    /// and without touching the network.
    #[instrument(name = "detail.fetch", skip(self))]
    pub async fn fetch(&self) {
        let _guard = self.fetch_lock.lock().await;

        let Some(artist_id) = self.item.artist_lookup_id() else {
            debug!("item has no artist id; yielding terminal loaded state");
            self.publish(Vec::new(), Vec::new(), Lifecycle::Loaded);
            return;
        };

        self.publish(Vec::new(), Vec::new(), Lifecycle::Loading);
        let (artists, works) = futures::join!(
            self.catalog.lookup_artist(artist_id),
            self.catalog.lookup_artist_works(artist_id)
        );

        match (artists, works) {
            (Ok(artists), Ok(works)) => self.publish(artists, works, Lifecycle::Loaded),
            (Err(err), _) => {
                self.publish(Vec::new(), Vec::new(), Lifecycle::Error(err.user_message()))
            }
            (_, Err(err)) => {
                self.publish(Vec::new(), Vec::new(), Lifecycle::Error(err.user_message()))
            }
        }
    }

    /// Re-run both lookups from scratch.
    #[instrument(name = "detail.retry", skip(self))]
    pub async fn retry_fetch(&self) {
        self.fetch().await;
    }

    fn publish(&self, artists: Vec<Artist>, related_works: Vec<MediaItem>, lifecycle: Lifecycle) {
        self.snapshot_tx.send_replace(DetailSnapshot {
            item: self.item.clone(),
            artists,
            related_works,
            lifecycle,
        });
    }
}
