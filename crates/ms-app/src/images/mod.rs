//! In-memory thumbnail cache with in-flight de-duplication.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{broadcast, Mutex};
use tokio::task::AbortHandle;
use tracing::{debug, instrument};

use ms_core::image::DecodedImage;
use ms_core::ports::{ImageLoadError, ImageSourcePort};

type LoadResult = Result<Arc<DecodedImage>, ImageLoadError>;

struct InFlightLoad {
    tx: broadcast::Sender<LoadResult>,
    abort: AbortHandle,
}

struct CacheInner {
    images: HashMap<String, Arc<DecodedImage>>,
    in_flight: HashMap<String, InFlightLoad>,
}

/// Content-addressed (by URL string) cache of decoded thumbnails.
///
/// One in-flight request per distinct URL: a second `load` for a URL that is
/// already loading subscribes to the existing operation instead of issuing a
/// duplicate fetch. `cancel` removes the URL's handle and aborts the
/// underlying task; waiters observe [`ImageLoadError::Cancelled`].
///
/// The cache is unbounded and never evicts. That is acceptable only because
/// entries are small thumbnails; a bounded policy is a known gap.
pub struct ImageCache {
    source: Arc<dyn ImageSourcePort>,
    inner: Arc<Mutex<CacheInner>>,
}

impl ImageCache {
    pub fn new(source: Arc<dyn ImageSourcePort>) -> Self {
        Self {
            source,
            inner: Arc::new(Mutex::new(CacheInner {
                images: HashMap::new(),
                in_flight: HashMap::new(),
            })),
        }
    }

    /// Load the image at `url`, reusing the cache and any in-flight fetch.
    #[instrument(name = "images.load", skip(self))]
    pub async fn load(&self, url: &str) -> LoadResult {
        let mut rx = {
            let mut inner = self.inner.lock().await;
            if let Some(image) = inner.images.get(url) {
                return Ok(Arc::clone(image));
            }
            if let Some(in_flight) = inner.in_flight.get(url) {
                debug!("joining in-flight load");
                in_flight.tx.subscribe()
            } else {
                let (tx, rx) = broadcast::channel(1);
                let abort = self.spawn_load(url.to_string(), tx.clone());
                inner
                    .in_flight
                    .insert(url.to_string(), InFlightLoad { tx, abort });
                rx
            }
        };

        match rx.recv().await {
            Ok(result) => result,
            // Sender dropped without a result: the load was cancelled.
            Err(_) => Err(ImageLoadError::Cancelled),
        }
    }

    /// Cancel the in-flight load for `url`, if any.
    ///
    /// Aborts the underlying task where the transport supports it; a result
    /// that arrives anyway is discarded. Already-cached images are kept.
    #[instrument(name = "images.cancel", skip(self))]
    pub async fn cancel(&self, url: &str) {
        let mut inner = self.inner.lock().await;
        if let Some(in_flight) = inner.in_flight.remove(url) {
            debug!("aborting in-flight load");
            in_flight.abort.abort();
        }
    }

    /// The cached image for `url`, if it finished loading.
    pub async fn cached(&self, url: &str) -> Option<Arc<DecodedImage>> {
        self.inner.lock().await.images.get(url).map(Arc::clone)
    }

    fn spawn_load(&self, url: String, tx: broadcast::Sender<LoadResult>) -> AbortHandle {
        let source = Arc::clone(&self.source);
        let inner = Arc::clone(&self.inner);
        let task = tokio::spawn(async move {
            let result = source.fetch(&url).await;

            // The spawning `load` holds the lock until the in-flight entry
            // is registered, so this cannot run before registration.
            let mut inner = inner.lock().await;
            inner.in_flight.remove(&url);
            let shared = match result {
                Ok(image) => {
                    let image = Arc::new(image);
                    inner.images.insert(url, Arc::clone(&image));
                    Ok(image)
                }
                Err(err) => Err(err),
            };
            let _ = tx.send(shared);
        });
        task.abort_handle()
    }
}
