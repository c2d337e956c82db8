use async_trait::async_trait;

use crate::catalog::{Artist, MediaItem, SearchQuery};
use crate::ports::CatalogError;

/// Read-only access to the remote catalog.
///
/// One HTTP GET per call; implementations translate transport and protocol
/// failures into [`CatalogError`] and never panic.
#[async_trait]
pub trait CatalogPort: Send + Sync {
    /// Search the catalog for one page of results.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<MediaItem>, CatalogError>;

    /// Look up artist records by id. Zero or more results per id.
    async fn lookup_artist(&self, artist_id: u64) -> Result<Vec<Artist>, CatalogError>;

    /// Look up an artist's other catalog entries by artist id.
    async fn lookup_artist_works(&self, artist_id: u64) -> Result<Vec<MediaItem>, CatalogError>;
}
