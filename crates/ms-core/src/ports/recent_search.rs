use async_trait::async_trait;

/// Persistence for the recent-search term list.
///
/// The adapter stores a plain string list under a fixed key; the ordering,
/// capacity, and de-duplication contract lives in
/// [`crate::recent::RecentSearches`], not here.
#[async_trait]
pub trait RecentSearchStorePort: Send + Sync {
    async fn load(&self) -> anyhow::Result<Vec<String>>;
    async fn save(&self, terms: &[String]) -> anyhow::Result<()>;
}
