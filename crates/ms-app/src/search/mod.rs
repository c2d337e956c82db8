//! Incremental search with per-tab pagination.
//!
//! ```text
//! UI events (text input, tab switch, scroll, retry)
//!   ↓
//! SearchController (serialized state, request generations)
//!   ↓
//! CatalogPort (one GET per page)
//!   ↓
//! SearchSnapshot published via watch channel
//! ```

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::{watch, Mutex};
use tracing::{debug, instrument, warn};

use ms_core::catalog::{ContentType, MediaItem, SearchQuery};
use ms_core::ports::{CatalogPort, RecentSearchStorePort};
use ms_core::recent::RecentSearches;
use ms_core::search::TabResults;

/// Published view of the search state: the current term, the active filter,
/// and all three result tabs.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchSnapshot {
    pub term: String,
    pub content_type: ContentType,
    pub all: TabResults,
    pub movies: TabResults,
    pub songs: TabResults,
}

impl SearchSnapshot {
    pub fn tab(&self, content_type: ContentType) -> &TabResults {
        match content_type {
            ContentType::All => &self.all,
            ContentType::Movie => &self.movies,
            ContentType::Song => &self.songs,
        }
    }

    /// The tab the active filter points at.
    pub fn active_tab(&self) -> &TabResults {
        self.tab(self.content_type)
    }

    /// Search-bar placeholder for the active filter.
    pub fn placeholder(&self) -> &'static str {
        self.content_type.placeholder()
    }
}

/// Mutable search state. Owned exclusively by the controller; every public
/// operation and every fetch completion mutates it under the same mutex,
/// which is the single serialized execution context for search.
struct SearchState {
    term: String,
    content_type: ContentType,
    tabs: [TabResults; 3],
    /// Monotonically increasing request generation, one per tab. Bumped
    /// when the tab is superseded (term change resets every tab, filter
    /// re-selection resets one); completions carrying an older generation
    /// are discarded unapplied. Tabs never invalidate each other.
    generations: [u64; 3],
    /// Last query issued per tab, kept for `retry`.
    last_issued: [Option<SearchQuery>; 3],
    recents: RecentSearches,
}

impl SearchState {
    fn new() -> Self {
        Self {
            term: String::new(),
            content_type: ContentType::All,
            tabs: [
                TabResults::default(),
                TabResults::default(),
                TabResults::default(),
            ],
            generations: [0; 3],
            last_issued: [None, None, None],
            recents: RecentSearches::default(),
        }
    }

    fn tab(&self, content_type: ContentType) -> &TabResults {
        &self.tabs[content_type.index()]
    }

    fn tab_mut(&mut self, content_type: ContentType) -> &mut TabResults {
        &mut self.tabs[content_type.index()]
    }

    fn snapshot(&self) -> SearchSnapshot {
        SearchSnapshot {
            term: self.term.clone(),
            content_type: self.content_type,
            all: self.tab(ContentType::All).clone(),
            movies: self.tab(ContentType::Movie).clone(),
            songs: self.tab(ContentType::Song).clone(),
        }
    }
}

/// The search state machine.
///
/// Coordinates the mutable search term, the content-type filter, per-tab
/// page cursors, and result accumulation across pages. Overlapping requests
/// are handled with request-generation counters: term and filter changes do
/// not cancel in-flight transport calls, since no cancel primitive is
/// guaranteed; they invalidate the eventual completion instead (fire and
/// ignore).
pub struct SearchController {
    catalog: Arc<dyn CatalogPort>,
    recent_store: Arc<dyn RecentSearchStorePort>,
    page_size: u32,
    state: Arc<Mutex<SearchState>>,
    snapshot_tx: watch::Sender<SearchSnapshot>,
}

impl SearchController {
    pub fn new(
        catalog: Arc<dyn CatalogPort>,
        recent_store: Arc<dyn RecentSearchStorePort>,
        page_size: u32,
    ) -> Self {
        let (snapshot_tx, _) = watch::channel(SearchSnapshot::default());
        Self {
            catalog,
            recent_store,
            page_size,
            state: Arc::new(Mutex::new(SearchState::new())),
            snapshot_tx,
        }
    }

    /// Subscribe to state snapshots. The receiver always holds the latest
    /// published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<SearchSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Current state snapshot.
    pub async fn snapshot(&self) -> SearchSnapshot {
        self.state.lock().await.snapshot()
    }

    /// Load the persisted recent-search history into memory.
    ///
    /// Best-effort: a store failure leaves the history empty and search
    /// fully functional.
    #[instrument(name = "search.hydrate", skip(self))]
    pub async fn hydrate(&self) {
        match self.recent_store.load().await {
            Ok(terms) => {
                let mut st = self.state.lock().await;
                st.recents = RecentSearches::from_terms(terms);
            }
            Err(err) => warn!("failed to load recent searches: {err:#}"),
        }
    }

    /// Set a new search term and fetch its first page for the active tab.
    ///
    /// No-op when the text is empty or equal to the current term. A term
    /// change resets all tabs and supersedes every in-flight request; those
    /// requests complete but their results are discarded by the generation
    /// check.
    #[instrument(name = "search.set_term", skip(self))]
    pub async fn set_search_term(&self, text: &str) {
        let (query, generation, terms) = {
            let mut st = self.state.lock().await;
            if text.is_empty() || text == st.term {
                return;
            }
            st.term = text.to_string();
            st.recents.add(text);
            for tab in &mut st.tabs {
                tab.reset();
            }
            for generation in &mut st.generations {
                *generation += 1;
            }
            let active = st.content_type;
            st.tab_mut(active).restart_loading();
            let query = SearchQuery::new(text, active, 0, self.page_size);
            st.last_issued[active.index()] = Some(query.clone());
            self.publish(&st);
            (
                query,
                st.generations[active.index()],
                st.recents.terms().to_vec(),
            )
        };
        self.persist_recents(terms);
        self.spawn_fetch(query, generation);
    }

    /// Switch the content-type filter by tab index (0/1/2).
    ///
    /// Without a term this only moves the filter (and with it the search-bar
    /// placeholder association). With a term it rewinds the chosen tab to
    /// page 0 and fetches it fresh; an in-flight fetch for that tab is
    /// superseded, other tabs are untouched.
    #[instrument(name = "search.select_content_type", skip(self))]
    pub async fn select_content_type(&self, index: usize) {
        let Some(content_type) = ContentType::from_index(index) else {
            warn!(index, "ignoring out-of-range content type index");
            return;
        };
        let fetch = {
            let mut st = self.state.lock().await;
            if st.content_type == content_type {
                return;
            }
            st.content_type = content_type;
            if st.term.is_empty() {
                self.publish(&st);
                None
            } else {
                st.generations[content_type.index()] += 1;
                let tab = st.tab_mut(content_type);
                tab.rewind_to_first_page();
                tab.restart_loading();
                let query = SearchQuery::new(st.term.clone(), content_type, 0, self.page_size);
                st.last_issued[content_type.index()] = Some(query.clone());
                self.publish(&st);
                Some((query, st.generations[content_type.index()]))
            }
        };
        if let Some((query, generation)) = fetch {
            self.spawn_fetch(query, generation);
        }
    }

    /// Fetch the next page for the active tab.
    ///
    /// No-op while a fetch for that tab is in flight, so a burst of
    /// scroll-to-bottom events issues exactly one request.
    #[instrument(name = "search.load_next_page", skip(self))]
    pub async fn load_next_page(&self) {
        let fetch = {
            let mut st = self.state.lock().await;
            if st.term.is_empty() {
                return;
            }
            let active = st.content_type;
            if !st.tab_mut(active).start_loading() {
                return;
            }
            let page = st.tab(active).current_page() + 1;
            let query = SearchQuery::new(st.term.clone(), active, page, self.page_size);
            st.last_issued[active.index()] = Some(query.clone());
            self.publish(&st);
            (query, st.generations[active.index()])
        };
        self.spawn_fetch(fetch.0, fetch.1);
    }

    /// Re-issue the last fetch for the active tab, without touching the
    /// term or pagination.
    #[instrument(name = "search.retry", skip(self))]
    pub async fn retry(&self) {
        let fetch = {
            let mut st = self.state.lock().await;
            let active = st.content_type;
            let Some(query) = st.last_issued[active.index()].clone() else {
                return;
            };
            if !st.tab_mut(active).start_loading() {
                return;
            }
            self.publish(&st);
            (query, st.generations[active.index()])
        };
        self.spawn_fetch(fetch.0, fetch.1);
    }

    /// Suggestion subset of the recent searches for the given input. Pure
    /// lookup; no network.
    pub async fn filter_suggestions(&self, text: &str) -> Vec<String> {
        self.state.lock().await.recents.filter(text)
    }

    /// The historical term at `index`, to be fed back into the search bar.
    /// Does not itself trigger a search.
    pub async fn select_recent_search(&self, index: usize) -> Option<String> {
        self.state
            .lock()
            .await
            .recents
            .get(index)
            .map(str::to_string)
    }

    /// The active tab's item at `index`.
    pub async fn select_result(&self, index: usize) -> Option<MediaItem> {
        let st = self.state.lock().await;
        st.tab(st.content_type).item(index).cloned()
    }

    fn publish(&self, st: &SearchState) {
        self.snapshot_tx.send_replace(st.snapshot());
    }

    /// Persist the recent-search list in the background. History is
    /// best-effort and must never block or fail a search.
    fn persist_recents(&self, terms: Vec<String>) {
        let store = Arc::clone(&self.recent_store);
        tokio::spawn(async move {
            if let Err(err) = store.save(&terms).await {
                warn!("failed to persist recent searches: {err:#}");
            }
        });
    }

    fn spawn_fetch(&self, query: SearchQuery, generation: u64) {
        let catalog = Arc::clone(&self.catalog);
        let state = Arc::clone(&self.state);
        let snapshot_tx = self.snapshot_tx.clone();
        tokio::spawn(async move {
            debug!(term = %query.term, page = query.page, "issuing catalog search");
            let result = catalog.search(&query).await;

            let mut st = state.lock().await;
            if st.generations[query.content_type.index()] != generation {
                debug!(
                    stale = generation,
                    current = st.generations[query.content_type.index()],
                    "discarding stale search completion"
                );
                return;
            }
            let tab = st.tab_mut(query.content_type);
            match result {
                Ok(items) => tab.apply_page(query.page, items),
                Err(err) => {
                    warn!(term = %query.term, page = query.page, "search failed: {err}");
                    tab.apply_failure(err.user_message());
                }
            }
            snapshot_tx.send_replace(st.snapshot());
        });
    }
}
