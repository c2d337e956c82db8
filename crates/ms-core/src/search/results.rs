use serde::{Deserialize, Serialize};

use crate::catalog::MediaItem;
use crate::search::Lifecycle;

/// Accumulated result state of one content-type tab.
///
/// Items are append-only across pages and reset only on a new term or
/// filter change. The lifecycle guards against overlapping fetches for the
/// same tab; cross-tab fetches are independent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TabResults {
    items: Vec<MediaItem>,
    current_page: u32,
    lifecycle: Lifecycle,
}

impl TabResults {
    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&MediaItem> {
        self.items.get(index)
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    pub fn is_loading(&self) -> bool {
        self.lifecycle.is_loading()
    }

    /// Try to start a fetch, honoring the `Loading` guard.
    ///
    /// Returns `false` (and changes nothing) when a fetch for this tab is
    /// already in flight.
    pub fn start_loading(&mut self) -> bool {
        match self.lifecycle.start_loading() {
            Some(next) => {
                self.lifecycle = next;
                true
            }
            None => {
                #[cfg(feature = "tracing")]
                tracing::warn!("fetch requested while tab is already loading");
                false
            }
        }
    }

    /// Force a fetch start, bypassing the guard.
    ///
    /// Used when a newer request generation supersedes the in-flight fetch
    /// (term or filter change); the old completion is discarded by the
    /// generation check, not by this state.
    pub fn restart_loading(&mut self) {
        self.lifecycle = Lifecycle::Loading;
    }

    /// Apply a successful page of results.
    ///
    /// Page 0 replaces the accumulated items, later pages append in API
    /// order. The cursor follows the applied page.
    pub fn apply_page(&mut self, page: u32, items: Vec<MediaItem>) {
        if page == 0 {
            self.items = items;
        } else {
            self.items.extend(items);
        }
        self.current_page = page;
        self.lifecycle = self.lifecycle.on_success();
    }

    /// Apply a failed fetch. Accumulated items stay visible; there is no
    /// rollback of previously applied pages.
    pub fn apply_failure(&mut self, message: impl Into<String>) {
        self.lifecycle = self.lifecycle.on_failure(message);
    }

    /// Rewind the page cursor without dropping accumulated items.
    ///
    /// Used on filter re-selection: the next successful page-0 fetch
    /// replaces the items; until then the previous results stay visible.
    pub fn rewind_to_first_page(&mut self) {
        self.current_page = 0;
    }

    /// Reset to the initial state (new term or filter change).
    pub fn reset(&mut self) {
        self.items.clear();
        self.current_page = 0;
        self.lifecycle = self.lifecycle.reset();
    }
}
