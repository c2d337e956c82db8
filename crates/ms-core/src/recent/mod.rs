//! Recent-search history: ordered, de-duplicated, capacity-bounded.
//!
//! The contract (capacity, de-dup, most-recent-first) lives here, not in the
//! storage adapter, so it is testable without any persistence in place.

use serde::{Deserialize, Serialize};

/// Maximum number of terms kept in the history.
pub const RECENT_SEARCH_CAPACITY: usize = 5;

/// Ordered list of recent search terms, most-recent-first.
///
/// Re-adding an existing term moves it to the front instead of duplicating
/// it; adding beyond capacity evicts the oldest term.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentSearches {
    terms: Vec<String>,
}

impl RecentSearches {
    /// Rebuild from persisted terms, enforcing the contract on load in case
    /// the stored list was written by an older version or edited by hand.
    pub fn from_terms(terms: Vec<String>) -> Self {
        let mut recents = Self::default();
        for term in terms.into_iter().rev() {
            recents.add(&term);
        }
        recents
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.terms.get(index).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Record a term as the most recent search.
    pub fn add(&mut self, term: &str) {
        if term.is_empty() {
            return;
        }
        self.terms.retain(|t| t != term);
        self.terms.insert(0, term.to_string());
        self.terms.truncate(RECENT_SEARCH_CAPACITY);
    }

    /// Suggestion subset for the given input.
    ///
    /// Empty input returns the full history; otherwise the case-insensitive
    /// substring matches, preserving recency order.
    pub fn filter(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return self.terms.clone();
        }
        let needle = text.to_lowercase();
        self.terms
            .iter()
            .filter(|t| t.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recents(terms: &[&str]) -> RecentSearches {
        let mut r = RecentSearches::default();
        for term in terms.iter().rev() {
            r.add(term);
        }
        r
    }

    #[test]
    fn add_puts_newest_first() {
        let r = recents(&["b", "a"]);
        assert_eq!(r.terms(), ["b", "a"]);
    }

    #[test]
    fn re_adding_moves_to_front_without_duplicate() {
        let mut r = recents(&["c", "b", "a"]);
        r.add("a");
        assert_eq!(r.terms(), ["a", "c", "b"]);
    }

    #[test]
    fn capacity_evicts_oldest() {
        let mut r = recents(&["e", "d", "c", "b", "a"]);
        r.add("f");
        assert_eq!(r.terms(), ["f", "e", "d", "c", "b"]);
    }

    #[test]
    fn empty_terms_are_ignored() {
        let mut r = recents(&["a"]);
        r.add("");
        assert_eq!(r.terms(), ["a"]);
    }

    #[test]
    fn filter_empty_returns_full_history() {
        let r = recents(&["Emily", "Dunkirk"]);
        assert_eq!(r.filter(""), ["Emily", "Dunkirk"]);
    }

    #[test]
    fn filter_matches_case_insensitive_substrings() {
        let r = recents(&["Emily in Paris", "Dunkirk", "family"]);
        assert_eq!(r.filter("MIL"), ["Emily in Paris", "family"]);
        assert!(r.filter("xyz").is_empty());
    }

    #[test]
    fn from_terms_enforces_cap_and_dedup() {
        let r = RecentSearches::from_terms(vec![
            "a".into(),
            "b".into(),
            "a".into(),
            "c".into(),
            "d".into(),
            "e".into(),
            "f".into(),
        ]);
        assert_eq!(r.terms().len(), RECENT_SEARCH_CAPACITY);
        assert_eq!(r.terms()[0], "a");
    }
}
