use serde::{Deserialize, Serialize};

/// Default number of results requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 30;

/// Content-type filter, one per result tab.
///
/// Maps onto the API's `entity` restriction parameter: `All` leaves the
/// parameter off, the others restrict the search to one entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
    All,
    Movie,
    Song,
}

impl ContentType {
    /// All content types, in tab order.
    pub const ALL: [ContentType; 3] = [ContentType::All, ContentType::Movie, ContentType::Song];

    /// Map a tab index (0/1/2) to a content type.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Position of this content type in tab order.
    pub fn index(self) -> usize {
        match self {
            ContentType::All => 0,
            ContentType::Movie => 1,
            ContentType::Song => 2,
        }
    }

    /// The API `entity` parameter value, `None` for an unrestricted search.
    pub fn entity(self) -> Option<&'static str> {
        match self {
            ContentType::All => None,
            ContentType::Movie => Some("movie"),
            ContentType::Song => Some("song"),
        }
    }

    /// Search-bar placeholder text associated with this filter.
    pub fn placeholder(self) -> &'static str {
        match self {
            ContentType::All => "Search movies and songs",
            ContentType::Movie => "Search movies",
            ContentType::Song => "Search songs",
        }
    }
}

impl Default for ContentType {
    fn default() -> Self {
        ContentType::All
    }
}

/// Immutable description of one search request.
///
/// The controller derives the next query from prior state; a query is never
/// mutated once issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub term: String,
    pub content_type: ContentType,
    /// Zero-based page cursor.
    pub page: u32,
    pub page_size: u32,
}

impl SearchQuery {
    pub fn new(term: impl Into<String>, content_type: ContentType, page: u32, page_size: u32) -> Self {
        Self {
            term: term.into(),
            content_type,
            page,
            page_size,
        }
    }

    /// Result offset sent to the API (`page * page_size`).
    pub fn offset(&self) -> u32 {
        self.page * self.page_size
    }

    /// The same query, one page further.
    pub fn next_page(&self) -> Self {
        Self {
            page: self.page + 1,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_mapping_round_trips() {
        for ct in ContentType::ALL {
            assert_eq!(ContentType::from_index(ct.index()), Some(ct));
        }
        assert_eq!(ContentType::from_index(3), None);
    }

    #[test]
    fn entity_mapping() {
        assert_eq!(ContentType::All.entity(), None);
        assert_eq!(ContentType::Movie.entity(), Some("movie"));
        assert_eq!(ContentType::Song.entity(), Some("song"));
    }

    #[test]
    fn offset_is_page_times_page_size() {
        let query = SearchQuery::new("emily", ContentType::Movie, 2, DEFAULT_PAGE_SIZE);
        assert_eq!(query.offset(), 60);
    }

    #[test]
    fn next_page_only_advances_the_cursor() {
        let query = SearchQuery::new("emily", ContentType::Song, 0, 30);
        let next = query.next_page();
        assert_eq!(next.page, 1);
        assert_eq!(next.term, query.term);
        assert_eq!(next.content_type, query.content_type);
        assert_eq!(next.page_size, query.page_size);
    }
}
