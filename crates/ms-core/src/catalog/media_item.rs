use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sparse catalog record decoded from the remote search API.
///
/// The API omits fields depending on the content type of the entry, so every
/// field is optional. Consumers must not assume any particular field is
/// present; the decoder only guarantees the filtering documented per
/// endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Record kind as reported by the API (e.g. `feature-movie`, `song`).
    pub kind: Option<String>,
    pub artist_id: Option<u64>,
    pub collection_artist_id: Option<u64>,
    pub artist_name: Option<String>,
    /// Track title. Collection-only records carry `collection_name` instead.
    pub title: Option<String>,
    pub collection_name: Option<String>,
    pub track_view_url: Option<String>,
    pub collection_view_url: Option<String>,
    pub preview_url: Option<String>,
    /// Artwork URLs by resolution (30/60/100 px).
    pub artwork_small: Option<String>,
    pub artwork_medium: Option<String>,
    pub artwork_large: Option<String>,
    pub track_price: Option<f64>,
    pub collection_price: Option<f64>,
    pub release_date: Option<DateTime<Utc>>,
    pub description: Option<String>,
    /// Track duration in milliseconds.
    pub duration_ms: Option<u64>,
    pub genre: Option<String>,
}

impl MediaItem {
    /// Identity used for de-duplication and diffing.
    ///
    /// The API provides no universal primary key across the contexts used
    /// here, so identity is the combination of the stable fields that are
    /// available.
    pub fn identity(&self) -> MediaIdentity {
        MediaIdentity {
            title: self.title.clone(),
            artist: self.artist_name.clone(),
            kind: self.kind.clone(),
        }
    }

    /// The id to use for artist lookups, preferring the track artist over
    /// the collection artist.
    pub fn artist_lookup_id(&self) -> Option<u64> {
        self.artist_id.or(self.collection_artist_id)
    }

    /// Title to display, falling back to the collection name.
    pub fn display_title(&self) -> Option<&str> {
        self.title.as_deref().or(self.collection_name.as_deref())
    }
}

/// De-duplication identity of a [`MediaItem`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaIdentity {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub kind: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artist_lookup_id_prefers_track_artist() {
        let item = MediaItem {
            artist_id: Some(11),
            collection_artist_id: Some(22),
            ..Default::default()
        };
        assert_eq!(item.artist_lookup_id(), Some(11));
    }

    #[test]
    fn artist_lookup_id_falls_back_to_collection_artist() {
        let item = MediaItem {
            collection_artist_id: Some(22),
            ..Default::default()
        };
        assert_eq!(item.artist_lookup_id(), Some(22));
    }

    #[test]
    fn identity_uses_title_artist_and_kind() {
        let a = MediaItem {
            title: Some("Interstellar".into()),
            artist_name: Some("Christopher Nolan".into()),
            kind: Some("feature-movie".into()),
            track_price: Some(9.99),
            ..Default::default()
        };
        let b = MediaItem {
            title: Some("Interstellar".into()),
            artist_name: Some("Christopher Nolan".into()),
            kind: Some("feature-movie".into()),
            track_price: Some(14.99),
            ..Default::default()
        };
        assert_eq!(a.identity(), b.identity());
    }

    #[test]
    fn display_title_falls_back_to_collection_name() {
        let item = MediaItem {
            collection_name: Some("Greatest Hits".into()),
            ..Default::default()
        };
        assert_eq!(item.display_title(), Some("Greatest Hits"));
    }
}
