//! JSON envelope decoding and HTTP status classification.
//!
//! The status policy is identical across the three lookup kinds; only the
//! artist-works lookup distinguishes 403. Individual catalog entries with
//! missing display fields are routine API data quality, not failures, and
//! are dropped silently where an endpoint requires them.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use ms_core::catalog::{Artist, MediaItem};
use ms_core::ports::CatalogError;

/// Which lookup produced the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Endpoint {
    Search,
    ArtistLookup,
    ArtistWorks,
}

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    #[serde(default)]
    results: Vec<RawMediaRecord>,
}

#[derive(Debug, Deserialize)]
struct ArtistEnvelope {
    #[serde(default)]
    results: Vec<RawArtistRecord>,
}

/// Media record as the API spells it; field names follow the wire format.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawMediaRecord {
    kind: Option<String>,
    artist_id: Option<u64>,
    collection_artist_id: Option<u64>,
    artist_name: Option<String>,
    track_name: Option<String>,
    collection_name: Option<String>,
    track_view_url: Option<String>,
    collection_view_url: Option<String>,
    preview_url: Option<String>,
    artwork_url30: Option<String>,
    artwork_url60: Option<String>,
    artwork_url100: Option<String>,
    track_price: Option<f64>,
    collection_price: Option<f64>,
    release_date: Option<DateTime<Utc>>,
    long_description: Option<String>,
    short_description: Option<String>,
    track_time_millis: Option<u64>,
    primary_genre_name: Option<String>,
}

impl RawMediaRecord {
    /// A related work is only rendered when its display fields are all
    /// present; partial entries are filtered, not surfaced as errors.
    fn has_related_work_fields(&self) -> bool {
        self.collection_name.is_some()
            && self.collection_view_url.is_some()
            && self.artwork_url100.is_some()
            && self.collection_price.is_some()
            && self.primary_genre_name.is_some()
    }
}

impl From<RawMediaRecord> for MediaItem {
    fn from(raw: RawMediaRecord) -> Self {
        MediaItem {
            kind: raw.kind,
            artist_id: raw.artist_id,
            collection_artist_id: raw.collection_artist_id,
            artist_name: raw.artist_name,
            title: raw.track_name,
            collection_name: raw.collection_name,
            track_view_url: raw.track_view_url,
            collection_view_url: raw.collection_view_url,
            preview_url: raw.preview_url,
            artwork_small: raw.artwork_url30,
            artwork_medium: raw.artwork_url60,
            artwork_large: raw.artwork_url100,
            track_price: raw.track_price,
            collection_price: raw.collection_price,
            release_date: raw.release_date,
            description: raw.long_description.or(raw.short_description),
            duration_ms: raw.track_time_millis,
            genre: raw.primary_genre_name,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawArtistRecord {
    artist_type: Option<String>,
    artist_name: Option<String>,
    artist_view_url: Option<String>,
    artist_link_url: Option<String>,
    primary_genre_name: Option<String>,
}

impl RawArtistRecord {
    fn into_artist(self) -> Option<Artist> {
        Some(Artist {
            kind: self.artist_type?,
            name: self.artist_name?,
            link: self.artist_view_url.or(self.artist_link_url)?,
            genre: self.primary_genre_name,
        })
    }
}

/// Decode a search response body for the given HTTP status.
pub(crate) fn decode_search(status: u16, body: &[u8]) -> Result<Vec<MediaItem>, CatalogError> {
    match status {
        200 => {
            let envelope: SearchEnvelope = parse(body)?;
            Ok(envelope.results.into_iter().map(MediaItem::from).collect())
        }
        204 => Ok(Vec::new()),
        other => Err(status_error(other, Endpoint::Search)),
    }
}

/// Decode an artist lookup response body for the given HTTP status.
pub(crate) fn decode_artist_lookup(status: u16, body: &[u8]) -> Result<Vec<Artist>, CatalogError> {
    match status {
        200 => {
            let envelope: ArtistEnvelope = parse(body)?;
            Ok(envelope
                .results
                .into_iter()
                .filter_map(RawArtistRecord::into_artist)
                .collect())
        }
        204 => Ok(Vec::new()),
        other => Err(status_error(other, Endpoint::ArtistLookup)),
    }
}

/// Decode an artist-works response body for the given HTTP status.
///
/// The first element of the result list is the seed entity itself, not a
/// related work, and is dropped. Remaining elements missing any required
/// display field are filtered out silently.
pub(crate) fn decode_artist_works(
    status: u16,
    body: &[u8],
) -> Result<Vec<MediaItem>, CatalogError> {
    match status {
        200 => {
            let envelope: SearchEnvelope = parse(body)?;
            Ok(envelope
                .results
                .into_iter()
                .skip(1)
                .filter(RawMediaRecord::has_related_work_fields)
                .map(MediaItem::from)
                .collect())
        }
        204 => Ok(Vec::new()),
        other => Err(status_error(other, Endpoint::ArtistWorks)),
    }
}

fn parse<T: DeserializeOwned>(body: &[u8]) -> Result<T, CatalogError> {
    serde_json::from_slice(body).map_err(|err| CatalogError::DecodingError(err.to_string()))
}

fn status_error(status: u16, endpoint: Endpoint) -> CatalogError {
    match status {
        400 => CatalogError::InvalidRequest,
        403 if endpoint == Endpoint::ArtistWorks => CatalogError::Forbidden,
        404 => CatalogError::NotFound,
        429 => CatalogError::TooManyRequests,
        500 => CatalogError::InternalServerError,
        _ => CatalogError::UnknownError,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEARCH_BODY: &str = r#"{
        "resultCount": 2,
        "results": [
            {
                "kind": "feature-movie",
                "artistId": 11,
                "artistName": "Christopher Nolan",
                "trackName": "Interstellar",
                "trackViewUrl": "https://example.com/interstellar",
                "artworkUrl100": "https://example.com/interstellar100.jpg",
                "trackPrice": 14.99,
                "releaseDate": "2014-11-05T08:00:00Z",
                "longDescription": "A team of explorers...",
                "trackTimeMillis": 10140000,
                "primaryGenreName": "Sci-Fi"
            },
            {
                "kind": "song",
                "trackName": "Time"
            }
        ]
    }"#;

    #[test]
    fn search_decodes_sparse_records_in_order() {
        let items = decode_search(200, SEARCH_BODY.as_bytes()).unwrap();
        assert_eq!(items.len(), 2);

        let movie = &items[0];
        assert_eq!(movie.title.as_deref(), Some("Interstellar"));
        assert_eq!(movie.artist_id, Some(11));
        assert_eq!(
            movie.artwork_large.as_deref(),
            Some("https://example.com/interstellar100.jpg")
        );
        assert_eq!(movie.duration_ms, Some(10_140_000));
        assert_eq!(movie.description.as_deref(), Some("A team of explorers..."));
        assert_eq!(movie.genre.as_deref(), Some("Sci-Fi"));

        let song = &items[1];
        assert_eq!(song.title.as_deref(), Some("Time"));
        assert_eq!(song.artist_id, None);
        assert_eq!(song.release_date, None);
    }

    #[test]
    fn search_falls_back_to_short_description() {
        let body = r#"{"results": [{"trackName": "x", "shortDescription": "brief"}]}"#;
        let items = decode_search(200, body.as_bytes()).unwrap();
        assert_eq!(items[0].description.as_deref(), Some("brief"));
    }

    #[test]
    fn no_content_is_an_empty_result_not_an_error() {
        assert_eq!(decode_search(204, b"").unwrap(), Vec::new());
        assert_eq!(decode_artist_lookup(204, b"").unwrap(), Vec::new());
        assert_eq!(decode_artist_works(204, b"").unwrap(), Vec::new());
    }

    #[test]
    fn malformed_body_is_a_decoding_error() {
        let err = decode_search(200, b"not json").unwrap_err();
        assert!(matches!(err, CatalogError::DecodingError(_)));
    }

    #[test]
    fn status_codes_map_to_the_error_taxonomy() {
        assert_eq!(
            decode_search(400, b"").unwrap_err(),
            CatalogError::InvalidRequest
        );
        assert_eq!(decode_search(404, b"").unwrap_err(), CatalogError::NotFound);
        assert_eq!(
            decode_search(429, b"").unwrap_err(),
            CatalogError::TooManyRequests
        );
        assert_eq!(
            decode_search(500, b"").unwrap_err(),
            CatalogError::InternalServerError
        );
        assert_eq!(
            decode_search(418, b"").unwrap_err(),
            CatalogError::UnknownError
        );
    }

    #[test]
    fn forbidden_is_only_distinguished_for_artist_works() {
        assert_eq!(
            decode_artist_works(403, b"").unwrap_err(),
            CatalogError::Forbidden
        );
        assert_eq!(
            decode_search(403, b"").unwrap_err(),
            CatalogError::UnknownError
        );
        assert_eq!(
            decode_artist_lookup(403, b"").unwrap_err(),
            CatalogError::UnknownError
        );
    }

    #[test]
    fn artist_lookup_maps_wire_names_and_filters_partial_records() {
        let body = r#"{
            "results": [
                {
                    "artistType": "Artist",
                    "artistName": "Adele",
                    "artistLinkUrl": "https://example.com/adele",
                    "primaryGenreName": "Pop"
                },
                {
                    "artistType": "Artist",
                    "artistName": "Nameless"
                }
            ]
        }"#;
        let artists = decode_artist_lookup(200, body.as_bytes()).unwrap();
        assert_eq!(artists.len(), 1);
        assert_eq!(artists[0].name, "Adele");
        assert_eq!(artists[0].link, "https://example.com/adele");
        assert_eq!(artists[0].genre.as_deref(), Some("Pop"));
    }

    #[test]
    fn artist_lookup_tolerates_a_missing_result_count() {
        let body = r#"{"results": []}"#;
        assert!(decode_artist_lookup(200, body.as_bytes())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn artist_works_drops_the_seed_entity_and_partial_entries() {
        let body = r#"{
            "resultCount": 3,
            "results": [
                {"artistType": "Artist", "artistName": "Adele"},
                {
                    "collectionName": "21",
                    "collectionViewUrl": "https://example.com/21",
                    "artworkUrl100": "https://example.com/21.jpg",
                    "collectionPrice": 9.99,
                    "primaryGenreName": "Pop"
                },
                {
                    "collectionName": "19",
                    "collectionViewUrl": "https://example.com/19",
                    "collectionPrice": 9.99
                }
            ]
        }"#;
        let works = decode_artist_works(200, body.as_bytes()).unwrap();
        assert_eq!(works.len(), 1);
        assert_eq!(works[0].collection_name.as_deref(), Some("21"));
    }

    #[test]
    fn artist_works_with_only_the_seed_entity_is_empty() {
        let body = r#"{"resultCount": 1, "results": [{"artistName": "Adele"}]}"#;
        assert!(decode_artist_works(200, body.as_bytes()).unwrap().is_empty());
    }
}
