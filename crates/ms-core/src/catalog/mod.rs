//! Catalog domain: media records, artists, and the search query value object.

mod artist;
mod media_item;
mod query;

pub use artist::Artist;
pub use media_item::{MediaIdentity, MediaItem};
pub use query::{ContentType, SearchQuery, DEFAULT_PAGE_SIZE};
