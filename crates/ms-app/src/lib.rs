//! # ms-app
//!
//! Application services for MediaSeek: the search and detail controllers and
//! the thumbnail cache. All mutable state lives here, serialized per service
//! onto one logical execution context; UI layers subscribe to state
//! snapshots through `tokio::sync::watch` receivers.

pub mod detail;
pub mod images;
pub mod search;

pub use detail::{DetailController, DetailSnapshot};
pub use images::ImageCache;
pub use search::{SearchController, SearchSnapshot};
