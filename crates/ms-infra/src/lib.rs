//! # ms-infra
//!
//! Infrastructure adapters for MediaSeek: the reqwest-backed catalog client
//! and response decoder, the JSON-file recent-search store, and the HTTP
//! thumbnail source.

pub mod catalog;
pub mod image;
pub mod recent;

pub use catalog::HttpCatalogClient;
pub use image::HttpImageSource;
pub use recent::FileRecentSearchStore;
