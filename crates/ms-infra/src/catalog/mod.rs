//! Remote catalog access: HTTP client and response decoding.

mod client;
mod decode;

pub use client::HttpCatalogClient;
