//! API configuration.

use serde::{Deserialize, Serialize};

use crate::catalog::DEFAULT_PAGE_SIZE;

/// Base endpoint of the public catalog API.
pub const DEFAULT_ENDPOINT: &str = "https://itunes.apple.com";

/// Catalog API configuration.
///
/// There is no environment-variable surface; the endpoint is fixed in
/// production and overridden by constructor injection in tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_endpoint: String,
    pub page_size: u32,
}

impl ApiConfig {
    pub fn with_endpoint(base_endpoint: impl Into<String>) -> Self {
        Self {
            base_endpoint: base_endpoint.into(),
            ..Self::default()
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_endpoint: DEFAULT_ENDPOINT.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
