use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use bytes::Bytes;
use log::debug;

use ms_core::catalog::{Artist, MediaItem, SearchQuery};
use ms_core::config::ApiConfig;
use ms_core::ports::{CatalogError, CatalogPort};

use super::decode;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Reqwest-backed catalog client.
///
/// One GET per call against the configured base endpoint; the response body
/// and status go to the decoder, transport failures are mapped here.
pub struct HttpCatalogClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl HttpCatalogClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("build catalog http client failed")?;
        Ok(Self { http, config })
    }

    async fn get(&self, path: &str, params: &[(&str, String)]) -> Result<(u16, Bytes), CatalogError> {
        let url = format!("{}{}", self.config.base_endpoint, path);
        debug!("GET {} {:?}", url, params);
        let response = self
            .http
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(map_transport_error)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(map_transport_error)?;
        Ok((status, body))
    }
}

fn map_transport_error(err: reqwest::Error) -> CatalogError {
    if err.is_connect() || err.is_timeout() {
        CatalogError::NoConnection
    } else {
        CatalogError::TransportError(err.to_string())
    }
}

#[async_trait]
impl CatalogPort for HttpCatalogClient {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<MediaItem>, CatalogError> {
        let mut params: Vec<(&str, String)> = vec![("term", query.term.clone())];
        if let Some(entity) = query.content_type.entity() {
            params.push(("entity", entity.to_string()));
        }
        params.push(("limit", query.page_size.to_string()));
        params.push(("offset", query.offset().to_string()));

        let (status, body) = self.get("/search", &params).await?;
        decode::decode_search(status, &body)
    }

    async fn lookup_artist(&self, artist_id: u64) -> Result<Vec<Artist>, CatalogError> {
        let params = [("id", artist_id.to_string())];
        let (status, body) = self.get("/lookup", &params).await?;
        decode::decode_artist_lookup(status, &body)
    }

    async fn lookup_artist_works(&self, artist_id: u64) -> Result<Vec<MediaItem>, CatalogError> {
        let params = [("id", artist_id.to_string()), ("entity", "album".to_string())];
        let (status, body) = self.get("/lookup", &params).await?;
        decode::decode_artist_works(status, &body)
    }
}
