//! HTTP thumbnail source: fetch bytes, decode to RGBA.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;

use ms_core::image::DecodedImage;
use ms_core::ports::{ImageLoadError, ImageSourcePort};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Fetches a thumbnail over HTTP and decodes it with the `image` crate.
pub struct HttpImageSource {
    http: reqwest::Client,
}

impl HttpImageSource {
    pub fn new() -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("build image http client failed")?;
        Ok(Self { http })
    }
}

#[async_trait]
impl ImageSourcePort for HttpImageSource {
    async fn fetch(&self, url: &str) -> Result<DecodedImage, ImageLoadError> {
        debug!("GET {}", url);
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| ImageLoadError::Fetch(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImageLoadError::Fetch(format!("status {status}")));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|err| ImageLoadError::Fetch(err.to_string()))?;

        let decoded = image::load_from_memory(&bytes)
            .map_err(|err| ImageLoadError::Decode(err.to_string()))?;
        let rgba = decoded.to_rgba8();
        Ok(DecodedImage::new(rgba.width(), rgba.height(), rgba.into_raw()))
    }
}
