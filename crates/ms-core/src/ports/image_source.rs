use async_trait::async_trait;

use crate::image::DecodedImage;
use crate::ports::ImageLoadError;

/// Fetches and decodes one thumbnail by URL.
///
/// De-duplication and caching sit above this port; an implementation just
/// performs the transfer and decode for a single request.
#[async_trait]
pub trait ImageSourcePort: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<DecodedImage, ImageLoadError>;
}
