//! Decoded thumbnail model shared between the image source port and the
//! in-memory cache.

/// A decoded image ready for rendering.
///
/// Pixels are tightly packed RGBA8, row-major. The decode itself happens in
/// the infrastructure adapter; the domain only carries the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl DecodedImage {
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Self {
        Self {
            width,
            height,
            rgba,
        }
    }

    /// Size of the pixel buffer in bytes.
    pub fn byte_len(&self) -> usize {
        self.rgba.len()
    }
}
