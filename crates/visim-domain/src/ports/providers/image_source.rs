use crate::error::Result;
use async_trait::async_trait;

/// Query Image Source Interface
///
/// Contract for retrieving the raw bytes of a query image referenced by
/// URL. Implementations are expected to enforce a bounded timeout and to
/// reject payloads that are not decodable images, so the embedding backend
/// only ever sees image data.
#[async_trait]
pub trait ImageSource: Send + Sync {
    /// Fetch the bytes of the image at `url`
    ///
    /// # Returns
    /// Ok(bytes) of a validated image, an image-fetch error on network
    /// failure, or an image-decode error when the payload is not an image
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;

    /// Get the name/identifier of this image source
    fn source_name(&self) -> &str;
}
