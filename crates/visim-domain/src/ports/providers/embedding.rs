use crate::error::Result;
use crate::value_objects::Embedding;
use async_trait::async_trait;

/// Vision Embedding Interface
///
/// Contract for backends that transform image bytes into a fixed-dimension
/// real vector capturing visual content. The core treats the backend as a
/// black box: it only relies on "image bytes in, vector of `dimensions()`
/// reals out" and never inspects how the vector was produced.
///
/// Implementations must be safe for concurrent use; a single instance is
/// shared read-only across all request-handling tasks.
///
/// # Example
///
/// ```ignore
/// use visim_domain::ports::providers::ImageEmbeddingProvider;
///
/// let embedding = provider.embed_image(&image_bytes).await?;
/// assert_eq!(embedding.vector.len(), provider.dimensions());
/// ```
#[async_trait]
pub trait ImageEmbeddingProvider: Send + Sync {
    /// Compute the embedding for a single image
    ///
    /// # Arguments
    /// * `image` - Raw bytes of a decoded-or-decodable image
    ///
    /// # Returns
    /// Ok(embedding) whose vector has `dimensions()` components, or an
    /// embedding-provider error when the backend fails
    async fn embed_image(&self, image: &[u8]) -> Result<Embedding>;

    /// Get the dimensionality of embeddings produced by this provider
    fn dimensions(&self) -> usize;

    /// Get the name/identifier of this provider implementation
    ///
    /// # Returns
    /// A string identifier for the provider (e.g., "clip-server", "null")
    fn provider_name(&self) -> &str;

    /// Health check for the provider (default implementation provided)
    ///
    /// Providers backed by a remote service should override this with a
    /// cheap reachability probe; the default reports healthy.
    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}
