//! Service Interfaces
//!
//! Contracts the transport layer programs against. The server never sees a
//! concrete service type; it holds `Arc<dyn SimilaritySearchInterface>` so
//! tests can substitute the whole application behind the same surface.

use async_trait::async_trait;
use visim_domain::error::Result;
use visim_domain::value_objects::{Embedding, SimilarityMatch};

/// Visual similarity search operations
///
/// The three request operations the service exposes plus the read-only
/// introspection used by health reporting.
#[async_trait]
pub trait SimilaritySearchInterface: Send + Sync {
    /// Compute the unit-norm embedding of the image at `image_url`
    async fn compute_embedding(&self, image_url: &str) -> Result<Embedding>;

    /// Find the stored catalog images most similar to the image at `image_url`
    ///
    /// # Arguments
    /// * `image_url` - Location of the query image
    /// * `threshold` - Overrides the configured similarity threshold
    /// * `top_k` - Overrides the configured result cap
    async fn find_similar_images(
        &self,
        image_url: &str,
        threshold: Option<f32>,
        top_k: Option<usize>,
    ) -> Result<Vec<SimilarityMatch>>;

    /// Compute an embedding for a product image and store it in the catalog
    ///
    /// # Returns
    /// The embedding that was stored, so callers can echo it back
    async fn index_product_image(&self, product_id: &str, image_url: &str) -> Result<Embedding>;

    /// Dimensionality of the embeddings this service produces
    fn embedding_dimensions(&self) -> usize;

    /// Name of the wired embedding provider
    fn embedding_provider_name(&self) -> &str;

    /// Name of the wired catalog provider
    fn catalog_provider_name(&self) -> &str;

    /// Verify the wired providers are reachable
    async fn health_check(&self) -> Result<()>;
}
