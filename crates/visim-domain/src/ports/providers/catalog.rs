use crate::error::Result;
use crate::value_objects::Product;
use async_trait::async_trait;
use futures::stream::BoxStream;

/// Product Catalog Interface
///
/// Contract for the record store holding products and their stored images.
/// The search path only ever reads; the single write operation exists for
/// the indexing flow that attaches freshly computed embeddings to catalog
/// images.
///
/// ## Cursor semantics
///
/// Every call to [`CatalogProvider::products`] opens an independent cursor.
/// A request that is cancelled mid-scan simply drops its stream; concurrent
/// and subsequent requests observe no shared iteration state. Providers
/// must yield products in a stable order so that exact score ties resolve
/// deterministically.
///
/// # Example
///
/// ```ignore
/// use futures::StreamExt;
/// use visim_domain::ports::providers::CatalogProvider;
///
/// let mut cursor = catalog.products();
/// while let Some(product) = cursor.next().await {
///     let product = product?;
///     println!("{}: {} images", product.id, product.images.len());
/// }
/// ```
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Stream all products through a fresh, independent cursor
    ///
    /// Item-level errors are yielded in-stream so a single unreadable
    /// record does not terminate the scan.
    fn products(&self) -> BoxStream<'_, Result<Product>>;

    /// Count the products currently in the catalog
    async fn count_products(&self) -> Result<usize>;

    /// Attach or replace the stored embedding of one catalog image
    ///
    /// # Arguments
    /// * `product_id` - Identifier of the owning product
    /// * `image_url` - URL of the image being indexed; appended to the
    ///   product's image list when not already present
    /// * `embedding` - The embedding vector to store
    ///
    /// # Returns
    /// Ok(()) on success, a catalog error when the product does not exist
    /// or the store rejects the write
    async fn upsert_image_embedding(
        &self,
        product_id: &str,
        image_url: &str,
        embedding: &[f32],
    ) -> Result<()>;

    /// Get the name/identifier of this catalog provider
    ///
    /// # Returns
    /// A string identifier for the provider (e.g., "memory", "filesystem")
    fn provider_name(&self) -> &str;

    /// Health check for the provider (default implementation)
    async fn health_check(&self) -> Result<()> {
        self.count_products().await?;
        Ok(())
    }
}
