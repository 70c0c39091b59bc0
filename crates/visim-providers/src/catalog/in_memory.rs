//! In-memory catalog provider implementation
//!
//! Product records live in a concurrent map. Data is not persisted and is
//! lost on restart; intended for development and testing.

use async_trait::async_trait;
use dashmap::DashMap;
use futures::stream::{self, BoxStream};
use futures::StreamExt;

use visim_domain::error::{Error, Result};
use visim_domain::ports::providers::CatalogProvider;
use visim_domain::value_objects::{Product, StoredImage};

/// In-memory catalog provider
///
/// Cursors stream a point-in-time snapshot sorted by product id, so
/// encounter order is stable across requests regardless of map internals
/// and a scan is never affected by concurrent upserts.
pub struct InMemoryCatalog {
    products: DashMap<String, Product>,
}

impl InMemoryCatalog {
    /// Create an empty in-memory catalog
    pub fn new() -> Self {
        Self {
            products: DashMap::new(),
        }
    }

    /// Create a catalog pre-populated with the given products
    pub fn seeded(products: Vec<Product>) -> Self {
        let catalog = Self::new();
        for product in products {
            catalog.products.insert(product.id.clone(), product);
        }
        catalog
    }

    /// Insert or replace a whole product record
    pub fn insert_product(&self, product: Product) {
        self.products.insert(product.id.clone(), product);
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogProvider for InMemoryCatalog {
    fn products(&self) -> BoxStream<'_, Result<Product>> {
        let mut snapshot: Vec<Product> =
            self.products.iter().map(|entry| entry.value().clone()).collect();
        snapshot.sort_by(|a, b| a.id.cmp(&b.id));
        stream::iter(snapshot.into_iter().map(Ok)).boxed()
    }

    async fn count_products(&self) -> Result<usize> {
        Ok(self.products.len())
    }

    async fn upsert_image_embedding(
        &self,
        product_id: &str,
        image_url: &str,
        embedding: &[f32],
    ) -> Result<()> {
        let mut product = self.products.get_mut(product_id).ok_or_else(|| {
            Error::catalog(format!("Product '{product_id}' not found"))
        })?;

        match product.images.iter_mut().find(|image| image.url == image_url) {
            Some(image) => image.embedding = Some(embedding.to_vec()),
            None => product
                .images
                .push(StoredImage::with_embedding(image_url, embedding.to_vec())),
        }
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use std::sync::Arc;

use visim_application::ports::registry::{
    CatalogProviderConfig, CatalogProviderEntry, CATALOG_PROVIDERS,
};

/// Factory function for creating in-memory catalog provider instances.
fn in_memory_catalog_factory(
    _config: &CatalogProviderConfig,
) -> std::result::Result<Arc<dyn CatalogProvider>, String> {
    Ok(Arc::new(InMemoryCatalog::new()))
}

#[linkme::distributed_slice(CATALOG_PROVIDERS)]
static MEMORY_PROVIDER: CatalogProviderEntry = CatalogProviderEntry {
    name: "memory",
    description: "In-memory catalog (fast, non-persistent)",
    factory: in_memory_catalog_factory,
};
