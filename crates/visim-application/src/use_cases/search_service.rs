//! Similarity Search Use Case
//!
//! Application service wiring the image source, the vision-embedding
//! backend, and the product catalog into the three request operations.
//! Constructed once at startup with injected dependencies, shared
//! read-only across all request-handling tasks, dropped on shutdown.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use visim_domain::constants::{DEFAULT_SIMILARITY_THRESHOLD, DEFAULT_TOP_K};
use visim_domain::error::Result;
use visim_domain::ports::providers::{CatalogProvider, ImageEmbeddingProvider, ImageSource};
use visim_domain::value_objects::{normalize, Embedding, SimilarityMatch};

use crate::domain_services::SimilarityEngine;
use crate::ports::services::SimilaritySearchInterface;

/// Search parameters used when a request does not override them
#[derive(Debug, Clone, Copy)]
pub struct SearchDefaults {
    /// Minimum similarity a match must strictly exceed
    pub similarity_threshold: f32,
    /// Maximum number of matches returned
    pub top_k: usize,
}

impl Default for SearchDefaults {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            top_k: DEFAULT_TOP_K,
        }
    }
}

/// Similarity search service implementation
///
/// Per-request flow: fetch the query image, delegate to the embedding
/// backend, normalize, then either return the embedding or run the
/// similarity engine over a fresh catalog cursor. No request touches
/// mutable shared state, so no cross-request locking exists here.
pub struct SimilaritySearchService {
    image_source: Arc<dyn ImageSource>,
    embedding_provider: Arc<dyn ImageEmbeddingProvider>,
    catalog: Arc<dyn CatalogProvider>,
    defaults: SearchDefaults,
}

impl SimilaritySearchService {
    /// Create a new service with injected dependencies
    pub fn new(
        image_source: Arc<dyn ImageSource>,
        embedding_provider: Arc<dyn ImageEmbeddingProvider>,
        catalog: Arc<dyn CatalogProvider>,
        defaults: SearchDefaults,
    ) -> Self {
        Self {
            image_source,
            embedding_provider,
            catalog,
            defaults,
        }
    }

    /// Fetch the image at `image_url` and embed it as a unit vector
    async fn embed_query_image(&self, image_url: &str) -> Result<Embedding> {
        let bytes = self.image_source.fetch(image_url).await?;
        let raw = self.embedding_provider.embed_image(&bytes).await?;

        // Unit-normalize before handing the vector to anyone; a backend
        // returning a zero vector surfaces here as a degenerate-vector error
        let vector = normalize(&raw.vector)?;
        debug!(
            image_url,
            model = %raw.model,
            dimensions = raw.dimensions,
            "computed query embedding"
        );
        Ok(Embedding {
            vector,
            model: raw.model,
            dimensions: raw.dimensions,
        })
    }
}

#[async_trait]
impl SimilaritySearchInterface for SimilaritySearchService {
    async fn compute_embedding(&self, image_url: &str) -> Result<Embedding> {
        self.embed_query_image(image_url).await
    }

    async fn find_similar_images(
        &self,
        image_url: &str,
        threshold: Option<f32>,
        top_k: Option<usize>,
    ) -> Result<Vec<SimilarityMatch>> {
        let threshold = threshold.unwrap_or(self.defaults.similarity_threshold);
        let top_k = top_k.unwrap_or(self.defaults.top_k);

        let query = self.embed_query_image(image_url).await?;

        // Fresh cursor per request; cancellation drops it without affecting
        // any other in-flight scan
        let cursor = self.catalog.products();
        let matches = SimilarityEngine::find_similar(&query.vector, cursor, threshold, top_k).await;

        info!(
            image_url,
            threshold,
            top_k,
            matches = matches.len(),
            "similarity query complete"
        );
        Ok(matches)
    }

    async fn index_product_image(&self, product_id: &str, image_url: &str) -> Result<Embedding> {
        let embedding = self.embed_query_image(image_url).await?;
        self.catalog
            .upsert_image_embedding(product_id, image_url, &embedding.vector)
            .await?;

        info!(
            product_id,
            image_url,
            dimensions = embedding.dimensions,
            "indexed product image"
        );
        Ok(embedding)
    }

    fn embedding_dimensions(&self) -> usize {
        self.embedding_provider.dimensions()
    }

    fn embedding_provider_name(&self) -> &str {
        self.embedding_provider.provider_name()
    }

    fn catalog_provider_name(&self) -> &str {
        self.catalog.provider_name()
    }

    async fn health_check(&self) -> Result<()> {
        self.embedding_provider.health_check().await?;
        self.catalog.health_check().await?;
        Ok(())
    }
}
