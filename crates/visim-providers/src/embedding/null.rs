//! Null embedding provider for testing and development
//!
//! Produces deterministic, hash-based vectors from image bytes. No external
//! dependencies - always works offline.

use async_trait::async_trait;

use visim_domain::constants::DEFAULT_EMBEDDING_DIMENSIONS;
use visim_domain::error::{Error, Result};
use visim_domain::ports::providers::ImageEmbeddingProvider;
use visim_domain::value_objects::Embedding;

/// Null embedding provider for testing
///
/// Returns fixed-size vectors derived deterministically from the input
/// bytes: identical payloads embed identically, different payloads almost
/// always differ. Components are strictly positive, so the vector is never
/// degenerate. Useful for unit tests and development without a running
/// inference server.
///
/// # Example
///
/// ```rust
/// use visim_providers::embedding::NullEmbeddingProvider;
/// use visim_domain::ports::providers::ImageEmbeddingProvider;
///
/// let provider = NullEmbeddingProvider::new();
/// assert_eq!(provider.dimensions(), 512);
/// assert_eq!(provider.provider_name(), "null");
/// ```
pub struct NullEmbeddingProvider {
    dimensions: usize,
}

impl NullEmbeddingProvider {
    /// Create a null provider with the default dimensionality
    pub fn new() -> Self {
        Self {
            dimensions: DEFAULT_EMBEDDING_DIMENSIONS,
        }
    }

    /// Create a null provider producing vectors of `dimensions` components
    pub fn with_dimensions(dimensions: usize) -> Self {
        Self { dimensions }
    }
}

impl Default for NullEmbeddingProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageEmbeddingProvider for NullEmbeddingProvider {
    async fn embed_image(&self, image: &[u8]) -> Result<Embedding> {
        if image.is_empty() {
            return Err(Error::embedding("Cannot embed an empty image payload"));
        }

        // Deterministic hash of the payload drives every component
        let hash = image
            .iter()
            .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(u32::from(*b)));
        let base_value = (hash % 1000) as f32 / 1000.0;

        let vector = (0..self.dimensions)
            .map(|j| {
                let variation = ((hash % 97) as f32 + j as f32 * 0.01).sin();
                // Strictly positive floor keeps the vector away from zero norm
                0.05 + (base_value + variation * 0.1).clamp(0.0, 1.0)
            })
            .collect();

        Ok(Embedding {
            vector,
            model: "null-test".to_string(),
            dimensions: self.dimensions,
        })
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use std::sync::Arc;

use visim_application::ports::registry::{
    EmbeddingProviderConfig, EmbeddingProviderEntry, EMBEDDING_PROVIDERS,
};

/// Factory function for creating null embedding provider instances.
fn null_factory(
    config: &EmbeddingProviderConfig,
) -> std::result::Result<Arc<dyn ImageEmbeddingProvider>, String> {
    let provider = match config.dimensions {
        Some(dimensions) => NullEmbeddingProvider::with_dimensions(dimensions),
        None => NullEmbeddingProvider::new(),
    };
    Ok(Arc::new(provider))
}

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static NULL_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "null",
    description: "Null provider for testing (deterministic hash-based embeddings)",
    factory: null_factory,
};
