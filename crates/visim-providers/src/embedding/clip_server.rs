//! CLIP Server Embedding Provider
//!
//! Implements the ImageEmbeddingProvider port against a CLIP inference
//! server speaking a small JSON API: POST the image as base64, receive the
//! feature vector. The model itself stays out of this process; the service
//! only depends on the "image bytes -> vector" contract.

use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::Client;

use visim_domain::error::{Error, Result};
use visim_domain::ports::providers::ImageEmbeddingProvider;
use visim_domain::value_objects::Embedding;

use crate::constants::{CONTENT_TYPE_JSON, ERROR_MSG_REQUEST_TIMEOUT};

/// CLIP inference server embedding provider
///
/// Receives the HTTP client via constructor injection; one client is shared
/// across all providers so connection pools are reused.
///
/// ## Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use reqwest::Client;
/// use visim_providers::embedding::ClipServerEmbeddingProvider;
///
/// fn example() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::builder()
///         .timeout(Duration::from_secs(30))
///         .build()?;
///     let provider = ClipServerEmbeddingProvider::new(
///         "http://127.0.0.1:8000".to_string(),
///         "clip-vit-base-patch32".to_string(),
///         512,
///         Duration::from_secs(30),
///         client,
///     );
///     Ok(())
/// }
/// ```
pub struct ClipServerEmbeddingProvider {
    base_url: String,
    model: String,
    dimensions: usize,
    timeout: Duration,
    http_client: Client,
}

impl ClipServerEmbeddingProvider {
    /// Create a new CLIP server embedding provider
    ///
    /// # Arguments
    /// * `base_url` - Inference server URL (e.g., "http://127.0.0.1:8000")
    /// * `model` - Model name (e.g., "clip-vit-base-patch32")
    /// * `dimensions` - Expected embedding dimensionality
    /// * `timeout` - Request timeout duration
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(
        base_url: String,
        model: String,
        dimensions: usize,
        timeout: Duration,
        http_client: Client,
    ) -> Self {
        Self {
            base_url,
            model,
            dimensions,
            timeout,
            http_client,
        }
    }

    /// Get the model name for this provider
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Request the embedding for one image from the inference server
    async fn fetch_embedding(&self, image: &[u8]) -> Result<serde_json::Value> {
        let payload = serde_json::json!({
            "model": self.model,
            "image": BASE64.encode(image),
        });

        let response = self
            .http_client
            .post(format!(
                "{}/embeddings",
                self.base_url.trim_end_matches('/')
            ))
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::embedding(format!(
                        "{} {:?}",
                        ERROR_MSG_REQUEST_TIMEOUT, self.timeout
                    ))
                } else {
                    Error::embedding_with_source("HTTP request to CLIP server failed", e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::embedding(format!(
                "CLIP server returned {status}: {body}"
            )));
        }

        response
            .json()
            .await
            .map_err(|e| Error::embedding_with_source("Invalid JSON from CLIP server", e))
    }

    /// Parse the embedding vector out of a server response
    fn parse_embedding(&self, response_data: &serde_json::Value) -> Result<Embedding> {
        let vector = response_data["embedding"]
            .as_array()
            .ok_or_else(|| {
                Error::embedding("Invalid response format: missing embedding array")
            })?
            .iter()
            .map(|v| v.as_f64().unwrap_or(0.0) as f32)
            .collect::<Vec<f32>>();

        if vector.len() != self.dimensions {
            return Err(Error::embedding(format!(
                "CLIP server returned {} dimensions, expected {}",
                vector.len(),
                self.dimensions
            )));
        }

        Ok(Embedding {
            vector,
            model: self.model.clone(),
            dimensions: self.dimensions,
        })
    }
}

#[async_trait]
impl ImageEmbeddingProvider for ClipServerEmbeddingProvider {
    async fn embed_image(&self, image: &[u8]) -> Result<Embedding> {
        if image.is_empty() {
            return Err(Error::embedding("Cannot embed an empty image payload"));
        }
        let response_data = self.fetch_embedding(image).await?;
        self.parse_embedding(&response_data)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn provider_name(&self) -> &str {
        "clip-server"
    }

    async fn health_check(&self) -> Result<()> {
        // Reachability probe only; any HTTP answer means the server is up
        self.http_client
            .get(self.base_url.trim_end_matches('/'))
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| Error::embedding_with_source("CLIP server unreachable", e))?;
        Ok(())
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use std::sync::Arc;

use visim_application::ports::registry::{
    EmbeddingProviderConfig, EmbeddingProviderEntry, EMBEDDING_PROVIDERS,
};
use visim_domain::constants::DEFAULT_EMBEDDING_DIMENSIONS;

use crate::constants::{DEFAULT_CLIP_BASE_URL, DEFAULT_CLIP_MODEL, DEFAULT_HTTP_TIMEOUT_SECS};

/// Factory function for creating CLIP server embedding provider instances.
fn clip_server_factory(
    config: &EmbeddingProviderConfig,
) -> std::result::Result<Arc<dyn ImageEmbeddingProvider>, String> {
    let base_url = config
        .base_url
        .clone()
        .unwrap_or_else(|| DEFAULT_CLIP_BASE_URL.to_string());
    let model = config
        .model
        .clone()
        .unwrap_or_else(|| DEFAULT_CLIP_MODEL.to_string());
    let dimensions = config.dimensions.unwrap_or(DEFAULT_EMBEDDING_DIMENSIONS);
    let timeout = Duration::from_secs(config.timeout_secs.unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS));
    let http_client = Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| format!("Failed to create HTTP client: {e}"))?;

    Ok(Arc::new(ClipServerEmbeddingProvider::new(
        base_url,
        model,
        dimensions,
        timeout,
        http_client,
    )))
}

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static CLIP_SERVER_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "clip-server",
    description: "CLIP inference server over HTTP (clip-vit-base-patch32 and friends)",
    factory: clip_server_factory,
};
