//! Request and response models for the HTTP API
//!
//! Wire-level DTOs only; domain types never cross the transport boundary
//! directly. Requests carry declarative validation, responses use the field
//! names of the external contract (`similarity_score`, not `score`).

use serde::{Deserialize, Serialize};
use validator::Validate;

use visim_domain::value_objects::{Embedding, SimilarityMatch};

/// Request body of `POST /get-embedding`
#[derive(Debug, Deserialize, Validate)]
pub struct EmbeddingRequest {
    /// Location of the image to embed
    #[validate(url(message = "image_url must be a valid URL"))]
    pub image_url: String,
}

/// Request body of `POST /find-similar-images`
#[derive(Debug, Deserialize, Validate)]
pub struct FindSimilarRequest {
    /// Location of the query image
    #[validate(url(message = "image_url must be a valid URL"))]
    pub image_url: String,
    /// Overrides the configured similarity threshold
    #[validate(range(min = -1.0, max = 1.0, message = "threshold must be within [-1, 1]"))]
    pub threshold: Option<f32>,
    /// Overrides the configured result cap
    #[validate(range(min = 1, max = 1000, message = "top_k must be between 1 and 1000"))]
    pub top_k: Option<usize>,
}

/// Request body of `POST /index-image`
#[derive(Debug, Deserialize, Validate)]
pub struct IndexImageRequest {
    /// Identifier of the product owning the image
    #[validate(length(min = 1, message = "product_id must not be empty"))]
    pub product_id: String,
    /// Location of the image to index
    #[validate(url(message = "image_url must be a valid URL"))]
    pub image_url: String,
}

/// Response body of `POST /get-embedding`
#[derive(Debug, Serialize, Deserialize)]
pub struct EmbeddingResponse {
    /// Unit-norm embedding vector
    pub embedding: Vec<f32>,
    /// Model that produced the embedding
    pub model: String,
    /// Dimensionality of the vector
    pub dimensions: usize,
}

impl From<Embedding> for EmbeddingResponse {
    fn from(embedding: Embedding) -> Self {
        Self {
            embedding: embedding.vector,
            model: embedding.model,
            dimensions: embedding.dimensions,
        }
    }
}

/// One entry of a similarity query response
#[derive(Debug, Serialize, Deserialize)]
pub struct SimilarImage {
    /// URL of the matched stored image
    pub image_url: String,
    /// Cosine similarity against the query embedding
    pub similarity_score: f32,
    /// Identifier of the product owning the matched image
    pub product_id: String,
}

impl From<SimilarityMatch> for SimilarImage {
    fn from(matched: SimilarityMatch) -> Self {
        Self {
            image_url: matched.image_url,
            similarity_score: matched.score,
            product_id: matched.product_id,
        }
    }
}

/// Response body of `POST /find-similar-images`
#[derive(Debug, Serialize, Deserialize)]
pub struct FindSimilarResponse {
    /// Matches in descending similarity order, capped at top_k
    pub similar_images: Vec<SimilarImage>,
}

/// Response body of `POST /index-image`
#[derive(Debug, Serialize, Deserialize)]
pub struct IndexImageResponse {
    /// Identifier of the product the image was attached to
    pub product_id: String,
    /// URL of the indexed image
    pub image_url: String,
    /// Dimensionality of the stored embedding
    pub dimensions: usize,
}

/// Response body of `GET /health`
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "healthy" when every wired provider answered
    pub status: String,
    /// Name of the wired embedding provider
    pub embedding_provider: String,
    /// Name of the wired catalog provider
    pub catalog_provider: String,
    /// Embedding dimensionality of the service
    pub dimensions: usize,
}

/// Structured error payload
///
/// Every failed request carries one of these alongside a 4xx/5xx status.
/// The code is stable and machine-readable; the error text is for humans.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
    /// Error code for programmatic handling
    pub code: String,
}

impl ErrorResponse {
    /// Create an error response with the given message and code
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }

    /// Creates a request-validation error response
    pub fn validation(errors: &validator::ValidationErrors) -> Self {
        Self::new(format!("Invalid request: {errors}"), "VALIDATION_FAILED")
    }
}
