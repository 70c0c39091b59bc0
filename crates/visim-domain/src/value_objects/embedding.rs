//! Embedding Vector Value Object and Vector Math
//!
//! The embedding value object plus the two numeric primitives the search
//! path is built on: unit-length normalization and cosine similarity.
//! Both are robust to unnormalized inputs; stored catalog embeddings are
//! not required to be unit-norm at rest.

use serde::{Deserialize, Serialize};

use crate::constants::NORM_EPSILON;
use crate::error::{Error, Result};

/// Value Object: Image Embedding
///
/// A fixed-dimension real vector representing an image's visual content,
/// produced by a vision model. Two images are visually similar when their
/// embeddings are angularly close.
///
/// ## Business Rules
///
/// - Vector must contain at least one element
/// - `dimensions` always equals `vector.len()`
/// - Model name identifies the embedding generation method
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embedding {
    /// The embedding vector values
    pub vector: Vec<f32>,
    /// Name of the model that generated this embedding
    pub model: String,
    /// Dimensionality of the embedding vector
    pub dimensions: usize,
}

impl Embedding {
    /// Create an embedding, deriving `dimensions` from the vector
    pub fn new(vector: Vec<f32>, model: impl Into<String>) -> Self {
        let dimensions = vector.len();
        Self {
            vector,
            model: model.into(),
            dimensions,
        }
    }
}

/// Compute the L2 (Euclidean) norm of a vector
pub fn l2_norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// Scale a vector to unit length
///
/// # Errors
///
/// Returns [`Error::DegenerateVector`] when the norm is zero (within
/// [`NORM_EPSILON`]); a zero vector has no direction to preserve.
pub fn normalize(v: &[f32]) -> Result<Vec<f32>> {
    let norm = l2_norm(v);
    if norm <= NORM_EPSILON {
        return Err(Error::degenerate_vector(format!(
            "cannot normalize a vector with norm {norm:e}"
        )));
    }
    Ok(v.iter().map(|x| x / norm).collect())
}

/// Cosine similarity between two vectors
///
/// Dot product divided by the product of the norms, in [-1, 1]. Norms are
/// recomputed on every call, so neither input needs to be pre-normalized.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] when the vectors differ in length
/// and [`Error::DegenerateVector`] when either norm is zero; similarity
/// against a zero vector is undefined and never silently reported as 0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(Error::dimension_mismatch(a.len(), b.len()));
    }

    let norm_a = l2_norm(a);
    let norm_b = l2_norm(b);
    if norm_a <= NORM_EPSILON || norm_b <= NORM_EPSILON {
        return Err(Error::degenerate_vector(
            "cosine similarity is undefined for zero-norm vectors",
        ));
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();

    // Accumulated rounding can push the ratio just past +/-1
    Ok((dot / (norm_a * norm_b)).clamp(-1.0, 1.0))
}
