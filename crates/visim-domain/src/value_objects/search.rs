//! Search-Related Value Objects

use serde::{Deserialize, Serialize};

/// Value Object: Ranked Similarity Match
///
/// A single result of a similarity query: which stored image matched, how
/// strongly, and which product owns it. Matches are derived during one
/// query's evaluation and discarded after the response is produced; nothing
/// persists them.
///
/// ## Business Rules
///
/// - Score is cosine similarity in [-1, 1]; higher is more similar
/// - Results are ordered by descending score, catalog order on exact ties
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimilarityMatch {
    /// URL of the matched stored image
    pub image_url: String,
    /// Cosine similarity against the query embedding
    pub score: f32,
    /// Identifier of the product owning the matched image
    pub product_id: String,
}
