//! Domain-wide constants
//!
//! Shared defaults and numeric tolerances. Provider- and transport-specific
//! constants live in their own crates.

/// Embedding dimensionality of the default vision model (CLIP ViT-B/32)
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 512;

/// Default similarity threshold for the search path
///
/// A stored image is reported only when its cosine similarity against the
/// query is strictly greater than this value.
pub const DEFAULT_SIMILARITY_THRESHOLD: f32 = 0.7;

/// Default number of matches returned by a similarity query
pub const DEFAULT_TOP_K: usize = 5;

/// Norms at or below this value are treated as zero
///
/// Normalizing or scoring a vector with a norm this small would amplify
/// floating-point noise into the result, so such vectors are rejected.
pub const NORM_EPSILON: f32 = 1e-12;

/// Tolerance used when asserting that a vector is unit-norm
pub const UNIT_NORM_TOLERANCE: f32 = 1e-6;
