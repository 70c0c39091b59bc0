//! Catalog Value Objects
//!
//! Read models of the product catalog being searched. The search path
//! borrows these from the catalog provider for the duration of one query
//! and never mutates them; writes happen only through the indexing surface
//! of the catalog port.

use serde::{Deserialize, Serialize};

/// Value Object: Stored Catalog Image
///
/// One image of a product. The embedding is optional: an image that has
/// never been indexed carries no embedding, which is a valid state and not
/// an error. Such images are invisible to similarity queries until indexed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredImage {
    /// URL identifying the image (also used for display)
    pub url: String,
    /// Precomputed embedding vector, absent until the image is indexed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f32>>,
}

impl StoredImage {
    /// Create an image record without an embedding
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            embedding: None,
        }
    }

    /// Create an image record with a stored embedding
    pub fn with_embedding(url: impl Into<String>, embedding: Vec<f32>) -> Self {
        Self {
            url: url.into(),
            embedding: Some(embedding),
        }
    }
}

/// Value Object: Catalog Product
///
/// A product with its ordered list of images, identified by a stable
/// catalog identifier. Image order is meaningful: it defines the encounter
/// order used to break exact score ties deterministically.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Stable catalog identifier
    pub id: String,
    /// Ordered images belonging to this product
    pub images: Vec<StoredImage>,
}

impl Product {
    /// Create a product with the given images
    pub fn new(id: impl Into<String>, images: Vec<StoredImage>) -> Self {
        Self {
            id: id.into(),
            images,
        }
    }
}
