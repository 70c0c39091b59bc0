//! Provider Ports
//!
//! Contracts for the three external collaborators of the search path:
//! the vision-embedding backend, the product catalog record store, and
//! the image source used to retrieve query images.

mod catalog;
mod embedding;
mod image_source;

pub use catalog::CatalogProvider;
pub use embedding::ImageEmbeddingProvider;
pub use image_source::ImageSource;
