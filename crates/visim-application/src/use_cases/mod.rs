//! Application Use Cases

mod search_service;

pub use search_service::{SearchDefaults, SimilaritySearchService};
