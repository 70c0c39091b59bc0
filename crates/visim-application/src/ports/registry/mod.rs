//! Provider Registries
//!
//! Auto-registration system for providers using linkme distributed slices.
//! Provider implementations submit an entry at compile time; the bootstrap
//! resolves the configured provider by name at startup, so adding a backend
//! never touches the wiring code.

mod catalog;
mod embedding;

pub use catalog::{
    list_catalog_providers, resolve_catalog_provider, CatalogProviderConfig, CatalogProviderEntry,
    CATALOG_PROVIDERS,
};
pub use embedding::{
    list_embedding_providers, resolve_embedding_provider, EmbeddingProviderConfig,
    EmbeddingProviderEntry, EMBEDDING_PROVIDERS,
};
