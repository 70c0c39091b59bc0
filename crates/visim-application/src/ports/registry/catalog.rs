//! Catalog Provider Registry
//!
//! Auto-registration for product catalog backends, mirroring the embedding
//! provider registry: linkme distributed slice, factory per provider,
//! resolution by configured name.

use std::sync::Arc;

use visim_domain::ports::providers::CatalogProvider;

/// Configuration for catalog provider creation
#[derive(Debug, Clone, Default)]
pub struct CatalogProviderConfig {
    /// Provider name (e.g., "memory", "filesystem")
    pub provider: String,
    /// Connection string; for the filesystem provider, the data root
    pub connection: Option<String>,
    /// Logical database name
    pub database: Option<String>,
    /// Collection holding the product records
    pub collection: Option<String>,
}

impl CatalogProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the connection string
    pub fn with_connection(mut self, connection: impl Into<String>) -> Self {
        self.connection = Some(connection.into());
        self
    }

    /// Set the database name
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// Set the collection name
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = Some(collection.into());
        self
    }
}

/// Registry entry for catalog providers
pub struct CatalogProviderEntry {
    /// Unique provider name (e.g., "memory", "filesystem")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instances
    pub factory: fn(&CatalogProviderConfig) -> Result<Arc<dyn CatalogProvider>, String>,
}

// Auto-collection via linkme distributed slices - providers submit entries at compile time
#[linkme::distributed_slice]
pub static CATALOG_PROVIDERS: [CatalogProviderEntry] = [..];

/// Resolve a catalog provider by name from the registry
///
/// # Returns
/// * `Ok(provider)` - Created provider instance
/// * `Err(message)` - Provider unknown or its factory failed
pub fn resolve_catalog_provider(
    config: &CatalogProviderConfig,
) -> Result<Arc<dyn CatalogProvider>, String> {
    for entry in CATALOG_PROVIDERS {
        if entry.name == config.provider {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = CATALOG_PROVIDERS.iter().map(|e| e.name).collect();

    Err(format!(
        "Unknown catalog provider '{}'. Available providers: {:?}",
        config.provider, available
    ))
}

/// List all registered catalog providers as (name, description) pairs
pub fn list_catalog_providers() -> Vec<(&'static str, &'static str)> {
    CATALOG_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
