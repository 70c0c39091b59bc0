//! Filesystem catalog provider implementation
//!
//! Stores the product collection as one JSON document under
//! `<root>/<database>/<collection>.json`. The document is re-read every
//! time a cursor opens, so edits made by other processes are picked up on
//! the next query. Writes are serialized behind an async mutex; the
//! read-modify-write cycle is not reentrant.

use std::path::PathBuf;

use async_trait::async_trait;
use futures::stream::BoxStream;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use visim_domain::error::{Error, Result};
use visim_domain::ports::providers::CatalogProvider;
use visim_domain::value_objects::{Product, StoredImage};

use crate::constants::{
    DEFAULT_CATALOG_COLLECTION, DEFAULT_CATALOG_DATABASE, DEFAULT_CATALOG_ROOT,
};

/// Filesystem catalog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilesystemCatalogConfig {
    /// Base directory for catalog data
    pub root: PathBuf,
    /// Logical database name (a directory under the root)
    pub database: String,
    /// Collection name (the JSON document holding the products)
    pub collection: String,
}

impl Default for FilesystemCatalogConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_CATALOG_ROOT),
            database: DEFAULT_CATALOG_DATABASE.to_string(),
            collection: DEFAULT_CATALOG_COLLECTION.to_string(),
        }
    }
}

/// Filesystem catalog provider
pub struct FilesystemCatalog {
    config: FilesystemCatalogConfig,
    write_lock: Mutex<()>,
}

impl FilesystemCatalog {
    /// Create a filesystem catalog over the configured document
    pub fn new(config: FilesystemCatalogConfig) -> Self {
        Self {
            config,
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the collection document
    fn document_path(&self) -> PathBuf {
        self.config
            .root
            .join(&self.config.database)
            .join(format!("{}.json", self.config.collection))
    }

    /// Load every product record from the collection document
    ///
    /// A missing document is an empty catalog, not an error: nothing has
    /// been written yet.
    async fn load_products(&self) -> Result<Vec<Product>> {
        let path = self.document_path();
        if tokio::fs::metadata(&path).await.is_err() {
            return Ok(Vec::new());
        }

        let content = tokio::fs::read_to_string(&path).await.map_err(|e| {
            Error::io_with_source(format!("Failed to read catalog document {}", path.display()), e)
        })?;
        serde_json::from_str(&content).map_err(|e| {
            Error::catalog_with_source(
                format!("Failed to parse catalog document {}", path.display()),
                e,
            )
        })
    }

    /// Write the full product list back to the collection document
    async fn store_products(&self, products: &[Product]) -> Result<()> {
        let path = self.document_path();
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                Error::io_with_source(
                    format!("Failed to create catalog directory {}", parent.display()),
                    e,
                )
            })?;
        }

        let content = serde_json::to_string_pretty(products)
            .map_err(|e| Error::catalog_with_source("Failed to serialize catalog document", e))?;
        tokio::fs::write(&path, content).await.map_err(|e| {
            Error::io_with_source(
                format!("Failed to write catalog document {}", path.display()),
                e,
            )
        })
    }
}

#[async_trait]
impl CatalogProvider for FilesystemCatalog {
    fn products(&self) -> BoxStream<'_, Result<Product>> {
        Box::pin(async_stream::stream! {
            match self.load_products().await {
                Ok(products) => {
                    for product in products {
                        yield Ok(product);
                    }
                }
                Err(err) => yield Err(err),
            }
        })
    }

    async fn count_products(&self) -> Result<usize> {
        Ok(self.load_products().await?.len())
    }

    async fn upsert_image_embedding(
        &self,
        product_id: &str,
        image_url: &str,
        embedding: &[f32],
    ) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        let mut products = self.load_products().await?;
        let product = products
            .iter_mut()
            .find(|product| product.id == product_id)
            .ok_or_else(|| Error::catalog(format!("Product '{product_id}' not found")))?;

        match product.images.iter_mut().find(|image| image.url == image_url) {
            Some(image) => image.embedding = Some(embedding.to_vec()),
            None => product
                .images
                .push(StoredImage::with_embedding(image_url, embedding.to_vec())),
        }

        self.store_products(&products).await
    }

    fn provider_name(&self) -> &str {
        "filesystem"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use std::sync::Arc;

use visim_application::ports::registry::{
    CatalogProviderConfig, CatalogProviderEntry, CATALOG_PROVIDERS,
};

/// Factory function for creating filesystem catalog provider instances.
fn filesystem_catalog_factory(
    config: &CatalogProviderConfig,
) -> std::result::Result<Arc<dyn CatalogProvider>, String> {
    let fs_config = FilesystemCatalogConfig {
        root: PathBuf::from(
            config
                .connection
                .clone()
                .unwrap_or_else(|| DEFAULT_CATALOG_ROOT.to_string()),
        ),
        database: config
            .database
            .clone()
            .unwrap_or_else(|| DEFAULT_CATALOG_DATABASE.to_string()),
        collection: config
            .collection
            .clone()
            .unwrap_or_else(|| DEFAULT_CATALOG_COLLECTION.to_string()),
    };

    Ok(Arc::new(FilesystemCatalog::new(fs_config)))
}

#[linkme::distributed_slice(CATALOG_PROVIDERS)]
static FILESYSTEM_PROVIDER: CatalogProviderEntry = CatalogProviderEntry {
    name: "filesystem",
    description: "JSON document catalog on the local filesystem",
    factory: filesystem_catalog_factory,
};
