//! Application bootstrap - the composition root
//!
//! Resolves the configured embedding and catalog providers from the linkme
//! registries, builds the shared HTTP client and the image source, and
//! assembles the similarity search service. Everything is constructed once
//! at startup, shared read-only behind `Arc` for the life of the process,
//! and dropped together when the context is shut down.
//!
//! ```text
//! AppConfig -> registries (linkme) -> Arc<dyn ...> providers
//!           -> SimilaritySearchService -> AppContext
//! ```

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tracing::info;

use visim_application::ports::registry::{
    resolve_catalog_provider, resolve_embedding_provider, CatalogProviderConfig,
    EmbeddingProviderConfig,
};
use visim_application::ports::services::SimilaritySearchInterface;
use visim_application::use_cases::{SearchDefaults, SimilaritySearchService};
use visim_domain::error::{Error, Result};
use visim_providers::image_source::HttpImageSource;

use crate::config::AppConfig;

/// Application context holding the wired service
///
/// Owns the configuration and the fully constructed search service.
/// Lifecycle: built once on boot via [`AppContext::bootstrap`], shared
/// read-only across request handlers, torn down via
/// [`AppContext::shutdown`] when the transport exits.
pub struct AppContext {
    config: Arc<AppConfig>,
    service: Arc<dyn SimilaritySearchInterface>,
}

impl AppContext {
    /// Resolve providers and assemble the application service
    ///
    /// # Errors
    ///
    /// Returns a configuration error when a configured provider name is
    /// unknown (the message lists the registered alternatives) or when the
    /// HTTP client cannot be constructed.
    pub fn bootstrap(config: AppConfig) -> Result<Self> {
        let embedding_config = EmbeddingProviderConfig::new(&config.embedding.provider)
            .with_base_url(&config.embedding.base_url)
            .with_model(&config.embedding.model)
            .with_dimensions(config.embedding.dimensions)
            .with_timeout_secs(config.embedding.timeout_secs);
        let embedding_provider =
            resolve_embedding_provider(&embedding_config).map_err(Error::configuration)?;

        let catalog_config = CatalogProviderConfig::new(&config.catalog.provider)
            .with_connection(&config.catalog.connection)
            .with_database(&config.catalog.database)
            .with_collection(&config.catalog.collection);
        let catalog = resolve_catalog_provider(&catalog_config).map_err(Error::configuration)?;

        // One timeout governs all outbound HTTP, embedding calls and image
        // fetches alike
        let timeout = Duration::from_secs(config.embedding.timeout_secs);
        let http_client = Client::builder().timeout(timeout).build().map_err(|e| {
            Error::configuration_with_source("Failed to build the shared HTTP client", e)
        })?;
        let image_source = Arc::new(HttpImageSource::new(http_client, timeout));

        let defaults = SearchDefaults {
            similarity_threshold: config.search.similarity_threshold,
            top_k: config.search.top_k,
        };
        let service = Arc::new(SimilaritySearchService::new(
            image_source,
            embedding_provider,
            catalog,
            defaults,
        ));

        info!(
            embedding_provider = %config.embedding.provider,
            catalog_provider = %config.catalog.provider,
            dimensions = config.embedding.dimensions,
            similarity_threshold = config.search.similarity_threshold,
            top_k = config.search.top_k,
            "Application context bootstrapped"
        );

        Ok(Self {
            config: Arc::new(config),
            service,
        })
    }

    /// The loaded application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The wired similarity search service
    pub fn service(&self) -> Arc<dyn SimilaritySearchInterface> {
        Arc::clone(&self.service)
    }

    /// Tear the context down
    ///
    /// Providers hold no resources beyond connection pools, which close
    /// when the last `Arc` drops; this exists to make the teardown point
    /// explicit and observable.
    pub fn shutdown(self) {
        info!("Application context shut down");
    }
}
