//! Configuration loading and validation

mod loader;
mod types;

pub use loader::{validate_app_config, ConfigLoader, CONFIG_ENV_PREFIX, DEFAULT_CONFIG_FILENAME};
pub use types::{
    AppConfig, CatalogConfig, EmbeddingSettings, LoggingConfig, SearchConfig, ServerConfig,
};
