//! Configuration loader
//!
//! Loads configuration from defaults, an optional TOML file, and
//! `VISIM_`-prefixed environment variables, using Figment for merging.

use std::env;
use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;

use visim_domain::error::{Error, Result};

use crate::config::AppConfig;
use crate::error_ext::ErrorContext;
use crate::logging::log_config_loaded;

/// Environment variable prefix; nested keys use a double underscore
/// (e.g., `VISIM_SERVER__PORT`, `VISIM_SEARCH__SIMILARITY_THRESHOLD`)
pub const CONFIG_ENV_PREFIX: &str = "VISIM";

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "visim.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "visim";

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources
    /// override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if it exists)
    /// 3. Environment variables with prefix (e.g., `VISIM_SERVER__PORT`)
    pub fn load(&self) -> Result<AppConfig> {
        // Start with default configuration
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        // Add configuration file if specified
        if let Some(config_path) = &self.config_path {
            figment = figment.merge(Toml::file(config_path));
            log_config_loaded(config_path, config_path.exists());
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        // Add environment variables; double underscore separates nesting
        // levels so keys like `similarity_threshold` survive intact
        figment = figment.merge(Env::prefixed(&format!("{}_", self.env_prefix)).split("__"));

        // Extract and deserialize configuration
        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        // Validate configuration
        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir.join("config").join(DEFAULT_CONFIG_FILENAME),
            dirs::config_dir()
                .map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME))
                .unwrap_or_default(),
        ];

        candidates.into_iter().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
///
/// Performs validation of all configuration sections.
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_server_config(config)?;
    validate_catalog_config(config)?;
    validate_embedding_config(config)?;
    validate_search_config(config)?;
    Ok(())
}

fn validate_server_config(config: &AppConfig) -> Result<()> {
    if config.server.port == 0 {
        return Err(Error::configuration("Server port cannot be 0"));
    }
    Ok(())
}

fn validate_catalog_config(config: &AppConfig) -> Result<()> {
    if config.catalog.provider.is_empty() {
        return Err(Error::configuration("Catalog provider cannot be empty"));
    }
    if config.catalog.database.is_empty() || config.catalog.collection.is_empty() {
        return Err(Error::configuration(
            "Catalog database and collection names cannot be empty",
        ));
    }
    Ok(())
}

fn validate_embedding_config(config: &AppConfig) -> Result<()> {
    if config.embedding.provider.is_empty() {
        return Err(Error::configuration("Embedding provider cannot be empty"));
    }
    if config.embedding.dimensions == 0 {
        return Err(Error::configuration(
            "Embedding dimensions must be at least 1",
        ));
    }
    if config.embedding.timeout_secs == 0 {
        return Err(Error::configuration(
            "Embedding timeout must be at least 1 second",
        ));
    }
    Ok(())
}

fn validate_search_config(config: &AppConfig) -> Result<()> {
    let threshold = config.search.similarity_threshold;
    if !(-1.0..=1.0).contains(&threshold) {
        return Err(Error::configuration(format!(
            "Similarity threshold must be within [-1, 1], got {threshold}"
        )));
    }
    if config.search.top_k == 0 {
        return Err(Error::configuration("top_k must be at least 1"));
    }
    Ok(())
}
