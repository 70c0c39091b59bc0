//! Configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use visim_domain::constants::{
    DEFAULT_EMBEDDING_DIMENSIONS, DEFAULT_SIMILARITY_THRESHOLD, DEFAULT_TOP_K,
};

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Product catalog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog provider name ("memory" or "filesystem")
    pub provider: String,
    /// Connection string; for the filesystem provider, the data root
    pub connection: String,
    /// Logical database name
    pub database: String,
    /// Collection holding the product records
    pub collection: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            provider: "memory".to_string(),
            connection: "./data/catalog".to_string(),
            database: "shop".to_string(),
            collection: "products".to_string(),
        }
    }
}

/// Vision-embedding backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingSettings {
    /// Embedding provider name ("clip-server" or "null")
    pub provider: String,
    /// Base URL of the inference server
    pub base_url: String,
    /// Model identifier
    pub model: String,
    /// Embedding dimensionality
    pub dimensions: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for EmbeddingSettings {
    fn default() -> Self {
        Self {
            provider: "clip-server".to_string(),
            base_url: "http://127.0.0.1:8000".to_string(),
            model: "clip-vit-base-patch32".to_string(),
            dimensions: DEFAULT_EMBEDDING_DIMENSIONS,
            timeout_secs: 30,
        }
    }
}

/// Similarity search defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Minimum similarity a match must strictly exceed
    pub similarity_threshold: f32,
    /// Maximum number of matches returned
    pub top_k: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            top_k: DEFAULT_TOP_K,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Emit JSON-structured log lines
    pub json_format: bool,
    /// Optional log file; daily rotation next to stdout output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            file_output: None,
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Product catalog configuration
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Vision-embedding backend configuration
    #[serde(default)]
    pub embedding: EmbeddingSettings,
    /// Similarity search defaults
    #[serde(default)]
    pub search: SearchConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}
