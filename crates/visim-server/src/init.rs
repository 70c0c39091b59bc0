//! Server initialization
//!
//! Startup sequence: load configuration, initialize logging, bootstrap the
//! application context, then hand the wired service to rocket. Rocket owns
//! request concurrency and graceful shutdown (Ctrl+C); the context is torn
//! down after the transport exits.

use std::path::Path;
use std::sync::Arc;

use rocket::{routes, Build, Rocket};
use tracing::info;

use visim_application::ports::services::SimilaritySearchInterface;
use visim_infrastructure::config::{AppConfig, ConfigLoader};
use visim_infrastructure::di::AppContext;
use visim_infrastructure::logging::init_logging;

use crate::handlers::{find_similar_images, get_embedding, health, index_image, ApiState};

/// Build the rocket application over a wired service
///
/// Exposed separately from [`run`] so tests can drive the full HTTP
/// surface through rocket's local client without binding a socket.
pub fn build_rocket(
    config: &AppConfig,
    service: Arc<dyn SimilaritySearchInterface>,
) -> Rocket<Build> {
    let figment = rocket::Config::figment()
        .merge(("address", config.server.host.clone()))
        .merge(("port", config.server.port));

    rocket::custom(figment)
        .manage(ApiState { service })
        .mount(
            "/",
            routes![get_embedding, find_similar_images, index_image, health],
        )
}

/// Run the visim server
///
/// This is the main entry point that loads configuration, wires the
/// application, and launches the HTTP transport. Returns once rocket has
/// shut down gracefully.
pub async fn run(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    let config = loader.load()?;

    init_logging(config.logging.clone())?;

    info!(
        host = %config.server.host,
        port = config.server.port,
        embedding_provider = %config.embedding.provider,
        catalog_provider = %config.catalog.provider,
        "Starting visim server"
    );

    let context = AppContext::bootstrap(config.clone())?;

    build_rocket(&config, context.service()).launch().await?;

    context.shutdown();
    Ok(())
}
