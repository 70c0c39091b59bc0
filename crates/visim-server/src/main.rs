//! Visim - Visual Similarity Search Server
//!
//! HTTP service that embeds product images into fixed-length vectors and
//! retrieves the stored catalog images most visually similar to a query
//! image.
//!
//! ## Architecture
//!
//! - Domain layer: core types, vector math, and provider ports (visim-domain)
//! - Application layer: similarity engine, ranking, use cases (visim-application)
//! - Infrastructure: configuration, logging, dependency wiring (visim-infrastructure)
//! - Server: HTTP transport layer (visim-server)

// Force-link visim-providers to ensure linkme registry registrations are included
extern crate visim_providers;

use clap::Parser;
use visim_server::run;

/// Command line interface for the visim server
#[derive(Parser, Debug)]
#[command(name = "visim")]
#[command(about = "Visim - Visual Similarity Search Server")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,
}

/// Main entry point for the visim server
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run(cli.config.as_deref()).await
}
