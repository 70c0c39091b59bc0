//! # Visim Infrastructure
//!
//! Cross-cutting concerns of the visim service: configuration loading and
//! validation (figment: defaults -> TOML file -> `VISIM_` environment),
//! structured logging via the tracing ecosystem, error context helpers,
//! and the dependency bootstrap that resolves configured providers and
//! assembles the application service at startup.

pub mod config;
pub mod di;
pub mod error_ext;
pub mod logging;
