//! Domain Port Interfaces
//!
//! Boundary contracts between the domain and the external layers. Ports
//! follow the Dependency Inversion Principle: the domain defines the
//! interfaces, the providers crate implements them, and the service is
//! wired from configuration at startup.

/// External service provider ports
pub mod providers;

pub use providers::{CatalogProvider, ImageEmbeddingProvider, ImageSource};
