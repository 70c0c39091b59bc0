//! Application Port Interfaces
//!
//! Service interfaces consumed by the transport layer and the registries
//! through which provider implementations are discovered at startup.

pub mod registry;
pub mod services;

pub use services::SimilaritySearchInterface;
