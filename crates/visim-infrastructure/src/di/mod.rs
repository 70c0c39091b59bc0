//! Dependency wiring
//!
//! The composition root of the service. Providers are resolved from the
//! linkme registries by configured name, wrapped in `Arc`, and handed to
//! the application service as explicit constructor arguments. No part of
//! the system reaches for ambient globals.

pub mod bootstrap;

pub use bootstrap::AppContext;
