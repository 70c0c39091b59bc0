//! # Visim Domain
//!
//! Core business types and contracts for the visim visual similarity search
//! service: embedding vectors and their math, catalog entities, the ranked
//! match record, the error taxonomy, and the provider ports implemented by
//! the outer layers.
//!
//! This crate is dependency-light on purpose: serialization, error derive,
//! and the async traits needed to express port contracts. Anything that
//! talks to the network, the filesystem, or a model lives behind the ports
//! in [`ports::providers`].

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;
