//! # Visim Application
//!
//! Application layer of the visim visual similarity search service.
//!
//! Contains the heart of the system: the [`domain_services::SimilarityEngine`]
//! full-scan scorer, the [`domain_services::RankedResultSet`] bounded top-K
//! collection, and the [`use_cases::SimilaritySearchService`] that wires the
//! embedding backend, the image source, and the catalog together behind the
//! [`ports::services::SimilaritySearchInterface`] consumed by the transport
//! layer.
//!
//! Provider implementations register themselves into the linkme registries
//! under [`ports::registry`] and are resolved by name at bootstrap.

pub mod domain_services;
pub mod ports;
pub mod use_cases;
