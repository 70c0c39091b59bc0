//! # Visim Providers
//!
//! Implementations of the visim domain ports:
//!
//! - **embedding** - vision-embedding backends (CLIP inference server over
//!   HTTP, deterministic null provider for tests and development)
//! - **catalog** - product record stores (in-memory, filesystem JSON)
//! - **image_source** - query image retrieval (HTTP with format sniffing)
//!
//! Every provider registers itself into the linkme registries defined in
//! `visim-application`, so binaries only need to link this crate
//! (`extern crate visim_providers`) for all providers to be resolvable by
//! configured name.

pub mod catalog;
pub mod constants;
pub mod embedding;
pub mod image_source;
