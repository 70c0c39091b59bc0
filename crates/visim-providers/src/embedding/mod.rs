//! Embedding provider implementations

mod clip_server;
mod null;

pub use clip_server::ClipServerEmbeddingProvider;
pub use null::NullEmbeddingProvider;
