//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the visim service
///
/// Request-aborting failures (fetch, decode, provider, catalog) carry an
/// optional source error; per-entry scan faults
/// ([`Error::MalformedStoredEmbedding`]) are recoverable and never abort a
/// query.
#[derive(Error, Debug)]
pub enum Error {
    /// Network failure while retrieving the query image
    #[error("Image fetch error: {message}")]
    ImageFetch {
        /// Description of the fetch failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The fetched bytes are not a decodable image
    #[error("Image decode error: {message}")]
    ImageDecode {
        /// Description of the decode failure
        message: String,
    },

    /// The vision model failed to produce an embedding
    #[error("Embedding provider error: {message}")]
    EmbeddingProvider {
        /// Description of the provider failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A zero-norm vector cannot be normalized or scored
    #[error("Degenerate vector: {message}")]
    DegenerateVector {
        /// Description of the degenerate input
        message: String,
    },

    /// Two vectors of different dimensionality were compared
    #[error("Dimension mismatch: expected {expected} components, got {actual}")]
    DimensionMismatch {
        /// Expected number of components
        expected: usize,
        /// Actual number of components
        actual: usize,
    },

    /// A stored embedding could not be scored; the entry is skipped
    #[error("Malformed stored embedding for image '{image_url}' of product '{product_id}': {reason}")]
    MalformedStoredEmbedding {
        /// Identifier of the owning product
        product_id: String,
        /// URL of the affected image
        image_url: String,
        /// Why the stored embedding is unusable
        reason: String,
    },

    /// Record-store failure while reading or writing catalog entries
    #[error("Catalog error: {message}")]
    Catalog {
        /// Description of the catalog failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid argument provided by a caller
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Image pipeline error creation methods
impl Error {
    /// Create an image fetch error
    pub fn image_fetch<S: Into<String>>(message: S) -> Self {
        Self::ImageFetch {
            message: message.into(),
            source: None,
        }
    }

    /// Create an image fetch error with source
    pub fn image_fetch_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::ImageFetch {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an image decode error
    pub fn image_decode<S: Into<String>>(message: S) -> Self {
        Self::ImageDecode {
            message: message.into(),
        }
    }

    /// Create an embedding provider error
    pub fn embedding<S: Into<String>>(message: S) -> Self {
        Self::EmbeddingProvider {
            message: message.into(),
            source: None,
        }
    }

    /// Create an embedding provider error with source
    pub fn embedding_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::EmbeddingProvider {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Vector math error creation methods
impl Error {
    /// Create a degenerate vector error
    pub fn degenerate_vector<S: Into<String>>(message: S) -> Self {
        Self::DegenerateVector {
            message: message.into(),
        }
    }

    /// Create a dimension mismatch error
    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch { expected, actual }
    }

    /// Create a malformed stored embedding error
    pub fn malformed_embedding<P, U, R>(product_id: P, image_url: U, reason: R) -> Self
    where
        P: Into<String>,
        U: Into<String>,
        R: Into<String>,
    {
        Self::MalformedStoredEmbedding {
            product_id: product_id.into(),
            image_url: image_url.into(),
            reason: reason.into(),
        }
    }
}

// Catalog and infrastructure error creation methods
impl Error {
    /// Create a catalog error
    pub fn catalog<S: Into<String>>(message: S) -> Self {
        Self::Catalog {
            message: message.into(),
            source: None,
        }
    }

    /// Create a catalog error with source
    pub fn catalog_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Catalog {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl Error {
    /// Whether this error is a recoverable per-entry scan fault
    ///
    /// Recoverable faults are logged and the affected catalog entry is
    /// skipped; every other variant aborts the request it occurred in.
    pub fn is_recoverable_scan_fault(&self) -> bool {
        matches!(
            self,
            Self::MalformedStoredEmbedding { .. }
                | Self::DimensionMismatch { .. }
                | Self::DegenerateVector { .. }
        )
    }
}
