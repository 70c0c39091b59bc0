//! Provider-level constants

/// JSON content type header value
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Default base URL of the CLIP inference server
pub const DEFAULT_CLIP_BASE_URL: &str = "http://127.0.0.1:8000";

/// Default CLIP model served by the inference server
pub const DEFAULT_CLIP_MODEL: &str = "clip-vit-base-patch32";

/// Default request timeout for embedding and image fetches, in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Upper bound on fetched query image payloads (8 MiB)
///
/// Catalog photos are far smaller; anything beyond this is either not an
/// image or not worth embedding.
pub const MAX_IMAGE_BYTES: usize = 8 * 1024 * 1024;

/// Default data root of the filesystem catalog provider
pub const DEFAULT_CATALOG_ROOT: &str = "./data/catalog";

/// Default logical database name of the filesystem catalog provider
pub const DEFAULT_CATALOG_DATABASE: &str = "shop";

/// Default collection name holding product records
pub const DEFAULT_CATALOG_COLLECTION: &str = "products";

/// Error message prefix for request timeouts
pub const ERROR_MSG_REQUEST_TIMEOUT: &str = "Request timed out after";
