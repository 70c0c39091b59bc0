//! HTTP request handlers
//!
//! Thin glue between rocket and the application service: validate the
//! request, call the service, map the outcome to a JSON payload. The
//! error-to-status mapping lives here so the taxonomy surfaces uniformly
//! across every endpoint.

use std::sync::Arc;

use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{get, post, State};
use validator::Validate;

use visim_application::ports::services::SimilaritySearchInterface;
use visim_domain::error::Error;

use crate::models::{
    EmbeddingRequest, EmbeddingResponse, ErrorResponse, FindSimilarRequest, FindSimilarResponse,
    HealthResponse, IndexImageRequest, IndexImageResponse, SimilarImage,
};

/// Handler state holding the wired application service
#[derive(Clone)]
pub struct ApiState {
    /// The similarity search service, shared read-only across requests
    pub service: Arc<dyn SimilaritySearchInterface>,
}

/// Map a domain error to its HTTP status and structured payload
///
/// Whole-request failures keep their taxonomy identity on the wire;
/// per-entry scan faults never reach this point (the engine isolates
/// them), so seeing one here is an internal error.
fn error_response(err: Error) -> (Status, Json<ErrorResponse>) {
    let (status, code) = match &err {
        Error::ImageFetch { .. } => (Status::BadGateway, "IMAGE_FETCH_FAILED"),
        Error::ImageDecode { .. } => (Status::UnprocessableEntity, "IMAGE_DECODE_FAILED"),
        Error::EmbeddingProvider { .. } => (Status::BadGateway, "EMBEDDING_PROVIDER_FAILED"),
        Error::DegenerateVector { .. } => (Status::UnprocessableEntity, "DEGENERATE_VECTOR"),
        Error::DimensionMismatch { .. } => (Status::InternalServerError, "DIMENSION_MISMATCH"),
        Error::Catalog { .. } => (Status::ServiceUnavailable, "CATALOG_UNAVAILABLE"),
        Error::InvalidArgument { .. } => (Status::BadRequest, "INVALID_ARGUMENT"),
        Error::MalformedStoredEmbedding { .. }
        | Error::Configuration { .. }
        | Error::Io { .. }
        | Error::Internal { .. } => (Status::InternalServerError, "INTERNAL_ERROR"),
    };
    (status, Json(ErrorResponse::new(err.to_string(), code)))
}

/// Reject requests that fail declarative validation
fn validated<T: Validate>(request: &T) -> Result<(), (Status, Json<ErrorResponse>)> {
    request
        .validate()
        .map_err(|errors| (Status::BadRequest, Json(ErrorResponse::validation(&errors))))
}

/// Compute the embedding of an image
///
/// Fetches the image at the given URL, runs it through the embedding
/// backend, and returns the unit-normalized vector.
#[post("/get-embedding", format = "json", data = "<request>")]
pub async fn get_embedding(
    state: &State<ApiState>,
    request: Json<EmbeddingRequest>,
) -> Result<Json<EmbeddingResponse>, (Status, Json<ErrorResponse>)> {
    validated(&*request)?;

    let embedding = state
        .service
        .compute_embedding(&request.image_url)
        .await
        .map_err(error_response)?;

    Ok(Json(EmbeddingResponse::from(embedding)))
}

/// Find the stored catalog images most similar to a query image
///
/// Optional `threshold` and `top_k` fields override the configured
/// defaults for this request only.
#[post("/find-similar-images", format = "json", data = "<request>")]
pub async fn find_similar_images(
    state: &State<ApiState>,
    request: Json<FindSimilarRequest>,
) -> Result<Json<FindSimilarResponse>, (Status, Json<ErrorResponse>)> {
    validated(&*request)?;

    let matches = state
        .service
        .find_similar_images(&request.image_url, request.threshold, request.top_k)
        .await
        .map_err(error_response)?;

    Ok(Json(FindSimilarResponse {
        similar_images: matches.into_iter().map(SimilarImage::from).collect(),
    }))
}

/// Embed a product image and store the result in the catalog
#[post("/index-image", format = "json", data = "<request>")]
pub async fn index_image(
    state: &State<ApiState>,
    request: Json<IndexImageRequest>,
) -> Result<Json<IndexImageResponse>, (Status, Json<ErrorResponse>)> {
    validated(&*request)?;

    let embedding = state
        .service
        .index_product_image(&request.product_id, &request.image_url)
        .await
        .map_err(error_response)?;

    Ok(Json(IndexImageResponse {
        product_id: request.product_id.clone(),
        image_url: request.image_url.clone(),
        dimensions: embedding.dimensions,
    }))
}

/// Report the wiring and reachability of the service
#[get("/health")]
pub async fn health(
    state: &State<ApiState>,
) -> Result<Json<HealthResponse>, (Status, Json<ErrorResponse>)> {
    state.service.health_check().await.map_err(error_response)?;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        embedding_provider: state.service.embedding_provider_name().to_string(),
        catalog_provider: state.service.catalog_provider_name().to_string(),
        dimensions: state.service.embedding_dimensions(),
    }))
}
