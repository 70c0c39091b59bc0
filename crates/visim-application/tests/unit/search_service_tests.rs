//! Tests for the similarity search use case
//!
//! Wires the service with in-process fakes implementing the real ports so
//! the orchestration (fetch -> embed -> normalize -> scan / upsert) is
//! validated end to end.

use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use futures::stream::{self, BoxStream};
use futures::StreamExt;

use visim_application::ports::services::SimilaritySearchInterface;
use visim_application::use_cases::{SearchDefaults, SimilaritySearchService};
use visim_domain::error::{Error, Result};
use visim_domain::ports::providers::{CatalogProvider, ImageEmbeddingProvider, ImageSource};
use visim_domain::value_objects::{l2_norm, Embedding, Product, StoredImage};

/// Image source that serves fixed bytes for any URL
struct StaticImageSource;

#[async_trait]
impl ImageSource for StaticImageSource {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        if url.contains("unreachable") {
            return Err(Error::image_fetch(format!("connection refused: {url}")));
        }
        Ok(vec![0x89, 0x50, 0x4e, 0x47])
    }

    fn source_name(&self) -> &str {
        "static"
    }
}

/// Embedding backend that returns one fixed, deliberately unnormalized vector
struct FixedEmbeddingProvider {
    vector: Vec<f32>,
}

#[async_trait]
impl ImageEmbeddingProvider for FixedEmbeddingProvider {
    async fn embed_image(&self, _image: &[u8]) -> Result<Embedding> {
        Ok(Embedding::new(self.vector.clone(), "fixed-test"))
    }

    fn dimensions(&self) -> usize {
        self.vector.len()
    }

    fn provider_name(&self) -> &str {
        "fixed"
    }
}

/// Catalog fake with a fixed product list and upsert recording
#[derive(Default)]
struct RecordingCatalog {
    products: Vec<Product>,
    upserts: Mutex<Vec<(String, String, Vec<f32>)>>,
}

#[async_trait]
impl CatalogProvider for RecordingCatalog {
    fn products(&self) -> BoxStream<'_, Result<Product>> {
        stream::iter(self.products.clone().into_iter().map(Ok)).boxed()
    }

    async fn count_products(&self) -> Result<usize> {
        Ok(self.products.len())
    }

    async fn upsert_image_embedding(
        &self,
        product_id: &str,
        image_url: &str,
        embedding: &[f32],
    ) -> Result<()> {
        self.upserts.lock().unwrap().push((
            product_id.to_string(),
            image_url.to_string(),
            embedding.to_vec(),
        ));
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "recording"
    }
}

fn service_with(
    vector: Vec<f32>,
    catalog: Arc<RecordingCatalog>,
    defaults: SearchDefaults,
) -> SimilaritySearchService {
    SimilaritySearchService::new(
        Arc::new(StaticImageSource),
        Arc::new(FixedEmbeddingProvider { vector }),
        catalog,
        defaults,
    )
}

#[tokio::test]
async fn compute_embedding_returns_a_unit_vector() {
    let service = service_with(
        vec![3.0, 4.0],
        Arc::new(RecordingCatalog::default()),
        SearchDefaults::default(),
    );

    let embedding = service
        .compute_embedding("https://cdn.example.com/query.jpg")
        .await
        .expect("embedding should succeed");

    assert!((l2_norm(&embedding.vector) - 1.0).abs() < 1e-6);
    assert!((embedding.vector[0] - 0.6).abs() < 1e-6);
    assert!((embedding.vector[1] - 0.8).abs() < 1e-6);
    assert_eq!(embedding.model, "fixed-test");
}

#[tokio::test]
async fn fetch_failure_propagates_as_image_fetch_error() {
    let service = service_with(
        vec![1.0, 0.0],
        Arc::new(RecordingCatalog::default()),
        SearchDefaults::default(),
    );

    let err = service
        .compute_embedding("https://unreachable.example.com/x.jpg")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::ImageFetch { .. }));
}

#[tokio::test]
async fn zero_embedding_from_backend_is_rejected() {
    let service = service_with(
        vec![0.0, 0.0],
        Arc::new(RecordingCatalog::default()),
        SearchDefaults::default(),
    );

    let err = service.compute_embedding("https://cdn.example.com/q.jpg").await.unwrap_err();
    assert!(matches!(err, Error::DegenerateVector { .. }));
}

#[tokio::test]
async fn find_similar_images_applies_configured_defaults() {
    let catalog = Arc::new(RecordingCatalog {
        products: vec![
            Product::new("P1", vec![StoredImage::with_embedding("hit", vec![1.0, 0.0])]),
            Product::new(
                "P2",
                vec![StoredImage::with_embedding("miss", vec![0.0, 1.0])],
            ),
        ],
        upserts: Mutex::new(Vec::new()),
    });
    let service = service_with(
        vec![2.0, 0.0],
        catalog,
        SearchDefaults {
            similarity_threshold: 0.7,
            top_k: 5,
        },
    );

    let matches = service
        .find_similar_images("https://cdn.example.com/q.jpg", None, None)
        .await
        .expect("query should succeed");

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].image_url, "hit");
    assert_eq!(matches[0].product_id, "P1");
}

#[tokio::test]
async fn find_similar_images_honors_overrides() {
    let products: Vec<Product> = (0..8)
        .map(|i| {
            Product::new(
                format!("P{i}"),
                vec![StoredImage::with_embedding(
                    format!("img-{i}"),
                    vec![1.0, i as f32 * 0.01],
                )],
            )
        })
        .collect();
    let catalog = Arc::new(RecordingCatalog {
        products,
        upserts: Mutex::new(Vec::new()),
    });
    let service = service_with(vec![1.0, 0.0], catalog, SearchDefaults::default());

    let matches = service
        .find_similar_images("https://cdn.example.com/q.jpg", Some(0.1), Some(2))
        .await
        .expect("query should succeed");

    assert_eq!(matches.len(), 2, "top_k override must cap the result");
}

#[tokio::test]
async fn index_product_image_stores_the_normalized_embedding() {
    let catalog = Arc::new(RecordingCatalog::default());
    let service = service_with(vec![3.0, 4.0], catalog.clone(), SearchDefaults::default());

    let embedding = service
        .index_product_image("P42", "https://cdn.example.com/new.jpg")
        .await
        .expect("indexing should succeed");

    let upserts = catalog.upserts.lock().unwrap();
    assert_eq!(upserts.len(), 1);
    let (product_id, image_url, stored) = &upserts[0];
    assert_eq!(product_id, "P42");
    assert_eq!(image_url, "https://cdn.example.com/new.jpg");
    assert_eq!(stored, &embedding.vector);
    assert!((l2_norm(stored) - 1.0).abs() < 1e-6);
}

#[tokio::test]
async fn health_check_consults_both_providers() {
    let service = service_with(
        vec![1.0, 0.0],
        Arc::new(RecordingCatalog::default()),
        SearchDefaults::default(),
    );
    service.health_check().await.expect("providers are healthy");
    assert_eq!(service.embedding_dimensions(), 2);
    assert_eq!(service.embedding_provider_name(), "fixed");
    assert_eq!(service.catalog_provider_name(), "recording");
}
