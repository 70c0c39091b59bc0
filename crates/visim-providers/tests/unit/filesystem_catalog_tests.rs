//! Tests for the filesystem catalog provider

use futures::StreamExt;
use tempfile::TempDir;
use visim_domain::error::Error;
use visim_domain::ports::providers::CatalogProvider;
use visim_domain::value_objects::{Product, StoredImage};
use visim_providers::catalog::{FilesystemCatalog, FilesystemCatalogConfig};

fn catalog_in(dir: &TempDir) -> FilesystemCatalog {
    FilesystemCatalog::new(FilesystemCatalogConfig {
        root: dir.path().to_path_buf(),
        database: "shop".to_string(),
        collection: "products".to_string(),
    })
}

fn document_path(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("shop").join("products.json")
}

fn write_document(dir: &TempDir, products: &[Product]) {
    let path = document_path(dir);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, serde_json::to_string_pretty(products).unwrap()).unwrap();
}

#[tokio::test]
async fn missing_document_is_an_empty_catalog() {
    let dir = TempDir::new().unwrap();
    let catalog = catalog_in(&dir);

    assert_eq!(catalog.count_products().await.unwrap(), 0);
    assert!(catalog.products().next().await.is_none());
}

#[tokio::test]
async fn streams_products_from_the_document() {
    let dir = TempDir::new().unwrap();
    write_document(
        &dir,
        &[
            Product::new(
                "P1",
                vec![StoredImage::with_embedding("a.jpg", vec![1.0, 0.0])],
            ),
            Product::new("P2", vec![StoredImage::new("b.jpg")]),
        ],
    );

    let catalog = catalog_in(&dir);
    let ids: Vec<_> = catalog
        .products()
        .map(|record| record.unwrap().id)
        .collect()
        .await;
    assert_eq!(ids, vec!["P1", "P2"]);
}

#[tokio::test]
async fn corrupt_document_yields_a_catalog_error() {
    let dir = TempDir::new().unwrap();
    let path = document_path(&dir);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "{ not json").unwrap();

    let catalog = catalog_in(&dir);
    let first = catalog.products().next().await.unwrap();
    assert!(matches!(first.unwrap_err(), Error::Catalog { .. }));
}

#[tokio::test]
async fn upsert_persists_through_a_fresh_provider() {
    let dir = TempDir::new().unwrap();
    write_document(&dir, &[Product::new("P1", vec![StoredImage::new("a.jpg")])]);

    let catalog = catalog_in(&dir);
    catalog
        .upsert_image_embedding("P1", "a.jpg", &[0.25, 0.75])
        .await
        .unwrap();

    // Re-open the document through a brand new provider instance
    let reopened = catalog_in(&dir);
    let product = reopened.products().next().await.unwrap().unwrap();
    assert_eq!(product.images[0].embedding, Some(vec![0.25, 0.75]));
}

#[tokio::test]
async fn upsert_appends_unknown_image_urls() {
    let dir = TempDir::new().unwrap();
    write_document(&dir, &[Product::new("P1", Vec::new())]);

    let catalog = catalog_in(&dir);
    catalog
        .upsert_image_embedding("P1", "new.jpg", &[1.0])
        .await
        .unwrap();

    let product = catalog.products().next().await.unwrap().unwrap();
    assert_eq!(product.images.len(), 1);
    assert_eq!(product.images[0].url, "new.jpg");
}

#[tokio::test]
async fn upsert_into_unknown_product_fails() {
    let dir = TempDir::new().unwrap();
    write_document(&dir, &[]);

    let catalog = catalog_in(&dir);
    let err = catalog
        .upsert_image_embedding("missing", "x.jpg", &[1.0])
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Catalog { .. }));
}

#[tokio::test]
async fn external_edits_are_visible_to_the_next_cursor() {
    let dir = TempDir::new().unwrap();
    write_document(&dir, &[Product::new("P1", Vec::new())]);

    let catalog = catalog_in(&dir);
    assert_eq!(catalog.count_products().await.unwrap(), 1);

    // Another process rewrites the document between queries
    write_document(
        &dir,
        &[
            Product::new("P1", Vec::new()),
            Product::new("P2", Vec::new()),
        ],
    );
    assert_eq!(catalog.count_products().await.unwrap(), 2);
}
