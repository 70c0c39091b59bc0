//! Tests for the in-memory catalog provider

use futures::StreamExt;
use visim_domain::error::Error;
use visim_domain::ports::providers::CatalogProvider;
use visim_domain::value_objects::{Product, StoredImage};
use visim_providers::catalog::InMemoryCatalog;

fn seeded() -> InMemoryCatalog {
    InMemoryCatalog::seeded(vec![
        Product::new(
            "P2",
            vec![StoredImage::with_embedding("b.jpg", vec![0.0, 1.0])],
        ),
        Product::new("P1", vec![StoredImage::new("a.jpg")]),
    ])
}

#[tokio::test]
async fn streams_products_sorted_by_id() {
    let catalog = seeded();

    let products: Vec<_> = catalog
        .products()
        .map(|record| record.unwrap().id)
        .collect()
        .await;
    assert_eq!(products, vec!["P1", "P2"]);
}

#[tokio::test]
async fn cursors_are_independent_snapshots() {
    let catalog = seeded();

    let mut first = catalog.products();
    assert_eq!(first.next().await.unwrap().unwrap().id, "P1");

    // A record inserted mid-scan is invisible to the open cursor
    catalog.insert_product(Product::new("P0", Vec::new()));
    assert_eq!(first.next().await.unwrap().unwrap().id, "P2");
    assert!(first.next().await.is_none());

    // ...but visible to the next one
    let ids: Vec<_> = catalog
        .products()
        .map(|record| record.unwrap().id)
        .collect()
        .await;
    assert_eq!(ids, vec!["P0", "P1", "P2"]);
}

#[tokio::test]
async fn count_reflects_inserts() {
    let catalog = seeded();
    assert_eq!(catalog.count_products().await.unwrap(), 2);

    catalog.insert_product(Product::new("P3", Vec::new()));
    assert_eq!(catalog.count_products().await.unwrap(), 3);
}

#[tokio::test]
async fn upsert_replaces_an_existing_image_embedding() {
    let catalog = seeded();
    catalog
        .upsert_image_embedding("P2", "b.jpg", &[0.5, 0.5])
        .await
        .unwrap();

    let product = catalog
        .products()
        .map(|record| record.unwrap())
        .filter(|p| futures::future::ready(p.id == "P2"))
        .next()
        .await
        .unwrap();
    assert_eq!(product.images[0].embedding, Some(vec![0.5, 0.5]));
}

#[tokio::test]
async fn upsert_appends_a_new_image() {
    let catalog = seeded();
    catalog
        .upsert_image_embedding("P1", "new.jpg", &[1.0, 0.0])
        .await
        .unwrap();

    let product = catalog
        .products()
        .map(|record| record.unwrap())
        .filter(|p| futures::future::ready(p.id == "P1"))
        .next()
        .await
        .unwrap();
    assert_eq!(product.images.len(), 2);
    assert_eq!(product.images[1].url, "new.jpg");
    assert_eq!(product.images[1].embedding, Some(vec![1.0, 0.0]));
}

#[tokio::test]
async fn upsert_into_unknown_product_fails() {
    let catalog = seeded();
    let err = catalog
        .upsert_image_embedding("missing", "x.jpg", &[1.0])
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Catalog { .. }));
}

#[tokio::test]
async fn health_check_passes() {
    let catalog = InMemoryCatalog::new();
    catalog.health_check().await.unwrap();
}
