//! Tests for the similarity scan engine
//!
//! The engine is exercised with in-memory product streams so every ranking
//! and fault-isolation rule is validated against real scoring, not mocks.

use futures::stream;
use visim_application::domain_services::SimilarityEngine;
use visim_domain::error::{Error, Result};
use visim_domain::value_objects::{Product, StoredImage};

fn product(id: &str, images: Vec<StoredImage>) -> Result<Product> {
    Ok(Product::new(id, images))
}

fn indexed(url: &str, embedding: Vec<f32>) -> StoredImage {
    StoredImage::with_embedding(url, embedding)
}

#[tokio::test]
async fn empty_catalog_yields_empty_result() {
    let matches =
        SimilarityEngine::find_similar(&[1.0, 0.0], stream::iter(Vec::new()), 0.5, 5).await;
    assert!(matches.is_empty());
}

#[tokio::test]
async fn opposite_vector_is_filtered_by_threshold() {
    // P1 carries the query direction, P2 its negation
    let unit = vec![0.6, 0.8];
    let neg: Vec<f32> = unit.iter().map(|x| -x).collect();
    let catalog = vec![
        product("P1", vec![indexed("a", unit.clone())]),
        product("P2", vec![indexed("b", neg)]),
    ];

    let matches = SimilarityEngine::find_similar(&unit, stream::iter(catalog), 0.5, 5).await;

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].image_url, "a");
    assert_eq!(matches[0].product_id, "P1");
    assert!((matches[0].score - 1.0).abs() < 1e-5);
}

#[tokio::test]
async fn threshold_comparison_is_strict() {
    // Orthogonal vectors score exactly 0.0; a threshold of 0.0 must
    // exclude them
    let catalog = vec![product("P1", vec![indexed("orthogonal", vec![0.0, 1.0])])];

    let matches =
        SimilarityEngine::find_similar(&[1.0, 0.0], stream::iter(catalog), 0.0, 5).await;
    assert!(matches.is_empty());
}

#[tokio::test]
async fn threshold_above_best_score_yields_empty_result() {
    // Best available score is ~0.94, threshold demands more
    let query = vec![1.0, 0.0];
    let angle = 0.94_f32.acos();
    let close = vec![angle.cos(), angle.sin()];
    let catalog = vec![product("P1", vec![indexed("close", close)])];

    let matches = SimilarityEngine::find_similar(&query, stream::iter(catalog), 0.95, 5).await;
    assert!(matches.is_empty());
}

#[tokio::test]
async fn never_returns_more_than_top_k() {
    let query = vec![1.0, 0.0];
    let catalog: Vec<Result<Product>> = (0..20)
        .map(|i| {
            product(
                &format!("P{i}"),
                vec![indexed(&format!("img-{i}"), vec![1.0, i as f32 * 1e-3])],
            )
        })
        .collect();

    let matches = SimilarityEngine::find_similar(&query, stream::iter(catalog), 0.5, 5).await;
    assert_eq!(matches.len(), 5);
}

#[tokio::test]
async fn results_are_sorted_descending() {
    let query = vec![1.0, 0.0];
    let catalog = vec![
        product("P1", vec![indexed("far", vec![0.5, 0.866])]),
        product("P2", vec![indexed("near", vec![1.0, 0.01])]),
        product("P3", vec![indexed("mid", vec![0.9, 0.436])]),
    ];

    let matches = SimilarityEngine::find_similar(&query, stream::iter(catalog), 0.2, 5).await;

    let urls: Vec<_> = matches.iter().map(|m| m.image_url.as_str()).collect();
    assert_eq!(urls, vec!["near", "mid", "far"]);
    assert!(matches.windows(2).all(|w| w[0].score >= w[1].score));
}

#[tokio::test]
async fn exact_ties_preserve_catalog_encounter_order() {
    // Identical stored vectors score identically; "b" is encountered first
    let query = vec![1.0, 0.0];
    let catalog = vec![
        product("P2", vec![indexed("b", vec![2.0, 0.0])]),
        product("P1", vec![indexed("a", vec![5.0, 0.0])]),
    ];

    let matches = SimilarityEngine::find_similar(&query, stream::iter(catalog), 0.5, 5).await;

    let urls: Vec<_> = matches.iter().map(|m| m.image_url.as_str()).collect();
    assert_eq!(urls, vec!["b", "a"]);
}

#[tokio::test]
async fn unindexed_images_are_skipped_silently() {
    let query = vec![1.0, 0.0];
    let catalog = vec![product(
        "P1",
        vec![
            StoredImage::new("not-indexed"),
            indexed("indexed", vec![1.0, 0.0]),
        ],
    )];

    let matches = SimilarityEngine::find_similar(&query, stream::iter(catalog), 0.5, 5).await;

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].image_url, "indexed");
}

#[tokio::test]
async fn malformed_stored_embedding_does_not_abort_the_scan() {
    let query = vec![1.0, 0.0];
    let catalog = vec![
        // Wrong dimensionality - stale embedding from an older model
        product("P1", vec![indexed("stale", vec![1.0, 0.0, 0.0])]),
        // Zero vector - unscorable
        product("P2", vec![indexed("zero", vec![0.0, 0.0])]),
        // Healthy entry after the faults
        product("P3", vec![indexed("good", vec![1.0, 0.1])]),
    ];

    let matches = SimilarityEngine::find_similar(&query, stream::iter(catalog), 0.5, 5).await;

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].image_url, "good");
}

#[tokio::test]
async fn unreadable_catalog_records_are_skipped() {
    let query = vec![1.0, 0.0];
    let catalog: Vec<Result<Product>> = vec![
        Err(Error::catalog("record 17 failed to deserialize")),
        product("P1", vec![indexed("good", vec![1.0, 0.0])]),
    ];

    let matches = SimilarityEngine::find_similar(&query, stream::iter(catalog), 0.5, 5).await;

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].image_url, "good");
}

#[tokio::test]
async fn scores_stay_above_threshold_and_within_bounds() {
    let query = vec![0.3, 0.7, 0.2];
    let catalog: Vec<Result<Product>> = (0..50)
        .map(|i| {
            let x = (i as f32 * 0.37).sin();
            let y = (i as f32 * 0.11).cos();
            let z = 0.5 - (i as f32 * 0.05).fract();
            product(&format!("P{i}"), vec![indexed(&format!("img-{i}"), vec![x, y, z])])
        })
        .collect();

    let threshold = 0.3;
    let matches =
        SimilarityEngine::find_similar(&query, stream::iter(catalog), threshold, 10).await;

    assert!(matches.len() <= 10);
    for entry in &matches {
        assert!(entry.score > threshold);
        assert!((-1.0..=1.0).contains(&entry.score));
    }
}
